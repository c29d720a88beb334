use crate::model::{Item, ItemId};
use crate::mvi::UiState;

use super::action::ActionKind;

/// Client-side copy of the item resource plus the lifecycle slot of the
/// most recently started request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemState {
    /// Items in server response order.
    pub items: Vec<Item>,
    /// Subject of the detail/edit view. Only a get-one success sets it.
    pub selected_item: Option<Item>,
    pub last_action: Option<ActionKind>,
    /// True between the start of `last_action` and its outcome.
    pub last_action_loading: bool,
    pub last_action_error: Option<String>,
    pub last_action_success_message: Option<String>,
}

impl UiState for ItemState {}

impl ItemState {
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether the slot is tracking `kind` and still waiting for it.
    pub fn is_loading(&self, kind: ActionKind) -> bool {
        self.last_action == Some(kind) && self.last_action_loading
    }

    /// Error of the last action, if it was `kind`.
    pub fn error_for(&self, kind: ActionKind) -> Option<&str> {
        if self.last_action == Some(kind) {
            self.last_action_error.as_deref()
        } else {
            None
        }
    }

    /// Success message of the last action, if it was `kind`.
    pub fn success_for(&self, kind: ActionKind) -> Option<&str> {
        if self.last_action == Some(kind) {
            self.last_action_success_message.as_deref()
        } else {
            None
        }
    }
}
