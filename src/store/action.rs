use std::fmt;

use crate::model::{Item, ItemId};
use crate::mvi::Intent;

/// Which operation a lifecycle slot is tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    List,
    Create,
    GetOne,
    Update,
    Delete,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::List,
        ActionKind::Create,
        ActionKind::GetOne,
        ActionKind::Update,
        ActionKind::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::List => "list",
            ActionKind::Create => "create",
            ActionKind::GetOne => "get-one",
            ActionKind::Update => "update",
            ActionKind::Delete => "delete",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ActionKind::List => 0,
            ActionKind::Create => 1,
            ActionKind::GetOne => 2,
            ActionKind::Update => 3,
            ActionKind::Delete => 4,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data carried by a successful outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    Listed(Vec<Item>),
    Added(Item),
    Fetched(Item),
    Updated(Item),
    Deleted(ItemId),
}

impl ItemOutcome {
    pub fn kind(&self) -> ActionKind {
        match self {
            ItemOutcome::Listed(_) => ActionKind::List,
            ItemOutcome::Added(_) => ActionKind::Create,
            ItemOutcome::Fetched(_) => ActionKind::GetOne,
            ItemOutcome::Updated(_) => ActionKind::Update,
            ItemOutcome::Deleted(_) => ActionKind::Delete,
        }
    }

    /// Message shown after the operation succeeds, if any.
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            ItemOutcome::Added(_) => Some("Item successfully added!"),
            ItemOutcome::Updated(_) => Some("Item successfully updated!"),
            ItemOutcome::Deleted(_) => Some("Item successfully deleted!"),
            ItemOutcome::Listed(_) | ItemOutcome::Fetched(_) => None,
        }
    }
}

/// Lifecycle actions applied to the item store.
///
/// Only the effect coordinator produces these.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemAction {
    /// A request of this kind was issued.
    Started(ActionKind),
    /// The request completed and its data should be merged.
    Succeeded(ItemOutcome),
    /// The request failed after the HTTP client's retries.
    Failed { kind: ActionKind, message: String },
}

impl ItemAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            ItemAction::Started(kind) => *kind,
            ItemAction::Succeeded(outcome) => outcome.kind(),
            ItemAction::Failed { kind, .. } => *kind,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ItemAction::Started(_))
    }
}

impl Intent for ItemAction {}
