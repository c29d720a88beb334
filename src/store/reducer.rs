use crate::mvi::Reducer;

use super::action::{ActionKind, ItemAction, ItemOutcome};
use super::state::ItemState;

pub struct ItemReducer;

impl Reducer for ItemReducer {
    type State = ItemState;
    type Intent = ItemAction;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ItemAction::Started(kind) => {
                state.last_action = Some(kind);
                state.last_action_loading = true;
                state.last_action_error = None;
                state.last_action_success_message = None;
                if kind == ActionKind::GetOne {
                    state.selected_item = None;
                }
                state
            }

            ItemAction::Succeeded(outcome) => {
                let kind = outcome.kind();
                let message = outcome.success_message();
                merge(&mut state, outcome);

                // An outcome of another kind only merges data; the slot
                // belongs to the newer request.
                if state.last_action == Some(kind) {
                    state.last_action_loading = false;
                    state.last_action_error = None;
                    state.last_action_success_message = message.map(str::to_string);
                }
                state
            }

            ItemAction::Failed { kind, message } => {
                if state.last_action == Some(kind) {
                    state.last_action_loading = false;
                    state.last_action_success_message = None;
                    state.last_action_error = Some(message);
                } else {
                    tracing::warn!(
                        kind = %kind,
                        current = ?state.last_action,
                        error = %message,
                        "Failure of an earlier request left out of the status slot"
                    );
                }
                state
            }
        }
    }
}

fn merge(state: &mut ItemState, outcome: ItemOutcome) {
    match outcome {
        ItemOutcome::Listed(items) => state.items = items,
        ItemOutcome::Added(item) => state.items.push(item),
        ItemOutcome::Fetched(item) => state.selected_item = Some(item),
        ItemOutcome::Updated(item) => {
            match state.items.iter_mut().find(|existing| existing.id == item.id) {
                Some(existing) => *existing = item,
                None => tracing::warn!(
                    id = item.id,
                    "Updated item is not in the local list; list left unchanged"
                ),
            }
        }
        ItemOutcome::Deleted(id) => state.items.retain(|item| item.id != id),
    }
}
