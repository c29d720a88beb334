use tokio::sync::mpsc;

use crate::dispatch_mvi;

use super::action::ItemAction;
use super::reducer::ItemReducer;
use super::state::ItemState;

/// Write end of the store's action queue, held by the effect coordinator.
#[derive(Debug, Clone)]
pub struct ActionSender {
    tx: mpsc::UnboundedSender<ItemAction>,
}

impl ActionSender {
    /// Queue an action. Returns false if the store is gone.
    pub fn send(&self, action: ItemAction) -> bool {
        self.tx.send(action).is_ok()
    }
}

/// Owner of the application's [`ItemState`].
///
/// The state changes only by applying queued [`ItemAction`]s, in the order
/// they were sent.
pub struct ItemStore {
    state: ItemState,
    rx: mpsc::UnboundedReceiver<ItemAction>,
}

impl ItemStore {
    pub fn new() -> (Self, ActionSender) {
        let (tx, rx) = mpsc::unbounded_channel();
        let store = Self {
            state: ItemState::default(),
            rx,
        };
        (store, ActionSender { tx })
    }

    pub fn state(&self) -> &ItemState {
        &self.state
    }

    /// Apply every action queued so far without waiting.
    ///
    /// Returns how many actions were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.apply(action);
            applied += 1;
        }
        applied
    }

    /// Wait for the next action and apply it.
    ///
    /// Returns the applied action, or `None` once every sender is dropped.
    pub async fn recv(&mut self) -> Option<ItemAction> {
        let action = self.rx.recv().await?;
        self.apply(action.clone());
        Some(action)
    }

    /// Apply actions until one is terminal (success or failure).
    pub async fn recv_terminal(&mut self) -> Option<ItemAction> {
        loop {
            let action = self.recv().await?;
            if action.is_terminal() {
                return Some(action);
            }
        }
    }

    fn apply(&mut self, action: ItemAction) {
        tracing::trace!(kind = %action.kind(), terminal = action.is_terminal(), "Applying action");
        dispatch_mvi!(self, state, ItemReducer, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ActionKind, ItemOutcome};

    #[test]
    fn pump_applies_in_send_order() {
        let (mut store, sender) = ItemStore::new();
        assert!(sender.send(ItemAction::Started(ActionKind::List)));
        assert!(sender.send(ItemAction::Succeeded(ItemOutcome::Listed(vec![]))));

        assert_eq!(store.pump(), 2);
        assert_eq!(store.state().last_action, Some(ActionKind::List));
        assert!(!store.state().last_action_loading);
        assert_eq!(store.pump(), 0);
    }

    #[test]
    fn send_fails_after_store_dropped() {
        let (store, sender) = ItemStore::new();
        drop(store);
        assert!(!sender.send(ItemAction::Started(ActionKind::List)));
    }

    #[tokio::test]
    async fn recv_terminal_skips_start() {
        let (mut store, sender) = ItemStore::new();
        sender.send(ItemAction::Started(ActionKind::Delete));
        sender.send(ItemAction::Failed {
            kind: ActionKind::Delete,
            message: "nope".to_string(),
        });

        let action = store.recv_terminal().await.unwrap();
        assert!(matches!(action, ItemAction::Failed { .. }));
        assert_eq!(store.state().last_action_error.as_deref(), Some("nope"));
    }

    #[tokio::test]
    async fn recv_returns_none_when_senders_dropped() {
        let (mut store, sender) = ItemStore::new();
        drop(sender);
        assert!(store.recv().await.is_none());
    }
}
