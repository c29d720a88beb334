use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::api::ItemApi;
use crate::store::{ActionKind, ActionSender, ItemAction, ItemOutcome};

use super::intent::ItemIntent;

/// Generation counters and the store channel behind one lock, so that
/// bumping a generation and emitting under it cannot interleave.
struct Emitter {
    generations: [u64; ActionKind::ALL.len()],
    sender: ActionSender,
}

impl Emitter {
    fn begin(&mut self, kind: ActionKind) -> u64 {
        let slot = &mut self.generations[kind.index()];
        *slot += 1;
        let generation = *slot;
        self.sender.send(ItemAction::Started(kind));
        generation
    }

    fn finish(&self, kind: ActionKind, generation: u64, action: ItemAction) {
        let current = self.generations[kind.index()];
        if current != generation {
            tracing::trace!(
                kind = %kind,
                generation,
                current,
                "Dropping outcome of superseded request"
            );
            return;
        }
        if !self.sender.send(action) {
            tracing::debug!(kind = %kind, "Store gone; outcome dropped");
        }
    }
}

/// Runs item intents against the backend and reports their lifecycle to
/// the store.
///
/// Per intent kind the latest dispatch wins: an outcome that arrives after
/// a newer intent of the same kind was dispatched is discarded. Intents of
/// different kinds run independently.
#[derive(Clone)]
pub struct EffectCoordinator {
    api: Arc<dyn ItemApi>,
    emitter: Arc<Mutex<Emitter>>,
    runtime: Handle,
}

impl EffectCoordinator {
    pub fn new(api: Arc<dyn ItemApi>, sender: ActionSender, runtime: Handle) -> Self {
        Self {
            api,
            emitter: Arc::new(Mutex::new(Emitter {
                generations: [0; ActionKind::ALL.len()],
                sender,
            })),
            runtime,
        }
    }

    /// Emit the start action now and run the request in the background.
    ///
    /// The returned handle completes after the terminal action was emitted
    /// or discarded.
    pub fn dispatch(&self, intent: ItemIntent) -> JoinHandle<()> {
        let kind = intent.kind();
        let generation = self.emitter.lock().begin(kind);
        tracing::debug!(kind = %kind, generation, "Dispatching intent");

        let api = Arc::clone(&self.api);
        let emitter = Arc::clone(&self.emitter);
        self.runtime.spawn(async move {
            let action = perform(api.as_ref(), intent).await;
            emitter.lock().finish(kind, generation, action);
        })
    }
}

impl std::fmt::Debug for EffectCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectCoordinator")
            .field("generations", &self.emitter.lock().generations)
            .finish()
    }
}

async fn perform(api: &dyn ItemApi, intent: ItemIntent) -> ItemAction {
    let kind = intent.kind();
    let result = match intent {
        ItemIntent::Fetch => api.list().await.map(ItemOutcome::Listed),
        ItemIntent::GetOne(id) => api.get(id).await.map(ItemOutcome::Fetched),
        ItemIntent::Add(item) => api.create(&item).await.map(ItemOutcome::Added),
        ItemIntent::Update { id, patch } => {
            api.update(id, &patch).await.map(ItemOutcome::Updated)
        }
        ItemIntent::Delete(id) => api.delete(id).await.map(|()| ItemOutcome::Deleted(id)),
    };

    match result {
        Ok(outcome) => ItemAction::Succeeded(outcome),
        Err(err) => {
            tracing::debug!(kind = %kind, error_type = err.error_type(), "Intent failed");
            ItemAction::Failed {
                kind,
                message: err.to_string(),
            }
        }
    }
}
