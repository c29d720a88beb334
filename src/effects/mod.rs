//! Bridges view intents to backend calls and store lifecycle actions.

mod coordinator;
mod intent;

pub use coordinator::EffectCoordinator;
pub use intent::ItemIntent;
