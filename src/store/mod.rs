//! Client-side store for the item resource.

mod action;
mod container;
mod reducer;
mod state;

pub use action::{ActionKind, ItemAction, ItemOutcome};
pub use container::{ActionSender, ItemStore};
pub use reducer::ItemReducer;
pub use state::ItemState;
