//! Terminal front-end for a single REST "item" resource.
//!
//! ```text
//! View ──intent──→ EffectCoordinator ──HTTP──→ backend
//!   ↑                    │
//!   │              ItemAction (start / success / failure)
//!   │                    ↓
//!   └──── render ─── ItemStore
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod effects;
pub mod http;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod router;
pub mod store;
pub mod ui;
