//! Paths, screens and the one-shot message passed between them.

mod navigator;
mod route;

pub use navigator::Navigator;
pub use route::Route;
