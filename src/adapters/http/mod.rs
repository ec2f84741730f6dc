//! HTTP adapters - REST API implementations.

pub mod middleware;
pub mod screening;

pub use screening::{screening_routes, ScreeningHandlers};
