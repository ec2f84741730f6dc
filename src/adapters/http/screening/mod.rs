//! HTTP adapter for the screening endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ScreeningHandlers;
pub use routes::screening_routes;
