//! Adapters - implementations of the ports for concrete infrastructure.

pub mod auth;
pub mod http;
pub mod memory;
