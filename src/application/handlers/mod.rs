//! Application handlers, grouped by domain module.

pub mod screening;
