//! Clear Accord - Session Safety Screening Service
//!
//! This crate implements the risk-assessment engine that gates entry to
//! mediation sessions, combining a user's standing intake profile with
//! per-session situational answers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
