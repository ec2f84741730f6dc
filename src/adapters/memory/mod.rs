//! In-memory repository adapters.
//!
//! Backing store for development and tests. All state is lost on restart.

mod profile_repository;
mod screening_repository;

pub use profile_repository::InMemoryProfileRepository;
pub use screening_repository::InMemoryScreeningRepository;
