//! Ports - interfaces the application core depends on.
//!
//! Adapters implement these traits; the application handlers only ever
//! see the trait objects.

mod profile_repository;
mod screening_repository;
mod session_validator;

pub use profile_repository::HealthProfileRepository;
pub use screening_repository::ScreeningRepository;
pub use session_validator::SessionValidator;
