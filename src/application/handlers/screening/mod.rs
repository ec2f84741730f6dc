//! Screening handlers - the request-side orchestration of the risk engine.

mod check_status;
mod complete_screening;
mod get_profile;
mod update_profile;

pub use check_status::{CheckScreeningStatusHandler, CheckScreeningStatusQuery, ScreeningStatus};
pub use complete_screening::{
    CompleteScreeningCommand, CompleteScreeningHandler, CompleteScreeningResult,
};
pub use get_profile::{GetHealthProfileHandler, GetHealthProfileQuery};
pub use update_profile::{UpdateHealthProfileCommand, UpdateHealthProfileHandler};
