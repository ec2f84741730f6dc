//! ScreeningRepository port for session screening records.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionScreeningId, UserId};
use crate::domain::screening::SessionScreening;

/// Repository for per-session safety screening records.
///
/// Records are append-only: one per mediation attempt, never mutated.
#[async_trait]
pub trait ScreeningRepository: Send + Sync {
    /// Persist a completed screening.
    async fn create(&self, screening: &SessionScreening) -> Result<(), DomainError>;

    /// Find a screening by ID.
    async fn find_by_id(
        &self,
        screening_id: SessionScreeningId,
    ) -> Result<Option<SessionScreening>, DomainError>;

    /// List a user's screenings, most recent first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<SessionScreening>, DomainError>;
}
