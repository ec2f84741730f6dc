//! In-memory session screening repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionScreeningId, UserId};
use crate::domain::screening::SessionScreening;
use crate::ports::ScreeningRepository;

/// In-memory storage for screening records, keyed by screening ID.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScreeningRepository {
    screenings: Arc<RwLock<HashMap<SessionScreeningId, SessionScreening>>>,
}

impl InMemoryScreeningRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all stored screenings (useful for tests).
    pub async fn clear(&self) {
        self.screenings.write().await.clear();
    }

    /// Returns the number of stored screenings.
    pub async fn count(&self) -> usize {
        self.screenings.read().await.len()
    }
}

#[async_trait]
impl ScreeningRepository for InMemoryScreeningRepository {
    async fn create(&self, screening: &SessionScreening) -> Result<(), DomainError> {
        let mut screenings = self.screenings.write().await;
        screenings.insert(screening.id(), screening.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        screening_id: SessionScreeningId,
    ) -> Result<Option<SessionScreening>, DomainError> {
        let screenings = self.screenings.read().await;
        Ok(screenings.get(&screening_id).cloned())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SessionScreening>, DomainError> {
        let screenings = self.screenings.read().await;
        let mut records: Vec<SessionScreening> = screenings
            .values()
            .filter(|s| s.user_id() == user_id)
            .cloned()
            .collect();
        // Newest first.
        records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(records)
    }
}
