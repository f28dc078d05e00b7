//! Suivi service: follow-up timelines and follow-up form handling.

use crate::error::ApiResult;
use crate::models::{Suivi, SuiviCreateRequest};
use crate::query::{self, SuiviFilterSpec};
use crate::repositories::SuiviRepository;
use crate::services::ServiceError;
use crate::timeline::{self, TimelinePosition};
use crate::validation;
use async_trait::async_trait;
use std::sync::Arc;

/// Business operations over suivi records.
#[async_trait]
pub trait SuiviService: Send + Sync {
    /// The chronological timeline of a courrier: follow-ups most-recent
    /// first, each paired with its presentation marker.
    async fn timeline(&self, courrier_id: i64) -> ApiResult<Vec<(Suivi, TimelinePosition)>>;

    /// The most recent follow-up of a courrier.
    async fn latest(&self, courrier_id: i64) -> ApiResult<Suivi>;

    /// Run the suivi search for the given criteria.
    async fn search(&self, spec: &SuiviFilterSpec) -> ApiResult<Vec<Suivi>>;

    /// Validate and add a follow-up under a courrier.
    async fn add(
        &self,
        courrier_id: i64,
        draft: &SuiviCreateRequest,
    ) -> Result<Suivi, ServiceError>;

    /// Validate and update an existing follow-up.
    async fn update(&self, id: i64, draft: &SuiviCreateRequest) -> Result<Suivi, ServiceError>;

    /// Delete a follow-up.
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

/// Default implementation over a [`SuiviRepository`].
pub struct SuiviServiceImpl {
    repo: Arc<dyn SuiviRepository>,
}

impl SuiviServiceImpl {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<dyn SuiviRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl SuiviService for SuiviServiceImpl {
    async fn timeline(&self, courrier_id: i64) -> ApiResult<Vec<(Suivi, TimelinePosition)>> {
        let suivis = self.repo.find_by_courrier(courrier_id).await?;
        Ok(timeline::annotate(&suivis))
    }

    async fn latest(&self, courrier_id: i64) -> ApiResult<Suivi> {
        self.repo.latest_for_courrier(courrier_id).await
    }

    async fn search(&self, spec: &SuiviFilterSpec) -> ApiResult<Vec<Suivi>> {
        query::resolve_suivis(self.repo.as_ref(), spec).await
    }

    async fn add(
        &self,
        courrier_id: i64,
        draft: &SuiviCreateRequest,
    ) -> Result<Suivi, ServiceError> {
        validation::validate_suivi_draft(draft)?;
        let suivi = self.repo.create(courrier_id, draft).await?;
        tracing::info!("Suivi added under courrier {}", courrier_id);
        Ok(suivi)
    }

    async fn update(&self, id: i64, draft: &SuiviCreateRequest) -> Result<Suivi, ServiceError> {
        validation::validate_suivi_draft(draft)?;
        Ok(self.repo.update(id, draft).await?)
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        tracing::info!("Deleting suivi {}", id);
        self.repo.delete(id).await
    }
}
