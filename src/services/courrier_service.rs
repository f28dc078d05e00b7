//! Courrier service: loads, searches, dashboard statistics and the
//! save-with-attachment flow.

use crate::config::Config;
use crate::error::ApiResult;
use crate::models::{Courrier, CourrierCreateRequest};
use crate::query::{self, FilterSpec};
use crate::repositories::CourrierRepository;
use crate::services::ServiceError;
use crate::stats::{self, DashboardStats};
use crate::validation::{self, Attachment};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

/// Result of a save: the record always persisted, the attachment possibly
/// not. An upload failure after a successful save is deliberately lenient:
/// the save is reported as a success and the upload failure as a separate
/// warning, and the caller proceeds as if the whole operation succeeded.
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    /// Record saved, attachment (if any) uploaded
    Saved(Courrier),

    /// Record saved but the attachment upload failed
    SavedWithUploadWarning { courrier: Courrier, warning: String },
}

impl SaveOutcome {
    /// The persisted record, whatever happened to the attachment.
    pub fn courrier(&self) -> &Courrier {
        match self {
            SaveOutcome::Saved(courrier) => courrier,
            SaveOutcome::SavedWithUploadWarning { courrier, .. } => courrier,
        }
    }
}

/// Business operations over courrier records.
#[async_trait]
pub trait CourrierService: Send + Sync {
    /// Retrieve the full set.
    async fn load_all(&self) -> ApiResult<Vec<Courrier>>;

    /// Load a single courrier for the detail view.
    async fn load(&self, id: i64) -> ApiResult<Courrier>;

    /// Run the advanced search for the given criteria.
    async fn search(&self, spec: &FilterSpec) -> ApiResult<Vec<Courrier>>;

    /// Compute dashboard statistics against an explicit reference date.
    async fn dashboard(&self, reference: NaiveDate) -> ApiResult<DashboardStats>;

    /// Compute dashboard statistics for "now", resolving the reference
    /// date in local or UTC time per configuration.
    async fn dashboard_now(&self) -> ApiResult<DashboardStats>;

    /// Check whether a reference number is free.
    async fn is_num_available(&self, num: &str) -> ApiResult<bool>;

    /// Validate and persist a draft, creating or updating depending on
    /// `id`, then upload the attachment if one was selected.
    async fn save(
        &self,
        id: Option<i64>,
        draft: &CourrierCreateRequest,
        attachment: Option<&Attachment>,
    ) -> Result<SaveOutcome, ServiceError>;

    /// Delete a courrier. Completes (success or failure) before any
    /// dependent reload is triggered; there is no cancellation.
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

/// Default implementation over a [`CourrierRepository`].
pub struct CourrierServiceImpl {
    repo: Arc<dyn CourrierRepository>,
    config: Config,
}

impl CourrierServiceImpl {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<dyn CourrierRepository>, config: Config) -> Self {
        Self { repo, config }
    }

    fn reference_date(&self) -> NaiveDate {
        if self.config.period_in_utc {
            chrono::Utc::now().date_naive()
        } else {
            chrono::Local::now().date_naive()
        }
    }
}

#[async_trait]
impl CourrierService for CourrierServiceImpl {
    async fn load_all(&self) -> ApiResult<Vec<Courrier>> {
        self.repo.list().await
    }

    async fn load(&self, id: i64) -> ApiResult<Courrier> {
        self.repo.get(id).await
    }

    async fn search(&self, spec: &FilterSpec) -> ApiResult<Vec<Courrier>> {
        query::resolve(self.repo.as_ref(), spec).await
    }

    async fn dashboard(&self, reference: NaiveDate) -> ApiResult<DashboardStats> {
        let records = self.repo.list().await?;
        Ok(stats::summarize(
            &records,
            reference,
            self.config.recent_courriers,
        ))
    }

    async fn dashboard_now(&self) -> ApiResult<DashboardStats> {
        self.dashboard(self.reference_date()).await
    }

    async fn is_num_available(&self, num: &str) -> ApiResult<bool> {
        let exists = self.repo.exists_by_num(num).await?;
        Ok(!exists)
    }

    async fn save(
        &self,
        id: Option<i64>,
        draft: &CourrierCreateRequest,
        attachment: Option<&Attachment>,
    ) -> Result<SaveOutcome, ServiceError> {
        // Local checks first; neither ever reaches the collaborator.
        validation::validate_courrier_draft(draft)?;
        if let Some(attachment) = attachment {
            validation::validate_attachment(attachment, self.config.max_upload_bytes)?;
        }

        let saved = match id {
            Some(id) => self.repo.update(id, draft).await?,
            None => self.repo.create(draft).await?,
        };
        tracing::info!("Courrier {} saved", saved.num_courrier);

        let Some(attachment) = attachment else {
            return Ok(SaveOutcome::Saved(saved));
        };

        let Some(saved_id) = saved.id else {
            // Store answered without an id; the attachment cannot be keyed
            return Ok(SaveOutcome::SavedWithUploadWarning {
                courrier: saved,
                warning: "The record was saved but the file could not be attached".to_string(),
            });
        };

        match self.repo.upload_attachment(saved_id, attachment).await {
            Ok(with_attachment) => Ok(SaveOutcome::Saved(with_attachment)),
            Err(e) => {
                tracing::warn!(
                    "Courrier {} saved but attachment upload failed: {}",
                    saved_id,
                    e
                );
                Ok(SaveOutcome::SavedWithUploadWarning {
                    courrier: saved,
                    warning: e.user_message(),
                })
            }
        }
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        tracing::info!("Deleting courrier {}", id);
        self.repo.delete(id).await
    }
}
