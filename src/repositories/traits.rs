use crate::error::ApiResult;
use crate::models::*;
use crate::validation::Attachment;
use async_trait::async_trait;

/// Repository for courrier records.
///
/// Abstraction over the remote record store, enabling different
/// implementations (API client, in-memory mock). The query/filter and
/// aggregation engines depend only on this contract.
#[async_trait]
pub trait CourrierRepository: Send + Sync {
    /// Retrieve a single courrier by id.
    async fn get(&self, id: i64) -> ApiResult<Courrier>;

    /// Retrieve a courrier by its unique reference number.
    async fn get_by_num(&self, num: &str) -> ApiResult<Courrier>;

    /// Retrieve the full set.
    async fn list(&self) -> ApiResult<Vec<Courrier>>;

    /// Query by internal/external type.
    async fn find_by_type(&self, type_: CourrierType) -> ApiResult<Vec<Courrier>>;

    /// Query by incoming/outgoing nature.
    async fn find_by_nature(&self, nature: Nature) -> ApiResult<Vec<Courrier>>;

    /// Query by exact date.
    async fn find_by_date(&self, date: &str) -> ApiResult<Vec<Courrier>>;

    /// Query by inclusive date range.
    async fn find_between_dates(&self, start: &str, end: &str) -> ApiResult<Vec<Courrier>>;

    /// Query by recipient fragment.
    async fn find_by_destinataire(&self, destinataire: &str) -> ApiResult<Vec<Courrier>>;

    /// Query by sender fragment.
    async fn find_by_expediteur(&self, expediteur: &str) -> ApiResult<Vec<Courrier>>;

    /// Query by subject substring.
    async fn find_by_objet(&self, objet: &str) -> ApiResult<Vec<Courrier>>;

    /// Check reference-number uniqueness.
    async fn exists_by_num(&self, num: &str) -> ApiResult<bool>;

    /// Create a new courrier.
    async fn create(&self, request: &CourrierCreateRequest) -> ApiResult<Courrier>;

    /// Update an existing courrier.
    async fn update(&self, id: i64, request: &CourrierCreateRequest) -> ApiResult<Courrier>;

    /// Delete a courrier.
    async fn delete(&self, id: i64) -> ApiResult<()>;

    /// Upload the attached document.
    async fn upload_attachment(&self, id: i64, attachment: &Attachment) -> ApiResult<Courrier>;
}

/// Repository for suivi records.
#[async_trait]
pub trait SuiviRepository: Send + Sync {
    /// Retrieve a single suivi by id.
    async fn get(&self, id: i64) -> ApiResult<Suivi>;

    /// Retrieve all suivis across all courriers.
    async fn list(&self) -> ApiResult<Vec<Suivi>>;

    /// Get the suivis of a courrier, in creation order.
    async fn find_by_courrier(&self, courrier_id: i64) -> ApiResult<Vec<Suivi>>;

    /// Get the most recent suivi of a courrier.
    async fn latest_for_courrier(&self, courrier_id: i64) -> ApiResult<Suivi>;

    /// Query by exact date.
    async fn find_by_date(&self, date: &str) -> ApiResult<Vec<Suivi>>;

    /// Query by inclusive date range.
    async fn find_between_dates(&self, start: &str, end: &str) -> ApiResult<Vec<Suivi>>;

    /// Query by instruction substring.
    async fn find_by_instruction(&self, instruction: &str) -> ApiResult<Vec<Suivi>>;

    /// Create a suivi under a courrier.
    async fn create(&self, courrier_id: i64, request: &SuiviCreateRequest) -> ApiResult<Suivi>;

    /// Update an existing suivi.
    async fn update(&self, id: i64, request: &SuiviCreateRequest) -> ApiResult<Suivi>;

    /// Delete a suivi.
    async fn delete(&self, id: i64) -> ApiResult<()>;
}
