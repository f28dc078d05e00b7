use crate::client::AsyncCourrierApi;
use crate::error::ApiResult;
use crate::models::{Suivi, SuiviCreateRequest};
use crate::repositories::traits::SuiviRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Suivi repository backed by the remote API client.
pub struct ApiSuiviRepository {
    client: Arc<dyn AsyncCourrierApi>,
}

impl ApiSuiviRepository {
    /// Create a new repository over the given client.
    pub fn new(client: Arc<dyn AsyncCourrierApi>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SuiviRepository for ApiSuiviRepository {
    async fn get(&self, id: i64) -> ApiResult<Suivi> {
        self.client.get_suivi(id).await
    }

    async fn list(&self) -> ApiResult<Vec<Suivi>> {
        self.client.get_all_suivis().await
    }

    async fn find_by_courrier(&self, courrier_id: i64) -> ApiResult<Vec<Suivi>> {
        self.client.get_suivis_by_courrier(courrier_id).await
    }

    async fn latest_for_courrier(&self, courrier_id: i64) -> ApiResult<Suivi> {
        self.client.get_latest_suivi(courrier_id).await
    }

    async fn find_by_date(&self, date: &str) -> ApiResult<Vec<Suivi>> {
        self.client.get_suivis_by_date(date).await
    }

    async fn find_between_dates(&self, start: &str, end: &str) -> ApiResult<Vec<Suivi>> {
        self.client.get_suivis_between_dates(start, end).await
    }

    async fn find_by_instruction(&self, instruction: &str) -> ApiResult<Vec<Suivi>> {
        self.client.get_suivis_by_instruction(instruction).await
    }

    async fn create(&self, courrier_id: i64, request: &SuiviCreateRequest) -> ApiResult<Suivi> {
        self.client.create_suivi(courrier_id, request).await
    }

    async fn update(&self, id: i64, request: &SuiviCreateRequest) -> ApiResult<Suivi> {
        self.client.update_suivi(id, request).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete_suivi(id).await
    }
}
