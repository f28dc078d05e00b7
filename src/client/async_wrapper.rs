//! Async wrapper around the synchronous [`CourrierApiClient`].
//!
//! Runs HTTP operations on `tokio::task::spawn_blocking` so the sync client
//! never blocks the async runtime.

use crate::client::CourrierApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{Courrier, CourrierCreateRequest, CourrierType, Nature, Suivi,
    SuiviCreateRequest};
use crate::validation::Attachment;
use async_trait::async_trait;
use std::sync::Arc;

/// Async surface of the remote record store.
///
/// This is the contract the repositories depend on; the engines above them
/// never see transport details.
#[async_trait]
pub trait AsyncCourrierApi: Send + Sync {
    async fn get_all_courriers(&self) -> ApiResult<Vec<Courrier>>;
    async fn get_courrier(&self, id: i64) -> ApiResult<Courrier>;
    async fn get_courrier_by_num(&self, num: &str) -> ApiResult<Courrier>;
    async fn create_courrier(&self, request: &CourrierCreateRequest) -> ApiResult<Courrier>;
    async fn update_courrier(
        &self,
        id: i64,
        request: &CourrierCreateRequest,
    ) -> ApiResult<Courrier>;
    async fn delete_courrier(&self, id: i64) -> ApiResult<()>;
    async fn get_courriers_by_type(&self, type_: CourrierType) -> ApiResult<Vec<Courrier>>;
    async fn get_courriers_by_nature(&self, nature: Nature) -> ApiResult<Vec<Courrier>>;
    async fn get_courriers_by_date(&self, date: &str) -> ApiResult<Vec<Courrier>>;
    async fn get_courriers_between_dates(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> ApiResult<Vec<Courrier>>;
    async fn get_courriers_by_destinataire(&self, destinataire: &str)
        -> ApiResult<Vec<Courrier>>;
    async fn get_courriers_by_expediteur(&self, expediteur: &str) -> ApiResult<Vec<Courrier>>;
    async fn get_courriers_by_objet(&self, objet: &str) -> ApiResult<Vec<Courrier>>;
    async fn exists_by_num(&self, num: &str) -> ApiResult<bool>;
    async fn upload_pdf(&self, courrier_id: i64, attachment: &Attachment) -> ApiResult<Courrier>;

    async fn get_all_suivis(&self) -> ApiResult<Vec<Suivi>>;
    async fn get_suivi(&self, id: i64) -> ApiResult<Suivi>;
    async fn get_suivis_by_courrier(&self, courrier_id: i64) -> ApiResult<Vec<Suivi>>;
    async fn get_latest_suivi(&self, courrier_id: i64) -> ApiResult<Suivi>;
    async fn get_suivis_by_date(&self, date: &str) -> ApiResult<Vec<Suivi>>;
    async fn get_suivis_between_dates(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> ApiResult<Vec<Suivi>>;
    async fn get_suivis_by_instruction(&self, instruction: &str) -> ApiResult<Vec<Suivi>>;
    async fn create_suivi(
        &self,
        courrier_id: i64,
        request: &SuiviCreateRequest,
    ) -> ApiResult<Suivi>;
    async fn update_suivi(&self, id: i64, request: &SuiviCreateRequest) -> ApiResult<Suivi>;
    async fn delete_suivi(&self, id: i64) -> ApiResult<()>;
}

/// Async wrapper around the synchronous client.
#[derive(Clone)]
pub struct AsyncCourrierApiImpl {
    client: Arc<CourrierApiClient>,
}

impl AsyncCourrierApiImpl {
    pub fn new(client: CourrierApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

fn join_err(e: tokio::task::JoinError) -> ApiError {
    ApiError::Http(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncCourrierApi for AsyncCourrierApiImpl {
    async fn get_all_courriers(&self) -> ApiResult<Vec<Courrier>> {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || client.get_all_courriers())
            .await
            .map_err(join_err)?
    }

    async fn get_courrier(&self, id: i64) -> ApiResult<Courrier> {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || client.get_courrier(id))
            .await
            .map_err(join_err)?
    }

    async fn get_courrier_by_num(&self, num: &str) -> ApiResult<Courrier> {
        let client = self.client.clone();
        let num = num.to_string();
        tokio::task::spawn_blocking(move || client.get_courrier_by_num(&num))
            .await
            .map_err(join_err)?
    }

    async fn create_courrier(&self, request: &CourrierCreateRequest) -> ApiResult<Courrier> {
        let client = self.client.clone();
        let request = request.clone();
        tokio::task::spawn_blocking(move || client.create_courrier(&request))
            .await
            .map_err(join_err)?
    }

    async fn update_courrier(
        &self,
        id: i64,
        request: &CourrierCreateRequest,
    ) -> ApiResult<Courrier> {
        let client = self.client.clone();
        let request = request.clone();
        tokio::task::spawn_blocking(move || client.update_courrier(id, &request))
            .await
            .map_err(join_err)?
    }

    async fn delete_courrier(&self, id: i64) -> ApiResult<()> {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || client.delete_courrier(id))
            .await
            .map_err(join_err)?
    }

    async fn get_courriers_by_type(&self, type_: CourrierType) -> ApiResult<Vec<Courrier>> {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || client.get_courriers_by_type(type_))
            .await
            .map_err(join_err)?
    }

    async fn get_courriers_by_nature(&self, nature: Nature) -> ApiResult<Vec<Courrier>> {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || client.get_courriers_by_nature(nature))
            .await
            .map_err(join_err)?
    }

    async fn get_courriers_by_date(&self, date: &str) -> ApiResult<Vec<Courrier>> {
        let client = self.client.clone();
        let date = date.to_string();
        tokio::task::spawn_blocking(move || client.get_courriers_by_date(&date))
            .await
            .map_err(join_err)?
    }

    async fn get_courriers_between_dates(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> ApiResult<Vec<Courrier>> {
        let client = self.client.clone();
        let start = start_date.to_string();
        let end = end_date.to_string();
        tokio::task::spawn_blocking(move || client.get_courriers_between_dates(&start, &end))
            .await
            .map_err(join_err)?
    }

    async fn get_courriers_by_destinataire(
        &self,
        destinataire: &str,
    ) -> ApiResult<Vec<Courrier>> {
        let client = self.client.clone();
        let destinataire = destinataire.to_string();
        tokio::task::spawn_blocking(move || client.get_courriers_by_destinataire(&destinataire))
            .await
            .map_err(join_err)?
    }

    async fn get_courriers_by_expediteur(&self, expediteur: &str) -> ApiResult<Vec<Courrier>> {
        let client = self.client.clone();
        let expediteur = expediteur.to_string();
        tokio::task::spawn_blocking(move || client.get_courriers_by_expediteur(&expediteur))
            .await
            .map_err(join_err)?
    }

    async fn get_courriers_by_objet(&self, objet: &str) -> ApiResult<Vec<Courrier>> {
        let client = self.client.clone();
        let objet = objet.to_string();
        tokio::task::spawn_blocking(move || client.get_courriers_by_objet(&objet))
            .await
            .map_err(join_err)?
    }

    async fn exists_by_num(&self, num: &str) -> ApiResult<bool> {
        let client = self.client.clone();
        let num = num.to_string();
        tokio::task::spawn_blocking(move || client.exists_by_num(&num))
            .await
            .map_err(join_err)?
    }

    async fn upload_pdf(&self, courrier_id: i64, attachment: &Attachment) -> ApiResult<Courrier> {
        let client = self.client.clone();
        let attachment = attachment.clone();
        tokio::task::spawn_blocking(move || client.upload_pdf(courrier_id, &attachment))
            .await
            .map_err(join_err)?
    }

    async fn get_all_suivis(&self) -> ApiResult<Vec<Suivi>> {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || client.get_all_suivis())
            .await
            .map_err(join_err)?
    }

    async fn get_suivi(&self, id: i64) -> ApiResult<Suivi> {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || client.get_suivi(id))
            .await
            .map_err(join_err)?
    }

    async fn get_suivis_by_courrier(&self, courrier_id: i64) -> ApiResult<Vec<Suivi>> {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || client.get_suivis_by_courrier(courrier_id))
            .await
            .map_err(join_err)?
    }

    async fn get_latest_suivi(&self, courrier_id: i64) -> ApiResult<Suivi> {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || client.get_latest_suivi(courrier_id))
            .await
            .map_err(join_err)?
    }

    async fn get_suivis_by_date(&self, date: &str) -> ApiResult<Vec<Suivi>> {
        let client = self.client.clone();
        let date = date.to_string();
        tokio::task::spawn_blocking(move || client.get_suivis_by_date(&date))
            .await
            .map_err(join_err)?
    }

    async fn get_suivis_between_dates(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> ApiResult<Vec<Suivi>> {
        let client = self.client.clone();
        let start = start_date.to_string();
        let end = end_date.to_string();
        tokio::task::spawn_blocking(move || client.get_suivis_between_dates(&start, &end))
            .await
            .map_err(join_err)?
    }

    async fn get_suivis_by_instruction(&self, instruction: &str) -> ApiResult<Vec<Suivi>> {
        let client = self.client.clone();
        let instruction = instruction.to_string();
        tokio::task::spawn_blocking(move || client.get_suivis_by_instruction(&instruction))
            .await
            .map_err(join_err)?
    }

    async fn create_suivi(
        &self,
        courrier_id: i64,
        request: &SuiviCreateRequest,
    ) -> ApiResult<Suivi> {
        let client = self.client.clone();
        let request = request.clone();
        tokio::task::spawn_blocking(move || client.create_suivi(courrier_id, &request))
            .await
            .map_err(join_err)?
    }

    async fn update_suivi(&self, id: i64, request: &SuiviCreateRequest) -> ApiResult<Suivi> {
        let client = self.client.clone();
        let request = request.clone();
        tokio::task::spawn_blocking(move || client.update_suivi(id, &request))
            .await
            .map_err(join_err)?
    }

    async fn delete_suivi(&self, id: i64) -> ApiResult<()> {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || client.delete_suivi(id))
            .await
            .map_err(join_err)?
    }
}
