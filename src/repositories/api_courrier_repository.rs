use crate::client::AsyncCourrierApi;
use crate::error::ApiResult;
use crate::models::{Courrier, CourrierCreateRequest, CourrierType, Nature};
use crate::repositories::traits::CourrierRepository;
use crate::validation::Attachment;
use async_trait::async_trait;
use std::sync::Arc;

/// Courrier repository backed by the remote API client.
///
/// Delegates every operation to the [`AsyncCourrierApi`], keeping a clean
/// boundary between the engines and the HTTP transport.
pub struct ApiCourrierRepository {
    client: Arc<dyn AsyncCourrierApi>,
}

impl ApiCourrierRepository {
    /// Create a new repository over the given client.
    pub fn new(client: Arc<dyn AsyncCourrierApi>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CourrierRepository for ApiCourrierRepository {
    async fn get(&self, id: i64) -> ApiResult<Courrier> {
        self.client.get_courrier(id).await
    }

    async fn get_by_num(&self, num: &str) -> ApiResult<Courrier> {
        self.client.get_courrier_by_num(num).await
    }

    async fn list(&self) -> ApiResult<Vec<Courrier>> {
        self.client.get_all_courriers().await
    }

    async fn find_by_type(&self, type_: CourrierType) -> ApiResult<Vec<Courrier>> {
        self.client.get_courriers_by_type(type_).await
    }

    async fn find_by_nature(&self, nature: Nature) -> ApiResult<Vec<Courrier>> {
        self.client.get_courriers_by_nature(nature).await
    }

    async fn find_by_date(&self, date: &str) -> ApiResult<Vec<Courrier>> {
        self.client.get_courriers_by_date(date).await
    }

    async fn find_between_dates(&self, start: &str, end: &str) -> ApiResult<Vec<Courrier>> {
        self.client.get_courriers_between_dates(start, end).await
    }

    async fn find_by_destinataire(&self, destinataire: &str) -> ApiResult<Vec<Courrier>> {
        self.client.get_courriers_by_destinataire(destinataire).await
    }

    async fn find_by_expediteur(&self, expediteur: &str) -> ApiResult<Vec<Courrier>> {
        self.client.get_courriers_by_expediteur(expediteur).await
    }

    async fn find_by_objet(&self, objet: &str) -> ApiResult<Vec<Courrier>> {
        self.client.get_courriers_by_objet(objet).await
    }

    async fn exists_by_num(&self, num: &str) -> ApiResult<bool> {
        self.client.exists_by_num(num).await
    }

    async fn create(&self, request: &CourrierCreateRequest) -> ApiResult<Courrier> {
        self.client.create_courrier(request).await
    }

    async fn update(&self, id: i64, request: &CourrierCreateRequest) -> ApiResult<Courrier> {
        self.client.update_courrier(id, request).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete_courrier(id).await
    }

    async fn upload_attachment(&self, id: i64, attachment: &Attachment) -> ApiResult<Courrier> {
        self.client.upload_pdf(id, attachment).await
    }
}
