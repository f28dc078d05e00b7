//! Shared in-memory mock repositories for integration tests.
//!
//! Configurable with test data; every method tracks its call count so tests
//! can verify which remote query a code path routed to.

use async_trait::async_trait;
use courrier_client::error::{ApiError, ApiResult};
use courrier_client::models::{Courrier, CourrierCreateRequest, CourrierType, Nature, Suivi,
    SuiviCreateRequest};
use courrier_client::repositories::{CourrierRepository, SuiviRepository};
use courrier_client::validation::Attachment;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockCourrierRepository {
    courriers: Arc<Mutex<Vec<Courrier>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_transport: Arc<Mutex<bool>>,
    fail_upload: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockCourrierRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_courrier(&self, courrier: Courrier) {
        self.courriers.lock().unwrap().push(courrier);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.lock().unwrap().get(method).unwrap_or(&0)
    }

    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    /// Make every subsequent operation fail as if the server were down.
    pub fn fail_transport(&self) {
        *self.fail_transport.lock().unwrap() = true;
    }

    /// Make only attachment uploads fail.
    pub fn fail_upload(&self) {
        *self.fail_upload.lock().unwrap() = true;
    }

    fn track(&self, method: &str) -> ApiResult<()> {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_insert(0) += 1;
        if *self.fail_transport.lock().unwrap() {
            return Err(ApiError::TransportUnavailable);
        }
        Ok(())
    }

    fn from_draft(id: i64, draft: &CourrierCreateRequest) -> Courrier {
        Courrier {
            id: Some(id),
            num_courrier: draft.num_courrier.clone(),
            objet: draft.objet.clone(),
            type_: Some(draft.type_),
            nature: Some(draft.nature),
            expediteur: draft.expediteur.clone(),
            destinataire: draft.destinataire.clone(),
            date: draft.date.clone(),
            pdf_file: None,
            suivis: Vec::new(),
        }
    }
}

#[async_trait]
impl CourrierRepository for MockCourrierRepository {
    async fn get(&self, id: i64) -> ApiResult<Courrier> {
        self.track("get")?;
        self.courriers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("courrier {id}")))
    }

    async fn get_by_num(&self, num: &str) -> ApiResult<Courrier> {
        self.track("get_by_num")?;
        self.courriers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.num_courrier == num)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("courrier {num}")))
    }

    async fn list(&self) -> ApiResult<Vec<Courrier>> {
        self.track("list")?;
        Ok(self.courriers.lock().unwrap().clone())
    }

    async fn find_by_type(&self, type_: CourrierType) -> ApiResult<Vec<Courrier>> {
        self.track("find_by_type")?;
        Ok(self
            .courriers
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.type_ == Some(type_))
            .cloned()
            .collect())
    }

    async fn find_by_nature(&self, nature: Nature) -> ApiResult<Vec<Courrier>> {
        self.track("find_by_nature")?;
        Ok(self
            .courriers
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.nature == Some(nature))
            .cloned()
            .collect())
    }

    async fn find_by_date(&self, date: &str) -> ApiResult<Vec<Courrier>> {
        self.track("find_by_date")?;
        Ok(self
            .courriers
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.date == date)
            .cloned()
            .collect())
    }

    async fn find_between_dates(&self, start: &str, end: &str) -> ApiResult<Vec<Courrier>> {
        self.track("find_between_dates")?;
        // ISO dates compare lexicographically
        Ok(self
            .courriers
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.date.as_str() >= start && c.date.as_str() <= end)
            .cloned()
            .collect())
    }

    async fn find_by_destinataire(&self, destinataire: &str) -> ApiResult<Vec<Courrier>> {
        self.track("find_by_destinataire")?;
        Ok(self
            .courriers
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.destinataire.contains(destinataire))
            .cloned()
            .collect())
    }

    async fn find_by_expediteur(&self, expediteur: &str) -> ApiResult<Vec<Courrier>> {
        self.track("find_by_expediteur")?;
        Ok(self
            .courriers
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.expediteur.contains(expediteur))
            .cloned()
            .collect())
    }

    async fn find_by_objet(&self, objet: &str) -> ApiResult<Vec<Courrier>> {
        self.track("find_by_objet")?;
        Ok(self
            .courriers
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.objet.contains(objet))
            .cloned()
            .collect())
    }

    async fn exists_by_num(&self, num: &str) -> ApiResult<bool> {
        self.track("exists_by_num")?;
        Ok(self
            .courriers
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.num_courrier == num))
    }

    async fn create(&self, request: &CourrierCreateRequest) -> ApiResult<Courrier> {
        self.track("create")?;
        let mut courriers = self.courriers.lock().unwrap();
        let id = courriers.len() as i64 + 1;
        let courrier = Self::from_draft(id, request);
        courriers.push(courrier.clone());
        Ok(courrier)
    }

    async fn update(&self, id: i64, request: &CourrierCreateRequest) -> ApiResult<Courrier> {
        self.track("update")?;
        let mut courriers = self.courriers.lock().unwrap();
        let slot = courriers
            .iter_mut()
            .find(|c| c.id == Some(id))
            .ok_or_else(|| ApiError::NotFound(format!("courrier {id}")))?;
        *slot = Self::from_draft(id, request);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.track("delete")?;
        let mut courriers = self.courriers.lock().unwrap();
        let before = courriers.len();
        courriers.retain(|c| c.id != Some(id));
        if courriers.len() == before {
            return Err(ApiError::NotFound(format!("courrier {id}")));
        }
        Ok(())
    }

    async fn upload_attachment(&self, id: i64, attachment: &Attachment) -> ApiResult<Courrier> {
        self.track("upload_attachment")?;
        if *self.fail_upload.lock().unwrap() {
            return Err(ApiError::TransportUnavailable);
        }
        let mut courriers = self.courriers.lock().unwrap();
        let slot = courriers
            .iter_mut()
            .find(|c| c.id == Some(id))
            .ok_or_else(|| ApiError::NotFound(format!("courrier {id}")))?;
        slot.pdf_file = Some(attachment.file_name.clone());
        Ok(slot.clone())
    }
}

#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSuiviRepository {
    suivis: Arc<Mutex<Vec<Suivi>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockSuiviRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_suivi(&self, suivi: Suivi) {
        self.suivis.lock().unwrap().push(suivi);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.lock().unwrap().get(method).unwrap_or(&0)
    }

    fn track(&self, method: &str) {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

#[async_trait]
impl SuiviRepository for MockSuiviRepository {
    async fn get(&self, id: i64) -> ApiResult<Suivi> {
        self.track("get");
        self.suivis
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("suivi {id}")))
    }

    async fn list(&self) -> ApiResult<Vec<Suivi>> {
        self.track("list");
        Ok(self.suivis.lock().unwrap().clone())
    }

    async fn find_by_courrier(&self, courrier_id: i64) -> ApiResult<Vec<Suivi>> {
        self.track("find_by_courrier");
        Ok(self
            .suivis
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.courrier_id == Some(courrier_id))
            .cloned()
            .collect())
    }

    async fn latest_for_courrier(&self, courrier_id: i64) -> ApiResult<Suivi> {
        self.track("latest_for_courrier");
        let suivis = self.suivis.lock().unwrap();
        suivis
            .iter()
            .filter(|s| s.courrier_id == Some(courrier_id))
            .max_by_key(|s| s.date.clone())
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("suivis of courrier {courrier_id}")))
    }

    async fn find_by_date(&self, date: &str) -> ApiResult<Vec<Suivi>> {
        self.track("find_by_date");
        Ok(self
            .suivis
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.date == date)
            .cloned()
            .collect())
    }

    async fn find_between_dates(&self, start: &str, end: &str) -> ApiResult<Vec<Suivi>> {
        self.track("find_between_dates");
        Ok(self
            .suivis
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.date.as_str() >= start && s.date.as_str() <= end)
            .cloned()
            .collect())
    }

    async fn find_by_instruction(&self, instruction: &str) -> ApiResult<Vec<Suivi>> {
        self.track("find_by_instruction");
        Ok(self
            .suivis
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.instruction.contains(instruction))
            .cloned()
            .collect())
    }

    async fn create(&self, courrier_id: i64, request: &SuiviCreateRequest) -> ApiResult<Suivi> {
        self.track("create");
        let mut suivis = self.suivis.lock().unwrap();
        let suivi = Suivi {
            id: Some(suivis.len() as i64 + 1),
            courrier_id: Some(courrier_id),
            instruction: request.instruction.clone(),
            description: request.description.clone(),
            date: request.date.clone(),
        };
        suivis.push(suivi.clone());
        Ok(suivi)
    }

    async fn update(&self, id: i64, request: &SuiviCreateRequest) -> ApiResult<Suivi> {
        self.track("update");
        let mut suivis = self.suivis.lock().unwrap();
        let slot = suivis
            .iter_mut()
            .find(|s| s.id == Some(id))
            .ok_or_else(|| ApiError::NotFound(format!("suivi {id}")))?;
        slot.instruction = request.instruction.clone();
        slot.description = request.description.clone();
        slot.date = request.date.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.track("delete");
        let mut suivis = self.suivis.lock().unwrap();
        let before = suivis.len();
        suivis.retain(|s| s.id != Some(id));
        if suivis.len() == before {
            return Err(ApiError::NotFound(format!("suivi {id}")));
        }
        Ok(())
    }
}
