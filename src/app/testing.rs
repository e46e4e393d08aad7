//! Testing infrastructure for the movie screens
//!
//! In-memory stand-ins for the catalog backend and the user dialogs, so the
//! controllers can be exercised without a network or a terminal.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::app::error::ApiError;
use crate::app::models::MovieRecord;
use crate::app::services::CatalogApi;
use crate::app::views::Dialog;

/// A record that passes every form rule
pub fn valid_record(name: &str) -> MovieRecord {
    MovieRecord {
        id: None,
        name: name.to_string(),
        description: format!("Descripción de {name}"),
        trailer_link: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        poster: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        genres: vec!["Acción".to_string()],
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Catalog operation as received by [`InMemoryCatalog`]
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListAll,
    GetById(String),
    Create(MovieRecord),
    Update(String, MovieRecord),
    Delete(String),
}

#[derive(Debug, Default)]
struct CatalogState {
    records: Vec<MovieRecord>,
    next_id: u64,
    calls: Vec<ApiCall>,
    failure: Option<ApiError>,
}

impl CatalogState {
    fn assign_id(&mut self, record: &MovieRecord) -> MovieRecord {
        self.next_id += 1;
        MovieRecord {
            id: Some(format!("{:024x}", self.next_id)),
            ..record.without_id()
        }
    }

    fn position(&self, id: &str) -> Result<usize, ApiError> {
        self.records
            .iter()
            .position(|r| r.id() == Some(id))
            .ok_or_else(|| ApiError::server(404, "Not Found"))
    }

    /// Log the call, then fail if a failure is armed
    fn record(&mut self, call: ApiCall) -> Result<(), ApiError> {
        self.calls.push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// [`CatalogApi`] keeping its records in memory and logging every call
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    state: Mutex<CatalogState>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the catalog; every record gets a fresh identifier
    pub fn with_records(records: Vec<MovieRecord>) -> Self {
        let catalog = Self::new();
        {
            let mut state = lock(&catalog.state);
            for record in &records {
                let stored = state.assign_id(record);
                state.records.push(stored);
            }
        }
        catalog
    }

    pub fn records(&self) -> Vec<MovieRecord> {
        lock(&self.state).records.clone()
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        lock(&self.state).calls.clone()
    }

    /// Make every following call fail with `err`
    pub fn fail_with(&self, err: ApiError) {
        lock(&self.state).failure = Some(err);
    }
}

#[async_trait]
impl CatalogApi for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<MovieRecord>, ApiError> {
        let mut state = lock(&self.state);
        state.record(ApiCall::ListAll)?;
        Ok(state.records.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<MovieRecord, ApiError> {
        let mut state = lock(&self.state);
        state.record(ApiCall::GetById(id.to_string()))?;
        let index = state.position(id)?;
        Ok(state.records[index].clone())
    }

    async fn create(&self, record: &MovieRecord) -> Result<MovieRecord, ApiError> {
        let mut state = lock(&self.state);
        state.record(ApiCall::Create(record.clone()))?;
        let stored = state.assign_id(record);
        state.records.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: &str, record: &MovieRecord) -> Result<MovieRecord, ApiError> {
        let mut state = lock(&self.state);
        state.record(ApiCall::Update(id.to_string(), record.clone()))?;
        let index = state.position(id)?;
        let stored = MovieRecord {
            id: Some(id.to_string()),
            ..record.without_id()
        };
        state.records[index] = stored.clone();
        Ok(stored)
    }

    async fn delete(&self, id: &str) -> Result<Value, ApiError> {
        let mut state = lock(&self.state);
        state.record(ApiCall::Delete(id.to_string()))?;
        let index = state.position(id)?;
        state.records.remove(index);
        Ok(json!({ "message": "Película eliminada" }))
    }
}

#[derive(Debug, Default)]
struct DialogState {
    answers: VecDeque<bool>,
    alerts: Vec<String>,
    confirmations: Vec<String>,
}

/// [`Dialog`] answering confirmations from a queue and recording every prompt.
///
/// Once the queue runs dry every confirmation is declined.
#[derive(Debug, Default)]
pub struct ScriptedDialog {
    state: Mutex<DialogState>,
}

impl ScriptedDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers(answers: Vec<bool>) -> Self {
        let dialog = Self::new();
        lock(&dialog.state).answers = answers.into();
        dialog
    }

    pub fn alerts(&self) -> Vec<String> {
        lock(&self.state).alerts.clone()
    }

    /// Questions asked so far
    pub fn confirmations(&self) -> Vec<String> {
        lock(&self.state).confirmations.clone()
    }
}

impl Dialog for ScriptedDialog {
    fn confirm(&self, message: &str) -> bool {
        let mut state = lock(&self.state);
        state.confirmations.push(message.to_string());
        state.answers.pop_front().unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        lock(&self.state).alerts.push(message.to_string());
    }
}
