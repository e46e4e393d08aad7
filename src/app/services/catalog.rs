//! # Catalog Service
//!
//! HTTP client for the remote movie catalog. Each operation returns an explicit
//! result type; empty bodies are normalized to an empty object and every
//! failure is mapped into [`ApiError`].

use async_trait::async_trait;
use reqwest::{header, Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::app::error::ApiError;
use crate::app::models::MovieRecord;
use crate::config::CatalogProfile;

/// Operations offered by the catalog backend
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch every record
    async fn list_all(&self) -> Result<Vec<MovieRecord>, ApiError>;

    /// Fetch one record by identifier
    async fn get_by_id(&self, id: &str) -> Result<MovieRecord, ApiError>;

    /// Persist a new record and return it as stored
    async fn create(&self, record: &MovieRecord) -> Result<MovieRecord, ApiError>;

    /// Replace all fields of an existing record
    async fn update(&self, id: &str, record: &MovieRecord) -> Result<MovieRecord, ApiError>;

    /// Remove a record, returning the backend's confirmation document
    async fn delete(&self, id: &str) -> Result<Value, ApiError>;
}

/// [`CatalogApi`] backed by the REST endpoints of the catalog server
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    client: Client,
    base_url: Url,
}

impl HttpCatalogService {
    /// Create a new service for the profile's base URL
    pub fn new(profile: &CatalogProfile) -> anyhow::Result<Self> {
        tracing::debug!("Creating HttpCatalogService for {}", profile.base_url());

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = profile.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        let base_url = Url::parse(profile.base_url().trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Base URL {} cannot take a path", base_url);
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::transport(format!("Base URL {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send one request and return its normalized JSON body
    async fn send(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&MovieRecord>,
    ) -> Result<Value, ApiError> {
        let url = self.endpoint(segments)?;
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(record) = body {
            request = request.json(&record.without_id());
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method, url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = server_message(status, &text);
            tracing::warn!("{} {} returned {}: {}", method, url, status.as_u16(), message);
            return Err(ApiError::server(status.as_u16(), message));
        }

        normalize_body(&text)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogService {
    async fn list_all(&self) -> Result<Vec<MovieRecord>, ApiError> {
        let body = self.send(Method::GET, &["peliculas"], None).await?;
        decode(body)
    }

    async fn get_by_id(&self, id: &str) -> Result<MovieRecord, ApiError> {
        let body = self.send(Method::GET, &["peliculas", id], None).await?;
        decode(body)
    }

    async fn create(&self, record: &MovieRecord) -> Result<MovieRecord, ApiError> {
        let body = self.send(Method::POST, &["add"], Some(record)).await?;
        decode(body)
    }

    async fn update(&self, id: &str, record: &MovieRecord) -> Result<MovieRecord, ApiError> {
        let body = self
            .send(Method::PUT, &["editar", id], Some(record))
            .await?;
        decode(body)
    }

    async fn delete(&self, id: &str) -> Result<Value, ApiError> {
        self.send(Method::DELETE, &["eliminar", id], None).await
    }
}

/// Parse a success body; empty text and `null` become `{}`
fn normalize_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    let value: Value = serde_json::from_str(text)?;
    if value.is_null() {
        Ok(Value::Object(Map::new()))
    } else {
        Ok(value)
    }
}

/// Decode a normalized body; `{}` yields the empty value of the target type
fn decode<T: DeserializeOwned + Default>(body: Value) -> Result<T, ApiError> {
    if body.as_object().is_some_and(Map::is_empty) {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(body)?)
}

/// Message for a rejected request: the backend's own `message`/`error` field
/// when it sent one, the status reason otherwise
fn server_message(status: StatusCode, text: &str) -> String {
    let from_body = serde_json::from_str::<Value>(text).ok().and_then(|v| {
        ["message", "error"]
            .iter()
            .find_map(|key| v.get(key).and_then(Value::as_str).map(str::to_string))
    });

    from_body
        .filter(|m| !m.is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Unknown error".to_string())
}
