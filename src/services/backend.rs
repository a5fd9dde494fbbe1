use crate::models::Hackathon;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the HackHub backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend returned status {0}")]
    Status(u16),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Read access to the hackathon catalogue
///
/// The chat assistant only depends on this trait so it can run against the
/// real backend or an in-memory listing.
#[async_trait]
pub trait HackathonSource: Send + Sync {
    /// `GET /hackathons/list`
    async fn list_hackathons(&self) -> Result<Vec<Hackathon>, BackendError>;

    /// `GET /hackathons/get/{id}`
    async fn get_hackathon(&self, id: &str) -> Result<Hackathon, BackendError>;

    /// Number of records behind `GET /hackathons/teams/list/{id}`
    async fn count_teams(&self, id: &str) -> Result<usize, BackendError>;

    /// Number of records behind `GET /hackathons/participants/public/{id}`
    async fn count_participants(&self, id: &str) -> Result<usize, BackendError>;
}

/// REST client for the HackHub backend
pub struct BackendClient {
    base_url: String,
    client: Client,
}

impl BackendClient {
    /// Create a new backend client
    ///
    /// Without a timeout a hung upstream request hangs the caller.
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json(&self, path: &str) -> Result<Value, BackendError> {
        let url = self.url(path);
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::debug!("Backend answered {} for {}", status, url);
            return Err(BackendError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl HackathonSource for BackendClient {
    async fn list_hackathons(&self) -> Result<Vec<Hackathon>, BackendError> {
        let json = self.get_json("/hackathons/list").await?;

        let hackathons: Vec<Hackathon> = extract_records(&json, &["hackathons"])
            .iter()
            .filter_map(|record| serde_json::from_value(record.clone()).ok())
            .collect();

        tracing::debug!("Listed {} hackathons", hackathons.len());

        Ok(hackathons)
    }

    async fn get_hackathon(&self, id: &str) -> Result<Hackathon, BackendError> {
        let path = format!("/hackathons/get/{}", urlencoding::encode(id));
        let json = self.get_json(&path).await?;

        let record = extract_single(&json)
            .ok_or_else(|| BackendError::NotFound(format!("Hackathon {} not found", id)))?;

        serde_json::from_value(record.clone())
            .map_err(|e| BackendError::InvalidResponse(format!("Failed to parse hackathon: {}", e)))
    }

    async fn count_teams(&self, id: &str) -> Result<usize, BackendError> {
        let path = format!("/hackathons/teams/list/{}", urlencoding::encode(id));
        let json = self.get_json(&path).await?;
        Ok(extract_records(&json, &["teams", "hackathons"]).len())
    }

    async fn count_participants(&self, id: &str) -> Result<usize, BackendError> {
        let path = format!("/hackathons/participants/public/{}", urlencoding::encode(id));
        let json = self.get_json(&path).await?;
        Ok(extract_records(&json, &["participants", "hackathons"]).len())
    }
}

/// Array under the first present key, or the body itself when it is an array
///
/// Anything else (null, scalars, non-array fields) yields no records.
fn extract_records<'a>(json: &'a Value, keys: &[&str]) -> &'a [Value] {
    if let Some(items) = json.as_array() {
        return items;
    }

    keys.iter()
        .find_map(|key| json.get(*key).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Single hackathon object from a detail response
fn extract_single(json: &Value) -> Option<&Value> {
    if let Some(record) = json.get("hackathon").filter(|v| v.is_object()) {
        return Some(record);
    }
    if let Some(first) = json.get("hackathons").and_then(Value::as_array).and_then(|a| a.first()) {
        return Some(first);
    }
    json.get("name").map(|_| json)
}
