// client/src/api/mod.rs

//! `BackendClient` and the request plumbing shared by every resource call.
//!
//! One impl block per resource family lives in the child modules; this
//! module owns construction, identity, and response decoding.

pub mod addresses;
pub mod dashboard;
pub mod documents;
pub mod orders;
pub mod users;

pub use dashboard::SeriesMetric;

use crate::config::ClientConfig;
use crate::errors::{ClientError, Result};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

/// Typed client for the Rasoi backend REST surface.
#[derive(Debug, Clone)]
pub struct BackendClient {
  http: reqwest::Client,
  base_url: String,
  user_id: Option<Uuid>,
}

impl BackendClient {
  pub fn new(config: &ClientConfig) -> Result<Self> {
    let http = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.request_timeout_secs))
      .build()
      .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

    Ok(Self {
      http,
      base_url: config.api_base_url.trim_end_matches('/').to_string(),
      user_id: config.user_id,
    })
  }

  /// Attaches the signed-in user; subsequent requests carry the identity
  /// header.
  pub fn with_user(mut self, user_id: Uuid) -> Self {
    self.user_id = Some(user_id);
    self
  }

  pub fn user_id(&self) -> Option<Uuid> {
    self.user_id
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  // Session identity travels as an X-User-ID header, which is what the
  // backend's authentication extractor consumes.
  fn apply_identity(&self, request: RequestBuilder) -> RequestBuilder {
    match self.user_id {
      Some(id) => request.header("X-User-ID", id.to_string()),
      None => request,
    }
  }

  pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let response = self.apply_identity(self.http.get(self.url(path))).send().await?;
    Self::decode(response).await
  }

  pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    &self,
    path: &str,
    body: &B,
  ) -> Result<T> {
    let response = self
      .apply_identity(self.http.post(self.url(path)).json(body))
      .send()
      .await?;
    Self::decode(response).await
  }

  pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    &self,
    path: &str,
    body: &B,
  ) -> Result<T> {
    let response = self
      .apply_identity(self.http.put(self.url(path)).json(body))
      .send()
      .await?;
    Self::decode(response).await
  }

  pub(crate) async fn delete(&self, path: &str) -> Result<()> {
    let response = self
      .apply_identity(self.http.delete(self.url(path)))
      .send()
      .await?;
    Self::ensure_success(response).await?;
    Ok(())
  }

  pub(crate) async fn get_raw(&self, path: &str) -> Result<Response> {
    let response = self.apply_identity(self.http.get(self.url(path))).send().await?;
    Self::ensure_success(response).await
  }

  async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = Self::ensure_success(response).await?;
    Ok(response.json::<T>().await?)
  }

  async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
      return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = extract_backend_message(&body);
    tracing::warn!(status = status.as_u16(), %message, "Backend request failed.");
    Err(match status.as_u16() {
      401 | 403 => ClientError::Auth(message),
      404 => ClientError::NotFound(message),
      _ => ClientError::Backend {
        status: status.as_u16(),
        message,
      },
    })
  }
}

// Backend errors arrive as `{"error": "..."}`; fall back to the raw body.
fn extract_backend_message(body: &str) -> String {
  serde_json::from_str::<serde_json::Value>(body)
    .ok()
    .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
    .unwrap_or_else(|| body.to_string())
}
