// client/src/api/documents.rs

use crate::api::BackendClient;
use crate::errors::Result;
use crate::models::DocumentBlob;
use reqwest::header::CONTENT_TYPE;
use uuid::Uuid;

impl BackendClient {
  /// Downloads a stored document blob (verification papers, menus).
  pub async fn fetch_document(&self, document_id: Uuid) -> Result<DocumentBlob> {
    let response = self.get_raw(&format!("/documents/{}", document_id)).await?;
    let content_type = response
      .headers()
      .get(CONTENT_TYPE)
      .and_then(|v| v.to_str().ok())
      .map(str::to_string);
    let bytes = response.bytes().await?.to_vec();
    Ok(DocumentBlob { content_type, bytes })
  }
}
