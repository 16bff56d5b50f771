// client/src/models/document.rs

/// A downloaded document blob (chef certificates, agent ID proofs).
///
/// Kept in memory; the surfaces hand it straight to a viewer or a save
/// dialog, so there is no streaming here.
#[derive(Debug, Clone)]
pub struct DocumentBlob {
  pub content_type: Option<String>,
  pub bytes: Vec<u8>,
}
