use std::path::Path;

use async_trait::async_trait;

/// Client-side view of the relay service's transcription endpoint.
#[async_trait]
pub trait TranscriptRelay: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, RelayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    RequestFailed(String),
    #[error("relay returned {status}: {message}")]
    Rejected { status: u16, message: String },
}
