use async_trait::async_trait;

/// Narrow seam over the upstream speech-to-text vendor: bytes in, best-effort
/// transcript out. Adapters own the vendor's request/response shape so the
/// endpoint contract never changes when the vendor does.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        content_type: &str,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
