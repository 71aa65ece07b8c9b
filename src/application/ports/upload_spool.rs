use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

/// Reference to one spooled upload. Lifetime is bounded by a single
/// request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpooledUpload {
    pub path: PathBuf,
}

/// Per-request temporary storage for an uploaded file. `discard` must be
/// idempotent: a file that is already gone is not an error.
#[async_trait]
pub trait UploadSpool: Send + Sync {
    async fn stash(
        &self,
        filename: Option<&str>,
        data: &[u8],
    ) -> Result<SpooledUpload, SpoolError>;

    async fn read(&self, upload: &SpooledUpload) -> Result<Vec<u8>, SpoolError>;

    async fn discard(&self, upload: &SpooledUpload) -> Result<(), SpoolError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpoolError {
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
