use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::{SpoolError, SpooledUpload, UploadSpool};

const DEFAULT_EXTENSION: &str = "m4a";

/// Spools uploads to uniquely named files under one directory. Names are
/// generated server-side, so a hostile client filename never becomes a path.
pub struct LocalUploadSpool {
    base_dir: PathBuf,
}

impl LocalUploadSpool {
    pub fn new(base_dir: PathBuf) -> Result<Self, SpoolError> {
        std::fs::create_dir_all(&base_dir).map_err(SpoolError::Io)?;
        Ok(Self { base_dir })
    }

    fn spool_path(&self, filename: Option<&str>) -> PathBuf {
        let extension = filename
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty() && ext.chars().all(char::is_alphanumeric))
            .unwrap_or(DEFAULT_EXTENSION);
        self.base_dir
            .join(format!("{}.{}", Uuid::new_v4(), extension))
    }
}

#[async_trait]
impl UploadSpool for LocalUploadSpool {
    async fn stash(
        &self,
        filename: Option<&str>,
        data: &[u8],
    ) -> Result<SpooledUpload, SpoolError> {
        let path = self.spool_path(filename);
        tokio::fs::write(&path, data).await?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "upload spooled");
        Ok(SpooledUpload { path })
    }

    async fn read(&self, upload: &SpooledUpload) -> Result<Vec<u8>, SpoolError> {
        Ok(tokio::fs::read(&upload.path).await?)
    }

    async fn discard(&self, upload: &SpooledUpload) -> Result<(), SpoolError> {
        match tokio::fs::remove_file(&upload.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SpoolError::DeleteFailed(e.to_string())),
        }
    }
}
