use std::sync::Arc;

use crate::application::ports::{
    SpoolError, SpooledUpload, TranscriptionEngine, TranscriptionError, UploadSpool,
};

pub struct TranscriptionService<E>
where
    E: TranscriptionEngine + ?Sized,
{
    engine: Arc<E>,
    spool: Arc<dyn UploadSpool>,
}

impl<E> TranscriptionService<E>
where
    E: TranscriptionEngine + ?Sized,
{
    pub fn new(engine: Arc<E>, spool: Arc<dyn UploadSpool>) -> Self {
        Self { engine, spool }
    }

    /// Spools the uploaded bytes, transcribes them, and removes the spooled
    /// file before returning. The file is discarded on the failure path too.
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    pub async fn transcribe_upload(
        &self,
        filename: Option<&str>,
        data: &[u8],
        content_type: &str,
    ) -> Result<String, TranscribeUploadError> {
        let upload = self.spool.stash(filename, data).await?;

        let audio = match self.spool.read(&upload).await {
            Ok(audio) => audio,
            Err(err) => {
                self.discard_quietly(&upload).await;
                return Err(err.into());
            }
        };

        let result = self.engine.transcribe(&audio, content_type).await;
        self.discard_quietly(&upload).await;

        let text = result?;
        tracing::info!(chars = text.len(), "transcription complete");
        Ok(text)
    }

    async fn discard_quietly(&self, upload: &SpooledUpload) {
        if let Err(err) = self.spool.discard(upload).await {
            tracing::warn!(error = %err, path = %upload.path.display(), "failed to discard spooled upload");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscribeUploadError {
    #[error("spooling: {0}")]
    Spooling(#[from] SpoolError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
}
