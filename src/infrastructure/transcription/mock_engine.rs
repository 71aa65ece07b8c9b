use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Returns a canned transcript without touching the network. Counts calls so
/// tests can assert the engine was (or was not) reached.
pub struct MockTranscriptionEngine {
    transcript: String,
    calls: AtomicUsize,
}

impl MockTranscriptionEngine {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _content_type: &str,
    ) -> Result<String, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.transcript.clone())
    }
}
