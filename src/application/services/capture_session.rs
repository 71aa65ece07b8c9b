use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{AudioRecorder, CaptureError, TranscriptRelay};
use crate::domain::{CaptureOutcome, CapturePhase};

/// Drives one microphone clip from capture through upload. The session
/// returns to `Idle` after every outcome, success or not.
pub struct CaptureSession<R, T>
where
    R: AudioRecorder,
    T: TranscriptRelay + ?Sized,
{
    recorder: R,
    relay: Arc<T>,
    phase: CapturePhase,
}

impl<R, T> CaptureSession<R, T>
where
    R: AudioRecorder,
    T: TranscriptRelay + ?Sized,
{
    pub fn new(recorder: R, relay: Arc<T>) -> Self {
        Self {
            recorder,
            relay,
            phase: CapturePhase::Idle,
        }
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    #[tracing::instrument(skip(self))]
    pub async fn start_recording(&mut self) -> Result<(), CaptureError> {
        if self.phase != CapturePhase::Idle {
            return Err(CaptureError::AlreadyRecording);
        }
        if !self.recorder.request_permission().await {
            tracing::warn!("microphone permission denied");
            return Err(CaptureError::PermissionDenied);
        }
        self.recorder.start().await?;
        self.phase = CapturePhase::Recording;
        Ok(())
    }

    /// Stops the recorder and immediately uploads the clip. A failed upload
    /// is an outcome, not an error: the clip stays usable with an empty
    /// caption.
    #[tracing::instrument(skip(self))]
    pub async fn stop_recording(&mut self) -> Result<CaptureOutcome, CaptureError> {
        if self.phase != CapturePhase::Recording {
            return Err(CaptureError::NotRecording);
        }
        let audio_uri = self.recorder.stop().await?;
        self.phase = CapturePhase::Stopped;

        let outcome = match self.relay.transcribe(Path::new(&audio_uri)).await {
            Ok(caption) => {
                tracing::info!(chars = caption.len(), "clip transcribed");
                CaptureOutcome::Transcribed { audio_uri, caption }
            }
            Err(err) => {
                tracing::warn!(error = %err, "upload failed, keeping clip");
                CaptureOutcome::UploadFailed {
                    audio_uri,
                    error: err.to_string(),
                }
            }
        };

        self.phase = CapturePhase::Idle;
        Ok(outcome)
    }
}
