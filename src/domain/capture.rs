/// Phase of a single capture session. `Stopped` is transient: the upload
/// starts immediately after the recording is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    Idle,
    Recording,
    Stopped,
}

/// Terminal result of one record-stop-upload cycle. The captured clip
/// reference survives an upload failure so it can still be attached to an
/// entry without a caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Transcribed { audio_uri: String, caption: String },
    UploadFailed { audio_uri: String, error: String },
}

impl CaptureOutcome {
    pub fn audio_uri(&self) -> &str {
        match self {
            Self::Transcribed { audio_uri, .. } => audio_uri,
            Self::UploadFailed { audio_uri, .. } => audio_uri,
        }
    }
}
