use async_trait::async_trait;

/// Microphone capture capability of the host platform. `stop` finalizes the
/// clip and returns a local file reference.
#[async_trait]
pub trait AudioRecorder: Send + Sync {
    async fn request_permission(&self) -> bool;

    async fn start(&mut self) -> Result<(), CaptureError>;

    async fn stop(&mut self) -> Result<String, CaptureError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("microphone permission denied")]
    PermissionDenied,
    #[error("recorder failed: {0}")]
    RecorderFailed(String),
    #[error("a recording is already in progress")]
    AlreadyRecording,
    #[error("no recording in progress")]
    NotRecording,
}
