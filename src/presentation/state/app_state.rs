use std::sync::Arc;

use crate::application::ports::TranscriptionEngine;
use crate::application::services::{IdentityService, TranscriptionService};

pub struct AppState<E: ?Sized>
where
    E: TranscriptionEngine,
{
    pub transcription_service: Arc<TranscriptionService<E>>,
    pub identity_service: Arc<IdentityService>,
}

impl<E: ?Sized> Clone for AppState<E>
where
    E: TranscriptionEngine,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            identity_service: Arc::clone(&self.identity_service),
        }
    }
}
