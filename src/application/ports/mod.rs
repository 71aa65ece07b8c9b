mod audio_recorder;
mod key_value_store;
mod password_hasher;
mod repository_error;
mod token_issuer;
mod transcript_relay;
mod transcription_engine;
mod upload_spool;
mod user_repository;

pub use audio_recorder::{AudioRecorder, CaptureError};
pub use key_value_store::{KeyValueStore, StoreError};
pub use password_hasher::{HashError, PasswordHasher};
pub use repository_error::RepositoryError;
pub use token_issuer::{TokenError, TokenIssuer};
pub use transcript_relay::{RelayError, TranscriptRelay};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use upload_spool::{SpoolError, SpooledUpload, UploadSpool};
pub use user_repository::UserRepository;
