mod app_context;
mod capture_session;
mod identity_service;
mod ledger;
mod session_store;
mod transcription_service;

pub use app_context::AppContext;
pub use capture_session::CaptureSession;
pub use identity_service::{IdentityError, IdentityService};
pub use ledger::{Ledger, LedgerError};
pub use session_store::{SessionStore, SessionStoreError};
pub use transcription_service::{TranscribeUploadError, TranscriptionService};
