mod capture;
mod entry;
mod session;
mod user;

pub use capture::{CaptureOutcome, CapturePhase};
pub use entry::{Entry, EntryError};
pub use session::Session;
pub use user::{User, UserId, UserRecord};
