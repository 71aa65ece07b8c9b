use crate::domain::User;

/// Issues the signed, time-boxed credential handed back at login and
/// registration.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> Result<String, TokenError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token signing failed: {0}")]
    SigningFailed(String),
}
