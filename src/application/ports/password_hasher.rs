/// Salted one-way password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, HashError>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("hashing failed: {0}")]
    HashingFailed(String),
}
