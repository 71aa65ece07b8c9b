use crate::application::ports::{HashError, PasswordHasher};

pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, HashError> {
        bcrypt::hash(password, self.cost).map_err(|e| HashError::HashingFailed(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        bcrypt::verify(password, hash).map_err(|e| HashError::HashingFailed(e.to_string()))
    }
}
