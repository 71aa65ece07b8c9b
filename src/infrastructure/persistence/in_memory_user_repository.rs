use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{RepositoryError, UserRepository};
use crate::domain::UserRecord;

/// Keyed by email, same uniqueness rule as the `users` table.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, record: &UserRecord) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().expect("user map poisoned");
        if users.contains_key(&record.email) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "duplicate email: {}",
                record.email
            )));
        }
        users.insert(record.email.clone(), record.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let users = self.users.lock().expect("user map poisoned");
        Ok(users.get(email).cloned())
    }
}
