use async_trait::async_trait;

use crate::domain::UserRecord;

use super::repository_error::RepositoryError;

/// Opaque credential store. The unique-email constraint enforced by the
/// backing store is the sole serialization point for concurrent
/// registrations; the service layer adds no locking of its own.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, record: &UserRecord) -> Result<(), RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError>;
}
