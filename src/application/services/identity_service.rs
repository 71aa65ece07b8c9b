use std::sync::Arc;

use crate::application::ports::{
    HashError, PasswordHasher, RepositoryError, TokenError, TokenIssuer, UserRepository,
};
use crate::domain::{Session, UserRecord};

const MAX_NAME_LEN: usize = 50;
const MAX_EMAIL_LEN: usize = 100;
const MIN_PASSWORD_LEN: usize = 6;
const MAX_PASSWORD_LEN: usize = 128;

pub struct IdentityService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl IdentityService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, IdentityError> {
        let name = name.trim();
        let email = email.trim().to_lowercase();
        validate_registration(name, &email, password)?;

        let password_hash = self.hasher.hash(password)?;
        let record = UserRecord::new(name.to_string(), email, password_hash);
        // The unique index on email is the only duplicate check. Racing
        // signups both reach the insert and exactly one wins.
        self.users.insert(&record).await.map_err(|err| match err {
            RepositoryError::ConstraintViolation(_) => IdentityError::EmailTaken,
            other => IdentityError::Repository(other),
        })?;

        let user = record.profile();
        let token = self.tokens.issue(&user)?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(Session { token, user })
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || password.is_empty() {
            return Err(IdentityError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let record = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        if !self.hasher.verify(password, &record.password_hash)? {
            return Err(IdentityError::InvalidCredentials);
        }

        let user = record.profile();
        let token = self.tokens.issue(&user)?;
        tracing::info!(user_id = %user.id, "user logged in");
        Ok(Session { token, user })
    }
}

fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), IdentityError> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(IdentityError::Validation(
            "Name, email and password are required".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(IdentityError::Validation(format!(
            "Name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    if email.len() > MAX_EMAIL_LEN {
        return Err(IdentityError::Validation(format!(
            "Email must be at most {MAX_EMAIL_LEN} characters"
        )));
    }
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(IdentityError::Validation(
            "Email address is invalid".to_string(),
        ));
    }
    if password.len() < MIN_PASSWORD_LEN || password.len() > MAX_PASSWORD_LEN {
        return Err(IdentityError::Validation(format!(
            "Password must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("{0}")]
    Validation(String),
    #[error("Email already registered")]
    EmailTaken,
    /// Deliberately identical for unknown email and wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("token issuing: {0}")]
    Token(#[from] TokenError),
    #[error("password hashing: {0}")]
    Hash(#[from] HashError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_blank_name_when_validating_then_required_error() {
        let err = validate_registration("", "a@b.c", "secret1").unwrap_err();
        assert!(matches!(err, IdentityError::Validation(_)));
    }

    #[test]
    fn given_short_password_when_validating_then_length_error() {
        let err = validate_registration("Ana", "a@b.c", "abc").unwrap_err();
        let IdentityError::Validation(msg) = err else {
            panic!("expected validation error");
        };
        assert!(msg.contains("between 6 and 128"));
    }

    #[test]
    fn given_mail_without_at_sign_when_validating_then_invalid() {
        let err = validate_registration("Ana", "not-an-email", "secret1").unwrap_err();
        assert!(matches!(err, IdentityError::Validation(_)));
    }

    #[test]
    fn given_valid_input_when_validating_then_ok() {
        assert!(validate_registration("Ana", "ana@example.com", "secret1").is_ok());
    }
}
