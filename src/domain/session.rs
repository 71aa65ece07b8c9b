use serde::{Deserialize, Serialize};

use super::user::User;

/// Credential plus cached identity, written at login/registration and read
/// once at startup to decide initial navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}
