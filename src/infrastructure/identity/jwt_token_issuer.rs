use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::application::ports::{TokenError, TokenIssuer};
use crate::domain::User;

const TOKEN_LIFETIME_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256-signed bearer tokens carrying the user profile as claims.
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_LIFETIME_DAYS)).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{DecodingKey, Validation};

    use super::*;
    use crate::domain::UserId;

    #[test]
    fn given_user_when_issuing_then_claims_round_trip() {
        let issuer = JwtTokenIssuer::new("test-secret");
        let user = User {
            id: UserId::new(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        };

        let token = issuer.issue(&user).unwrap();

        let decoded = jsonwebtoken::decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(decoded.claims.sub, user.id.to_string());
        assert_eq!(decoded.claims.email, "ana@example.com");
        assert!(decoded.claims.exp > decoded.claims.iat);
    }
}
