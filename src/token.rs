use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::models::{AuthUser, Claims};

/// Tokens are valid for 7 days; there is no refresh flow, clients
/// re-authenticate after expiry.
pub const TOKEN_VALIDITY_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("No token provided")]
    Missing,
    #[error("Invalid token")]
    Invalid,
}

pub fn issue(secret: &str, user: &AuthUser) -> Result<String, TokenError> {
    let exp = Utc::now() + Duration::days(TOKEN_VALIDITY_DAYS);
    let claims = Claims {
        user: user.clone(),
        exp: exp.timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| TokenError::Invalid)
}

/// Signature mismatch and expiry both collapse to `Invalid`; callers only
/// distinguish a missing token from a bad one.
pub fn verify(secret: &str, token: &str) -> Result<AuthUser, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims.user)
    .map_err(|_| TokenError::Invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;
    use uuid::Uuid;

    const SECRET: &str = "test-secret";

    fn auth_user(role: UserRole) -> AuthUser {
        AuthUser {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            role,
        }
    }

    #[test]
    fn issued_token_round_trips_claims() {
        let user = auth_user(UserRole::Admin);
        let token = issue(SECRET, &user).unwrap();
        let decoded = verify(SECRET, &token).unwrap();
        assert_eq!(decoded.id, user.id);
        assert_eq!(decoded.email, user.email);
        assert_eq!(decoded.role, UserRole::Admin);
    }

    #[test]
    fn wrong_secret_fails_as_invalid() {
        let token = issue(SECRET, &auth_user(UserRole::User)).unwrap();
        assert_eq!(verify("another-secret", &token), Err(TokenError::Invalid));
    }

    #[test]
    fn garbage_token_fails_as_invalid() {
        assert_eq!(verify(SECRET, "not-a-jwt"), Err(TokenError::Invalid));
    }

    #[test]
    fn expired_token_fails_as_invalid() {
        // Well past the default 60s validation leeway.
        let exp = Utc::now() - Duration::hours(2);
        let claims = Claims {
            user: auth_user(UserRole::User),
            exp: exp.timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert_eq!(verify(SECRET, &token), Err(TokenError::Invalid));
    }
}
