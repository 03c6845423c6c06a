use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserRole;

/// JWT payload. `user` is a read-only snapshot of identity taken at issue
/// time; it can go stale until the client re-authenticates.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user: AuthUser,
    pub exp: usize,
}

/// Identity claims attached to a request by the authenticate gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}
