use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::errors::ApiError;
use crate::models::{AuthUser, UserRole};

/// Authorize-role gate. The admin-only mutations share paths with
/// user-visible methods, so the gate is an extractor rather than a scope
/// middleware; it still runs before any handler logic, after `VerifyJwt` has
/// attached the claims.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

impl FromRequest for AdminUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.extensions().get::<AuthUser>() {
            Some(user) if user.role == UserRole::Admin => Ok(AdminUser(user.clone())),
            Some(_) => Err(ApiError::forbidden("Admin access required").into()),
            None => Err(ApiError::unauthorized("No token provided").into()),
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use actix_web::ResponseError;
    use uuid::Uuid;

    fn auth_user(role: UserRole) -> AuthUser {
        AuthUser {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            role,
        }
    }

    #[actix_web::test]
    async fn admin_claims_pass_the_gate() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(auth_user(UserRole::Admin));
        let extracted = AdminUser::from_request(&req, &mut Payload::None).await;
        assert!(extracted.is_ok());
    }

    #[actix_web::test]
    async fn non_admin_claims_are_forbidden() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(auth_user(UserRole::User));
        let err = AdminUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap_err();
        assert_eq!(err.as_response_error().status_code(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn missing_claims_are_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let err = AdminUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::UNAUTHORIZED
        );
    }
}
