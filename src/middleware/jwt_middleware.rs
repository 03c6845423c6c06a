use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use log::debug;

use crate::errors::ApiError;
use crate::token::{self, TokenError};
use crate::AppState;

/// Authenticate gate: verifies the bearer token and attaches the claims to
/// the request, or short-circuits with 401.
#[derive(Clone)]
pub struct VerifyJwt {
    app_data: web::Data<AppState>,
}

impl VerifyJwt {
    pub fn new(app_data: web::Data<AppState>) -> Self {
        Self { app_data }
    }
}

impl<S, B> Transform<S, ServiceRequest> for VerifyJwt
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = VerifyJwtMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(VerifyJwtMiddleware {
            service,
            app_data: self.app_data.clone(),
        }))
    }
}

pub struct VerifyJwtMiddleware<S> {
    service: S,
    app_data: web::Data<AppState>,
}

impl<S, B> Service<ServiceRequest> for VerifyJwtMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = req
            .headers()
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(str::to_owned);

        let token = match token {
            Some(token) => token,
            None => {
                debug!("[Auth] no token provided in request");
                let err: Error = ApiError::unauthorized(&TokenError::Missing.to_string()).into();
                return Box::pin(ready(Err(err)));
            }
        };

        match token::verify(&self.app_data.config.jwt_secret, &token) {
            Ok(user) => {
                debug!("[Auth] token verified for user {} ({})", user.id, user.email);
                req.extensions_mut().insert(user);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await })
            }
            Err(err) => {
                debug!("[Auth] invalid token: {err}");
                let err: Error = ApiError::unauthorized(&err.to_string()).into();
                Box::pin(ready(Err(err)))
            }
        }
    }
}
