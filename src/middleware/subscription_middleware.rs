use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage};
use chrono::Utc;
use futures_util::future::LocalBoxFuture;
use log::info;

use crate::errors::ApiError;
use crate::models::{AuthUser, SubscriptionStatus};
use crate::store;
use crate::AppState;

/// Authorize-subscription gate: requires an active subscription whose expiry
/// is in the future. A row observed past its expiry is flipped to inactive
/// before the request fails; lazy expiry-on-read is the only expiry
/// mechanism in this service.
#[derive(Clone)]
pub struct CheckSubscription {
    app_data: web::Data<AppState>,
}

impl CheckSubscription {
    pub fn new(app_data: web::Data<AppState>) -> Self {
        Self { app_data }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CheckSubscription
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CheckSubscriptionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CheckSubscriptionMiddleware {
            service: Rc::new(service),
            app_data: self.app_data.clone(),
        }))
    }
}

pub struct CheckSubscriptionMiddleware<S> {
    service: Rc<S>,
    app_data: web::Data<AppState>,
}

impl<S, B> Service<ServiceRequest> for CheckSubscriptionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let app_data = self.app_data.clone();

        Box::pin(async move {
            let user = req.extensions().get::<AuthUser>().cloned();
            let user = match user {
                Some(user) => user,
                None => return Err(ApiError::unauthorized("No token provided").into()),
            };

            let subscription = store::subscriptions::find_by_user(&app_data.db, user.id)
                .await
                .map_err(ApiError::from)?;

            let now = Utc::now();
            match subscription {
                Some(s) if s.is_active(now) => service.call(req).await,
                // Still marked active but past expiry: flip it before failing.
                Some(s) if s.status == SubscriptionStatus::Active => {
                    store::subscriptions::mark_inactive(&app_data.db, s.id)
                        .await
                        .map_err(ApiError::from)?;
                    info!(
                        "[Subscription] expired subscription {} for user {} marked inactive",
                        s.id, user.id
                    );
                    Err(ApiError::forbidden("Subscription expired").into())
                }
                _ => Err(ApiError::forbidden("Active subscription required").into()),
            }
        })
    }
}
