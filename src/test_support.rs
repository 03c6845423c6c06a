use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::HttpResponse;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;
use crate::AppState;

pub const JWT_SECRET: &str = "test-secret";
pub const WEBHOOK_SECRET: &str = "test-webhook-secret";

/// App state over a lazy pool that is never connected: route tests built on
/// this must be decided by the gates before any query runs.
/// Status of a test call whether the request was answered by a handler or
/// short-circuited by a gate: gate middleware fails the service call itself,
/// which `test::call_service` would treat as a test failure.
pub async fn response_status<S, B, R>(app: &S, req: R) -> StatusCode
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    match app.call(req).await {
        Ok(resp) => resp.status(),
        Err(err) => HttpResponse::from_error(err).status(),
    }
}

pub fn test_state() -> Data<AppState> {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://postgres@127.0.0.1/academy_test")
        .expect("lazy pool");
    Data::new(AppState {
        db: pool,
        config: Config {
            database_url: String::new(),
            host: "127.0.0.1".to_string(),
            port: 0,
            jwt_secret: JWT_SECRET.to_string(),
            webhook_secret: WEBHOOK_SECRET.to_string(),
            checkout_product_id: "prod_123".to_string(),
            admin_emails: vec!["admin@r4academy.com".to_string()],
        },
    })
}
