use actix_web::{post, web, HttpRequest, HttpResponse};
use chrono::{DateTime, Duration, Months, Utc};
use log::{error, info};
use serde::Deserialize;
use thiserror::Error;

use crate::errors::ApiError;
use crate::store;
use crate::utils::constant_time_eq;
use crate::AppState;

const SIGNATURE_HEADER: &str = "x-cakto-signature";

/// Purchase events the payment provider delivers under both its legacy and
/// current names.
const PURCHASE_EVENTS: [&str; 2] = ["compra aprovada", "purchase.approved"];

#[derive(Debug, Deserialize)]
struct WebhookPayload {
    event: String,
    customer: Option<WebhookCustomer>,
}

#[derive(Debug, Deserialize)]
struct WebhookCustomer {
    email: Option<String>,
}

#[derive(Debug, Error)]
enum WebhookError {
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Payment provider webhook. Signature-gated; no auth token. Once the
/// payload parses, the provider always gets a success acknowledgement:
/// resending cannot fix an unknown customer, so a failure status would only
/// cause useless retries.
#[post("/cakto")]
pub async fn cakto(
    app_state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let signature = req
        .headers()
        .get(SIGNATURE_HEADER)
        .and_then(|h| h.to_str().ok());

    let authorized = signature
        .map(|s| constant_time_eq(s.as_bytes(), app_state.config.webhook_secret.as_bytes()))
        .unwrap_or(false);
    if !authorized {
        info!("[Webhook] invalid signature");
        return Err(ApiError::unauthorized("Unauthorized"));
    }

    match process_event(&app_state, &body).await {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({ "received": true }))),
        Err(err) => {
            error!("[Webhook] processing error: {err}");
            Ok(HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Webhook processing failed" })))
        }
    }
}

async fn process_event(app_state: &AppState, body: &[u8]) -> Result<(), WebhookError> {
    let payload: WebhookPayload = serde_json::from_slice(body)?;

    if !PURCHASE_EVENTS.contains(&payload.event.as_str()) {
        info!("[Webhook] ignoring event '{}'", payload.event);
        return Ok(());
    }

    let email = match payload.customer.and_then(|c| c.email) {
        Some(email) => email,
        None => return Ok(()),
    };

    // An unknown customer is acknowledged without effect; there is no
    // pending-activation queue.
    let user = match store::users::find_by_email(&app_state.db, &email).await? {
        Some(user) => user,
        None => {
            info!("[Webhook] no user matching {email}");
            return Ok(());
        }
    };

    let expires_at = one_month_from(Utc::now());
    store::subscriptions::activate(&app_state.db, user.id, expires_at).await?;
    info!("[Webhook] subscription activated for {}", user.email);
    Ok(())
}

/// One calendar month out, clamped the way calendars clamp (Jan 31 → Feb 28).
fn one_month_from(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_add_months(Months::new(1))
        .unwrap_or_else(|| now + Duration::days(30))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use crate::test_support::{response_status, test_state, WEBHOOK_SECRET};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    async fn deliver(signature: Option<&str>, body: &'static str) -> StatusCode {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .service(actix_web::web::scope("/api").configure(routes::webhook_routes::config)),
        )
        .await;

        let mut req = test::TestRequest::post()
            .uri("/api/webhooks/cakto")
            .insert_header(("content-type", "application/json"))
            .set_payload(body);
        if let Some(signature) = signature {
            req = req.insert_header((SIGNATURE_HEADER, signature));
        }
        response_status(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn missing_signature_is_unauthorized() {
        let status = deliver(None, r#"{"event":"purchase.approved"}"#).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn wrong_signature_is_unauthorized() {
        let status = deliver(Some("not-the-secret"), r#"{"event":"purchase.approved"}"#).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn unrecognized_event_is_acknowledged() {
        let status = deliver(Some(WEBHOOK_SECRET), r#"{"event":"refund.issued"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn purchase_event_without_customer_is_acknowledged() {
        let status = deliver(Some(WEBHOOK_SECRET), r#"{"event":"compra aprovada"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn malformed_payload_fails_with_processing_error() {
        let status = deliver(Some(WEBHOOK_SECRET), "not json at all").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[::core::prelude::v1::test]
    fn one_month_from_is_roughly_thirty_days_out() {
        let now = Utc::now();
        let expires = one_month_from(now);
        let days = (expires - now).num_days();
        assert!((28..=31).contains(&days), "unexpected horizon: {days} days");
    }
}
