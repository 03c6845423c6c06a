use actix_web::{get, post, web, HttpResponse};
use serde::Serialize;

use crate::errors::ApiError;
use crate::models::{AuthUser, Subscription, SubscriptionStatus};
use crate::store;
use crate::AppState;

#[derive(Debug, Serialize)]
struct SubscriptionStatusResponse {
    #[serde(rename = "hasSubscription")]
    has_subscription: bool,
    subscription: Option<Subscription>,
}

/// Reports the stored row as-is. Only the subscription gate performs the
/// lazy expiry flip; a status read does not mutate anything.
#[get("/status")]
pub async fn status(
    app_state: web::Data<AppState>,
    claims: web::ReqData<AuthUser>,
) -> Result<HttpResponse, ApiError> {
    let subscription = store::subscriptions::find_by_user(&app_state.db, claims.id).await?;

    let has_subscription = subscription
        .as_ref()
        .map(|s| s.status == SubscriptionStatus::Active)
        .unwrap_or(false);

    Ok(HttpResponse::Ok().json(SubscriptionStatusResponse {
        has_subscription,
        subscription,
    }))
}

#[post("/create-checkout")]
pub async fn create_checkout(
    app_state: web::Data<AppState>,
    claims: web::ReqData<AuthUser>,
) -> Result<HttpResponse, ApiError> {
    let user = store::users::find_by_id(&app_state.db, claims.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let query = serde_urlencoded::to_string([
        ("product_id", app_state.config.checkout_product_id.as_str()),
        ("customer_email", user.email.as_str()),
        ("customer_name", user.name.as_str()),
    ])
    .map_err(|_| ApiError::internal("checkout url encoding failed"))?;

    let checkout_url = format!("https://pay.cakto.com.br/checkout?{query}");
    Ok(HttpResponse::Ok().json(serde_json::json!({ "checkoutUrl": checkout_url })))
}
