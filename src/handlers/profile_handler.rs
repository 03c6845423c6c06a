use actix_web::{get, put, web, HttpResponse};
use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::AuthUser;
use crate::store;
use crate::AppState;

#[get("")]
pub async fn get_profile(
    app_state: web::Data<AppState>,
    claims: web::ReqData<AuthUser>,
) -> Result<HttpResponse, ApiError> {
    let profile = store::users::profile_view(&app_state.db, claims.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(HttpResponse::Ok().json(profile))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
}

#[put("")]
pub async fn update_profile(
    app_state: web::Data<AppState>,
    claims: web::ReqData<AuthUser>,
    body: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();

    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("Name is required"));
    }

    store::users::update_profile(
        &app_state.db,
        claims.id,
        &req.name,
        req.bio.as_deref(),
        req.profile_image_url.as_deref(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
