use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::{AuthUser, ChatRole};
use crate::store;
use crate::AppState;

#[get("/history/{agent_type}")]
pub async fn get_history(
    app_state: web::Data<AppState>,
    claims: web::ReqData<AuthUser>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let agent_type = path.into_inner();
    let history = store::chat_messages::history(&app_state.db, claims.id, &agent_type).await?;
    Ok(HttpResponse::Ok().json(history))
}

#[derive(Debug, Deserialize)]
pub struct AppendMessageRequest {
    pub agent_type: String,
    pub role: ChatRole,
    pub content: String,
    pub image_url: Option<String>,
}

#[post("/history")]
pub async fn append_history(
    app_state: web::Data<AppState>,
    claims: web::ReqData<AuthUser>,
    body: web::Json<AppendMessageRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();
    if req.agent_type.trim().is_empty() || req.content.is_empty() {
        return Err(ApiError::bad_request("Agent type and content are required"));
    }

    let id = store::chat_messages::append(
        &app_state.db,
        claims.id,
        &req.agent_type,
        req.role,
        &req.content,
        req.image_url.as_deref(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": id })))
}
