use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::middleware::AdminUser;
use crate::models::AuthUser;
use crate::store;
use crate::AppState;

#[get("")]
pub async fn list_courses(app_state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let courses = store::courses::list_with_counts(&app_state.db).await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[derive(Debug, Deserialize)]
pub struct CourseRequest {
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[post("")]
pub async fn create_course(
    app_state: web::Data<AppState>,
    _admin: AdminUser,
    body: web::Json<CourseRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();
    if req.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }

    let course = store::courses::create(
        &app_state.db,
        &req.title,
        req.description.as_deref(),
        req.thumbnail_url.as_deref(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(course))
}

#[put("/{id}")]
pub async fn update_course(
    app_state: web::Data<AppState>,
    _admin: AdminUser,
    path: web::Path<Uuid>,
    body: web::Json<CourseRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();
    if req.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }

    let found = store::courses::update(
        &app_state.db,
        path.into_inner(),
        &req.title,
        req.description.as_deref(),
        req.thumbnail_url.as_deref(),
    )
    .await?;
    if !found {
        return Err(ApiError::not_found("Course not found"));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

#[delete("/{id}")]
pub async fn delete_course(
    app_state: web::Data<AppState>,
    _admin: AdminUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let found = store::courses::delete(&app_state.db, path.into_inner()).await?;
    if !found {
        return Err(ApiError::not_found("Course not found"));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

#[get("/{id}/lessons")]
pub async fn course_lessons(
    app_state: web::Data<AppState>,
    claims: web::ReqData<AuthUser>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let lessons =
        store::lessons::list_for_course(&app_state.db, path.into_inner(), claims.id).await?;
    Ok(HttpResponse::Ok().json(lessons))
}
