use actix_web::{delete, post, put, web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::middleware::AdminUser;
use crate::models::AuthUser;
use crate::store;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateLessonRequest {
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub video_id: String,
    #[serde(default)]
    pub order_index: i32,
}

#[post("")]
pub async fn create_lesson(
    app_state: web::Data<AppState>,
    _admin: AdminUser,
    body: web::Json<CreateLessonRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();
    if req.title.trim().is_empty() || req.video_id.trim().is_empty() {
        return Err(ApiError::bad_request("Title and video id are required"));
    }

    let lesson = match store::lessons::create(
        &app_state.db,
        req.course_id,
        &req.title,
        req.description.as_deref(),
        &req.video_id,
        req.order_index,
    )
    .await
    {
        Ok(lesson) => lesson,
        Err(sqlx::Error::Database(db)) if db.constraint() == Some("lessons_course_id_fkey") => {
            return Err(ApiError::not_found("Course not found"));
        }
        Err(err) => return Err(err.into()),
    };
    Ok(HttpResponse::Ok().json(lesson))
}

#[derive(Debug, Deserialize)]
pub struct UpdateLessonRequest {
    pub title: String,
    pub description: Option<String>,
    pub video_id: String,
    #[serde(default)]
    pub order_index: i32,
}

#[put("/{id}")]
pub async fn update_lesson(
    app_state: web::Data<AppState>,
    _admin: AdminUser,
    path: web::Path<Uuid>,
    body: web::Json<UpdateLessonRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();
    if req.title.trim().is_empty() || req.video_id.trim().is_empty() {
        return Err(ApiError::bad_request("Title and video id are required"));
    }

    let found = store::lessons::update(
        &app_state.db,
        path.into_inner(),
        &req.title,
        req.description.as_deref(),
        &req.video_id,
        req.order_index,
    )
    .await?;
    if !found {
        return Err(ApiError::not_found("Lesson not found"));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

#[delete("/{id}")]
pub async fn delete_lesson(
    app_state: web::Data<AppState>,
    _admin: AdminUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let found = store::lessons::delete(&app_state.db, path.into_inner()).await?;
    if !found {
        return Err(ApiError::not_found("Lesson not found"));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

#[derive(Debug, Deserialize)]
pub struct CompleteLessonRequest {
    pub completed: bool,
}

#[post("/{id}/complete")]
pub async fn complete_lesson(
    app_state: web::Data<AppState>,
    claims: web::ReqData<AuthUser>,
    path: web::Path<Uuid>,
    body: web::Json<CompleteLessonRequest>,
) -> Result<HttpResponse, ApiError> {
    let lesson_id = path.into_inner();

    let progress =
        match store::lessons::set_progress(&app_state.db, claims.id, lesson_id, body.completed)
            .await
        {
            Ok(progress) => progress,
            Err(sqlx::Error::Database(db))
                if db.constraint() == Some("lesson_progress_lesson_id_fkey") =>
            {
                return Err(ApiError::not_found("Lesson not found"));
            }
            Err(err) => return Err(err.into()),
        };
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true, "progress": progress })))
}
