use actix_web::{get, post, web, HttpResponse};
use bcrypt::{hash, verify, DEFAULT_COST};
use log::info;
use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::{AuthUser, PublicUser, UserRole};
use crate::store;
use crate::token;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[post("/register")]
pub async fn register(
    app_state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();

    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("All fields are required"));
    }

    let password_hash =
        hash(&req.password, DEFAULT_COST).map_err(|_| ApiError::internal("password hash failed"))?;

    // The role is fixed here: admin iff the email is on the allow-list.
    let role = if app_state.config.is_admin_email(&req.email) {
        UserRole::Admin
    } else {
        UserRole::User
    };

    let user = match store::users::create_with_profile(
        &app_state.db,
        &req.name,
        &req.email,
        &password_hash,
        role,
    )
    .await
    {
        Ok(user) => user,
        Err(sqlx::Error::Database(db)) if db.constraint() == Some("users_email_key") => {
            return Err(ApiError::bad_request("Email already registered"));
        }
        Err(err) => return Err(err.into()),
    };

    let auth_user = AuthUser {
        id: user.id,
        email: user.email.clone(),
        role,
    };
    let token = token::issue(&app_state.config.jwt_secret, &auth_user)
        .map_err(|_| ApiError::internal("token creation failed"))?;

    info!("[Register] created user {} ({})", user.id, user.email);

    Ok(HttpResponse::Ok()
        .json(serde_json::json!({ "user": PublicUser::from(&user), "token": token })))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[post("/login")]
pub async fn login(
    app_state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();
    info!("[Login] attempt for {}", req.email);

    let user = store::users::find_by_email(&app_state.db, &req.email)
        .await?
        .ok_or_else(|| {
            info!("[Login] user not found: {}", req.email);
            ApiError::unauthorized("Invalid credentials")
        })?;

    match verify(&req.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!("[Login] invalid password for {}", req.email);
            return Err(ApiError::unauthorized("Invalid credentials"));
        }
        Err(_) => return Err(ApiError::internal("password verification failed")),
    }

    let auth_user = AuthUser {
        id: user.id,
        email: user.email.clone(),
        role: user.role,
    };
    let token = token::issue(&app_state.config.jwt_secret, &auth_user)
        .map_err(|_| ApiError::internal("token creation failed"))?;

    info!("[Login] success for user {} ({})", user.id, user.email);
    Ok(HttpResponse::Ok()
        .json(serde_json::json!({ "user": PublicUser::from(&user), "token": token })))
}

#[get("/me")]
pub async fn me(
    app_state: web::Data<AppState>,
    claims: web::ReqData<AuthUser>,
) -> Result<HttpResponse, ApiError> {
    let user = store::users::find_by_id(&app_state.db, claims.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "user": PublicUser::from(&user) })))
}
