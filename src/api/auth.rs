use axum::{Json, extract::State, http::StatusCode};

use crate::auth;
use crate::db::repository;
use crate::error::AppError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, Role, TeacherRef};
use crate::state::AppState;
use crate::validate::is_blank;

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<StatusCode, AppError> {
    let role = Role::parse(req.role.trim()).ok_or_else(|| {
        AppError::BadRequest("role must be one of student, teacher, admin".to_string())
    })?;
    for (name, value) in [
        ("email", &req.email),
        ("password", &req.password),
        ("full_name", &req.full_name),
    ] {
        if is_blank(value) {
            return Err(AppError::BadRequest(format!("{name} is required")));
        }
    }

    let password_hash = auth::hash_password(&req.password)?;
    match repository::insert_user(
        &state.db,
        req.email.trim(),
        &password_hash,
        req.full_name.trim(),
        role,
    )
    .await
    {
        Ok(_) => Ok(StatusCode::CREATED),
        Err(e) if repository::is_unique_violation(&e) => {
            Err(AppError::BadRequest("email already registered".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Unknown email and wrong password keep distinct messages, matching the
/// original contract. Both come back as 401.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = repository::find_user_by_email(&state.db, req.email.trim())
        .await?
        .ok_or_else(|| AppError::Unauthorized("user not found".to_string()))?;

    if !auth::verify_password(&req.password, &user.password_hash) {
        return Err(AppError::Unauthorized("wrong password".to_string()));
    }

    Ok(Json(LoginResponse { user: user.into() }))
}

pub async fn list_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherRef>>, AppError> {
    let teachers = repository::fetch_teachers(&state.db).await?;
    Ok(Json(teachers))
}
