use axum::extract::{Path, State};
use axum::{Json, http::StatusCode};

use crate::db::repository;
use crate::error::AppError;
use crate::models::{
    AttendanceRequest, AttendanceRow, EnrollmentRequest, Lesson, NewLessonRequest, StudentRef,
};
use crate::state::AppState;
use crate::validate::{is_blank, is_valid_date, is_valid_time};

pub async fn create_lesson(
    State(state): State<AppState>,
    Json(req): Json<NewLessonRequest>,
) -> Result<(StatusCode, Json<Lesson>), AppError> {
    if is_blank(&req.title) {
        return Err(AppError::BadRequest("title is required".to_string()));
    }
    if is_blank(&req.teacher_id) {
        return Err(AppError::BadRequest("teacher_id is required".to_string()));
    }
    if !is_valid_date(&req.date) {
        return Err(AppError::BadRequest(
            "date must be a valid YYYY-MM-DD calendar date".to_string(),
        ));
    }
    if !is_valid_time(&req.time) {
        return Err(AppError::BadRequest(
            "time must be HH:MM in 24-hour format".to_string(),
        ));
    }

    let lesson = repository::insert_lesson(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

pub async fn list_lessons(State(state): State<AppState>) -> Result<Json<Vec<Lesson>>, AppError> {
    let lessons = repository::fetch_lessons(&state.db).await?;
    Ok(Json(lessons))
}

pub async fn list_for_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Lesson>>, AppError> {
    let lessons = repository::fetch_lessons_for_student(&state.db, &id).await?;
    Ok(Json(lessons))
}

pub async fn list_students(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StudentRef>>, AppError> {
    let students = repository::fetch_students_for_lesson(&state.db, &id).await?;
    Ok(Json(students))
}

pub async fn sign_up(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<EnrollmentRequest>,
) -> Result<StatusCode, AppError> {
    if is_blank(&req.student_id) {
        return Err(AppError::BadRequest("student_id is required".to_string()));
    }
    repository::sign_up(&state.db, &id, &req.student_id).await?;
    Ok(StatusCode::OK)
}

pub async fn unsign(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<EnrollmentRequest>,
) -> Result<StatusCode, AppError> {
    if is_blank(&req.student_id) {
        return Err(AppError::BadRequest("student_id is required".to_string()));
    }
    repository::unsign(&state.db, &id, &req.student_id).await?;
    Ok(StatusCode::OK)
}

pub async fn set_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AttendanceRequest>,
) -> Result<StatusCode, AppError> {
    if is_blank(&req.student_id) {
        return Err(AppError::BadRequest("student_id is required".to_string()));
    }
    repository::set_attendance(&state.db, &id, &req.student_id, req.present).await?;
    Ok(StatusCode::OK)
}

pub async fn list_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<AttendanceRow>>, AppError> {
    let rows = repository::fetch_attendance(&state.db, &id).await?;
    Ok(Json(rows))
}
