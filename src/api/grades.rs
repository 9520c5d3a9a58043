use axum::extract::{Path, Query, State};
use axum::{Json, http::StatusCode};
use serde::Deserialize;

use crate::db::repository;
use crate::error::AppError;
use crate::models::{ClassStats, Grade, NewGradeRequest, StudentGradeRow, TeacherGradeRow};
use crate::services::stats;
use crate::state::AppState;
use crate::validate::{is_blank, is_valid_grade};

#[derive(Deserialize)]
pub struct StatsQuery {
    pub student_id: String,
}

pub async fn create_grade(
    State(state): State<AppState>,
    Json(req): Json<NewGradeRequest>,
) -> Result<(StatusCode, Json<Grade>), AppError> {
    for (name, value) in [
        ("lesson_id", &req.lesson_id),
        ("student_id", &req.student_id),
        ("teacher_id", &req.teacher_id),
    ] {
        if is_blank(value) {
            return Err(AppError::BadRequest(format!("{name} is required")));
        }
    }
    if !is_valid_grade(req.grade) {
        return Err(AppError::BadRequest(
            "grade must be a number between 0 and 100".to_string(),
        ));
    }

    let grade = repository::insert_grade(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(grade)))
}

pub async fn list_for_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StudentGradeRow>>, AppError> {
    let grades = repository::fetch_grades_for_student(&state.db, &id).await?;
    Ok(Json(grades))
}

pub async fn list_for_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<TeacherGradeRow>>, AppError> {
    let grades = repository::fetch_grades_for_teacher(&state.db, &id).await?;
    Ok(Json(grades))
}

/// Returns the four aggregate numbers only; classmates' rows stay inside
/// the stats computation.
pub async fn grade_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<ClassStats>, AppError> {
    let rows = repository::fetch_lesson_grades(&state.db, &id).await?;
    let stats = stats::class_stats(&rows, &query.student_id).ok_or(AppError::NotFound)?;
    Ok(Json(stats))
}
