pub mod admin;
pub mod auth;
pub mod grades;
pub mod lessons;
pub mod tickets;

use axum::routing::{delete, post, put};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower_http::services::ServeDir;

use crate::error::AppError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.upload_dir);
    Router::new()
        .route("/health", get(health))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/teachers", get(auth::list_teachers))
        .route("/tickets", post(tickets::create_ticket))
        .route("/tickets/student/{id}", get(tickets::list_for_student))
        .route("/tickets/teacher/{id}", get(tickets::list_for_teacher))
        .route("/tickets/{id}/reply", put(tickets::reply))
        .route("/lessons", get(lessons::list_lessons).post(lessons::create_lesson))
        .route("/lessons/{id}/students", get(lessons::list_students))
        .route("/lessons/{id}/signup", post(lessons::sign_up))
        .route("/lessons/{id}/unsign", delete(lessons::unsign))
        .route(
            "/lessons/{id}/attendance",
            get(lessons::list_attendance).put(lessons::set_attendance),
        )
        .route("/lessons/{id}/grade-stats", get(grades::grade_stats))
        .route("/students/{id}/lessons", get(lessons::list_for_student))
        .route("/students/{id}/grades", get(grades::list_for_student))
        .route("/teachers/{id}/grades", get(grades::list_for_teacher))
        .route("/grades", post(grades::create_grade))
        .route("/admin/users", get(admin::list_users))
        .route("/admin/users/{id}", delete(admin::delete_user))
        .route("/admin/tickets", get(admin::list_tickets))
        .nest_service("/uploads", uploads)
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}
