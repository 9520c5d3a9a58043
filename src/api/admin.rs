use axum::extract::{Path, State};
use axum::{Json, http::StatusCode};

use crate::db::repository;
use crate::error::AppError;
use crate::models::{TicketWithNames, UserProfile};
use crate::state::AppState;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserProfile>>, AppError> {
    let users = repository::fetch_users(&state.db).await?;
    Ok(Json(users))
}

pub async fn list_tickets(
    State(state): State<AppState>,
) -> Result<Json<Vec<TicketWithNames>>, AppError> {
    let tickets = repository::fetch_all_tickets(&state.db).await?;
    Ok(Json(tickets))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let deleted = repository::delete_user_with_tickets(&state.db, &id).await?;
    if deleted {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::NotFound)
    }
}
