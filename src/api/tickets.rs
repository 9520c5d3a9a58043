use std::path::Path as FsPath;

use axum::extract::{Multipart, Path, State};
use axum::{Json, http::StatusCode};
use uuid::Uuid;

use crate::db::repository;
use crate::error::AppError;
use crate::models::{NewTicket, ReplyRequest, Ticket, TicketWithNames};
use crate::state::AppState;
use crate::validate::is_blank;

/// Multipart form: student_id, teacher_id, subject, message are required
/// text fields; attachment is an optional file stored under the upload dir
/// and referenced by bare filename only.
pub async fn create_ticket(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Ticket>), AppError> {
    let mut student_id = String::new();
    let mut teacher_id = String::new();
    let mut subject = String::new();
    let mut message = String::new();
    let mut attachment: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "student_id" => student_id = field.text().await.map_err(bad_multipart)?,
            "teacher_id" => teacher_id = field.text().await.map_err(bad_multipart)?,
            "subject" => subject = field.text().await.map_err(bad_multipart)?,
            "message" => message = field.text().await.map_err(bad_multipart)?,
            "attachment" => {
                let original = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(bad_multipart)?;
                if !bytes.is_empty() {
                    let stored =
                        store_attachment(&state.config.upload_dir, original.as_deref(), &bytes)
                            .await?;
                    attachment = Some(stored);
                }
            }
            _ => {}
        }
    }

    for (name, value) in [
        ("student_id", &student_id),
        ("teacher_id", &teacher_id),
        ("subject", &subject),
        ("message", &message),
    ] {
        if is_blank(value) {
            return Err(AppError::BadRequest(format!("{name} is required")));
        }
    }

    let ticket = repository::insert_ticket(
        &state.db,
        NewTicket {
            student_id,
            teacher_id,
            subject,
            message,
            attachment,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

pub async fn list_for_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<TicketWithNames>>, AppError> {
    let tickets = repository::fetch_tickets_for_student(&state.db, &id).await?;
    Ok(Json(tickets))
}

pub async fn list_for_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<TicketWithNames>>, AppError> {
    let tickets = repository::fetch_tickets_for_teacher(&state.db, &id).await?;
    Ok(Json(tickets))
}

pub async fn reply(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ReplyRequest>,
) -> Result<StatusCode, AppError> {
    if is_blank(&req.response) {
        return Err(AppError::BadRequest("response is required".to_string()));
    }

    let updated = repository::reply_to_ticket(&state.db, &id, &req.response).await?;
    if updated {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::NotFound)
    }
}

/// Strips any client-supplied path components, prefixes a uuid to dodge
/// collisions, and writes the file under the upload dir.
async fn store_attachment(
    dir: &FsPath,
    original: Option<&str>,
    bytes: &[u8],
) -> Result<String, AppError> {
    let base = original
        .and_then(|n| FsPath::new(n).file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("attachment");
    let stored = format!("{}_{}", Uuid::new_v4(), base);

    tokio::fs::create_dir_all(dir).await.map_err(io_error)?;
    tokio::fs::write(dir.join(&stored), bytes)
        .await
        .map_err(io_error)?;

    Ok(stored)
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::BadRequest(format!("invalid multipart request: {err}"))
}

fn io_error(err: std::io::Error) -> AppError {
    tracing::error!("attachment write failed: {}", err);
    AppError::InternalServerError
}
