use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Invariant: `response` and `responded_at` are set together by a single
/// UPDATE, so one is null exactly when the other is.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    pub id: String,
    pub student_id: String,
    pub teacher_id: String,
    pub subject: String,
    pub message: String,
    pub attachment: Option<String>,
    pub response: Option<String>,
    pub responded_at: Option<String>,
    pub created_at: String,
}

/// Listing row joined with both parties' display names, so the client never
/// needs a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TicketWithNames {
    pub id: String,
    pub student_id: String,
    pub teacher_id: String,
    pub subject: String,
    pub message: String,
    pub attachment: Option<String>,
    pub response: Option<String>,
    pub responded_at: Option<String>,
    pub created_at: String,
    pub student_name: String,
    pub teacher_name: String,
}

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub student_id: String,
    pub teacher_id: String,
    pub subject: String,
    pub message: String,
    // bare stored filename, never a path
    pub attachment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplyRequest {
    pub response: String,
}
