use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Lesson {
    pub id: String,
    pub teacher_id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewLessonRequest {
    pub teacher_id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentRequest {
    pub student_id: String,
}

/// Enrolled-student projection for the class roster view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentRef {
    pub id: String,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceRequest {
    pub student_id: String,
    pub present: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttendanceRow {
    pub student_id: String,
    pub full_name: String,
    pub present: bool,
}
