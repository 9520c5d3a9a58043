use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Grade {
    pub id: String,
    pub lesson_id: String,
    pub student_id: String,
    pub teacher_id: String,
    pub grade: f64,
    pub comment: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewGradeRequest {
    pub lesson_id: String,
    pub student_id: String,
    pub teacher_id: String,
    pub grade: f64,
    pub comment: Option<String>,
}

/// Student-side listing, joined with lesson and teacher details.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentGradeRow {
    pub id: String,
    pub lesson_id: String,
    pub grade: f64,
    pub comment: Option<String>,
    pub created_at: String,
    pub lesson_title: String,
    pub lesson_date: String,
    pub lesson_time: String,
    pub teacher_name: String,
}

/// Teacher-side listing. Carries `lesson_id` so client filtering keys on the
/// foreign key, not on title+date.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeacherGradeRow {
    pub id: String,
    pub lesson_id: String,
    pub grade: f64,
    pub comment: Option<String>,
    pub created_at: String,
    pub student_name: String,
    pub lesson_title: String,
    pub lesson_date: String,
}

/// One grade row within a lesson, used for class statistics only. Identities
/// never leave the stats computation.
#[derive(Debug, Clone, FromRow)]
pub struct LessonGrade {
    pub student_id: String,
    pub grade: f64,
    pub created_at: String,
}

/// Anonymized aggregate returned to the requesting student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassStats {
    pub my_grade: f64,
    pub class_avg: f64,
    pub class_count: usize,
    pub my_rank: usize,
}
