use serde::Serialize;

use crate::models::TeacherGradeRow;

/// Teacher-side summary over the grades they have issued.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeSummary {
    pub count: usize,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

/// Summarizes the rows, optionally restricted to one lesson. The filter keys
/// on `lesson_id`, so two lessons sharing a title and date stay distinct.
/// Returns `None` for an empty selection.
pub fn summarize(rows: &[TeacherGradeRow], lesson_id: Option<&str>) -> Option<GradeSummary> {
    let grades: Vec<f64> = rows
        .iter()
        .filter(|r| lesson_id.is_none_or(|id| r.lesson_id == id))
        .map(|r| r.grade)
        .collect();

    if grades.is_empty() {
        return None;
    }

    let count = grades.len();
    let sum: f64 = grades.iter().sum();
    let min = grades.iter().copied().fold(f64::INFINITY, f64::min);
    let max = grades.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(GradeSummary {
        count,
        average: sum / count as f64,
        min,
        max,
    })
}
