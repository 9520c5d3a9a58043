use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::models::Lesson;

/// One line of the post-login "today's lessons" notification. The countdown
/// label is fixed at build time against the supplied `now`; it is not meant
/// to tick afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonReminder {
    pub lesson_id: String,
    pub title: String,
    pub time: String,
    pub countdown: String,
}

/// Keeps the lessons dated `now`'s calendar date and attaches a countdown
/// label to each. Lessons with an unparsable date or time are skipped; both
/// fields are validated at creation so that only covers pre-validation rows.
pub fn todays_reminders(lessons: &[Lesson], now: NaiveDateTime) -> Vec<LessonReminder> {
    lessons
        .iter()
        .filter_map(|lesson| {
            let date = NaiveDate::parse_from_str(&lesson.date, "%Y-%m-%d").ok()?;
            if date != now.date() {
                return None;
            }
            let time = NaiveTime::parse_from_str(&lesson.time, "%H:%M").ok()?;
            Some(LessonReminder {
                lesson_id: lesson.id.clone(),
                title: lesson.title.clone(),
                time: lesson.time.clone(),
                countdown: countdown_label(date.and_time(time), now),
            })
        })
        .collect()
}

/// "in {H}h {M}m" for a future start (hour part omitted when zero, minutes
/// floored), "already started" at or after the start instant.
pub fn countdown_label(start: NaiveDateTime, now: NaiveDateTime) -> String {
    let delta = start - now;
    let minutes = delta.num_minutes();
    if minutes <= 0 && delta.num_seconds() <= 0 {
        return "already started".to_string();
    }
    let hours = minutes / 60;
    let remainder = minutes % 60;
    if hours == 0 {
        format!("in {remainder}m")
    } else {
        format!("in {hours}h {remainder}m")
    }
}
