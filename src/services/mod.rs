pub mod grade_view;
pub mod schedule;
pub mod stats;
pub mod ticket_view;

pub use grade_view::{GradeSummary, summarize};
pub use schedule::{LessonReminder, countdown_label, todays_reminders};
pub use stats::class_stats;
pub use ticket_view::{TicketStatus, filter_by_status, status, status_counts};
