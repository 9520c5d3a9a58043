use serde::{Deserialize, Serialize};

use crate::models::TicketWithNames;

/// Derived ticket state: `Pending` iff no response has been written. Both
/// the summary counts and the filter dropdown go through this one predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Pending,
    Answered,
}

pub fn status(ticket: &TicketWithNames) -> TicketStatus {
    if ticket.response.is_none() {
        TicketStatus::Pending
    } else {
        TicketStatus::Answered
    }
}

/// (pending, answered) counts for the summary header.
pub fn status_counts(tickets: &[TicketWithNames]) -> (usize, usize) {
    let pending = tickets
        .iter()
        .filter(|t| status(t) == TicketStatus::Pending)
        .count();
    (pending, tickets.len() - pending)
}

pub fn filter_by_status(
    tickets: &[TicketWithNames],
    wanted: TicketStatus,
) -> Vec<&TicketWithNames> {
    tickets.iter().filter(|t| status(t) == wanted).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(subject: &str, response: Option<&str>) -> TicketWithNames {
        TicketWithNames {
            id: subject.to_string(),
            student_id: "s1".to_string(),
            teacher_id: "t1".to_string(),
            subject: subject.to_string(),
            message: "help".to_string(),
            attachment: None,
            response: response.map(str::to_string),
            responded_at: response.map(|_| "2025-03-01T10:00:00Z".to_string()),
            created_at: "2025-03-01T09:00:00Z".to_string(),
            student_name: "Sam".to_string(),
            teacher_name: "Ms Smith".to_string(),
        }
    }

    #[test]
    fn test_status_predicate() {
        assert_eq!(status(&ticket("a", None)), TicketStatus::Pending);
        assert_eq!(status(&ticket("b", Some("done"))), TicketStatus::Answered);
        // an empty-string response still counts as answered
        assert_eq!(status(&ticket("c", Some(""))), TicketStatus::Answered);
    }

    #[test]
    fn test_counts_and_filter_agree() {
        let tickets = vec![
            ticket("a", None),
            ticket("b", Some("done")),
            ticket("c", None),
        ];

        let (pending, answered) = status_counts(&tickets);
        assert_eq!(pending, 2);
        assert_eq!(answered, 1);
        assert_eq!(
            filter_by_status(&tickets, TicketStatus::Pending).len(),
            pending
        );
        assert_eq!(
            filter_by_status(&tickets, TicketStatus::Answered).len(),
            answered
        );
    }
}
