use crate::models::{ClassStats, LessonGrade};

/// Aggregates one lesson's grade rows for a requesting student.
///
/// The average and class count run over every grade row in the lesson (a
/// re-graded student contributes each of their rows). `my_grade` is the
/// requester's most recent row; `rows` must be ordered oldest first. Rank is
/// standard competition ranking: 1 + the number of rows strictly greater
/// than `my_grade`, so tied grades share the better rank.
///
/// Returns `None` when the requester has no grade in the lesson. Other
/// students' identities and individual grades never leave this function.
pub fn class_stats(rows: &[LessonGrade], student_id: &str) -> Option<ClassStats> {
    let my_grade = rows
        .iter()
        .filter(|g| g.student_id == student_id)
        .next_back()?
        .grade;

    let class_count = rows.len();
    let sum: f64 = rows.iter().map(|g| g.grade).sum();
    let class_avg = sum / class_count as f64;
    let my_rank = 1 + rows.iter().filter(|g| g.grade > my_grade).count();

    Some(ClassStats {
        my_grade,
        class_avg,
        class_count,
        my_rank,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(student_id: &str, grade: f64, created_at: &str) -> LessonGrade {
        LessonGrade {
            student_id: student_id.to_string(),
            grade,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_three_student_scenario() {
        let rows = vec![
            row("a", 70.0, "2025-03-01T10:00:00Z"),
            row("b", 86.0, "2025-03-01T10:01:00Z"),
            row("c", 90.0, "2025-03-01T10:02:00Z"),
        ];

        let stats = class_stats(&rows, "b").expect("Student has a grade");
        assert_eq!(stats.my_grade, 86.0);
        assert_eq!(stats.class_avg, 82.0);
        assert_eq!(stats.class_count, 3);
        assert_eq!(stats.my_rank, 2);
    }

    #[test]
    fn test_ties_share_the_better_rank() {
        let rows = vec![
            row("a", 90.0, "t1"),
            row("b", 90.0, "t2"),
            row("c", 86.0, "t3"),
        ];

        assert_eq!(class_stats(&rows, "a").unwrap().my_rank, 1);
        assert_eq!(class_stats(&rows, "b").unwrap().my_rank, 1);
        // two rows strictly above 86
        assert_eq!(class_stats(&rows, "c").unwrap().my_rank, 3);
    }

    #[test]
    fn test_rank_is_monotonic_and_bounded() {
        let rows = vec![
            row("a", 55.5, "t1"),
            row("b", 72.0, "t2"),
            row("c", 72.0, "t3"),
            row("d", 98.0, "t4"),
            row("e", 13.0, "t5"),
        ];

        let ranked: Vec<(f64, usize)> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|s| {
                let st = class_stats(&rows, s).unwrap();
                (st.my_grade, st.my_rank)
            })
            .collect();

        for (ga, ra) in &ranked {
            for (gb, rb) in &ranked {
                if ga > gb {
                    assert!(ra <= rb, "higher grade must not rank worse");
                }
            }
            assert!(*ra >= 1 && *ra <= rows.len());
        }
    }

    #[test]
    fn test_regrade_uses_most_recent_row() {
        let rows = vec![
            row("a", 40.0, "2025-03-01T10:00:00Z"),
            row("b", 60.0, "2025-03-01T10:01:00Z"),
            row("a", 95.0, "2025-03-02T10:00:00Z"),
        ];

        let stats = class_stats(&rows, "a").expect("Student has a grade");
        assert_eq!(stats.my_grade, 95.0);
        // every row still counts toward the class aggregate
        assert_eq!(stats.class_count, 3);
        assert_eq!(stats.my_rank, 1);
    }

    #[test]
    fn test_no_grade_for_requester() {
        let rows = vec![row("a", 70.0, "t1")];
        assert!(class_stats(&rows, "z").is_none());
        assert!(class_stats(&[], "z").is_none());
    }
}
