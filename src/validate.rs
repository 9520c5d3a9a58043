use chrono::NaiveDate;

/// Strict 24-hour "HH:MM": exactly two digits per component, HH in 00-23,
/// MM in 00-59. "9:30" and "24:00" are both rejected.
pub fn is_valid_time(time: &str) -> bool {
    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    let digits = |s: &[u8]| s.iter().all(|b| b.is_ascii_digit());
    if !digits(&bytes[0..2]) || !digits(&bytes[3..5]) {
        return false;
    }
    let hh: u32 = time[0..2].parse().unwrap_or(99);
    let mm: u32 = time[3..5].parse().unwrap_or(99);
    hh <= 23 && mm <= 59
}

/// "YYYY-MM-DD" that names a real calendar date.
pub fn is_valid_date(date: &str) -> bool {
    date.len() == 10 && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

pub fn is_valid_grade(grade: f64) -> bool {
    grade.is_finite() && (0.0..=100.0).contains(&grade)
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_accepts_strict_hhmm() {
        assert!(is_valid_time("00:00"));
        assert!(is_valid_time("09:30"));
        assert!(is_valid_time("14:30"));
        assert!(is_valid_time("23:59"));
    }

    #[test]
    fn test_time_rejects_loose_forms() {
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("9:30"));
        assert!(!is_valid_time("12:60"));
        assert!(!is_valid_time("12.30"));
        assert!(!is_valid_time("12:3"));
        assert!(!is_valid_time(""));
    }

    #[test]
    fn test_date_validation() {
        assert!(is_valid_date("2025-03-10"));
        assert!(!is_valid_date("2025-02-30"));
        assert!(!is_valid_date("2025-3-10"));
        assert!(!is_valid_date("not-a-date"));
    }

    #[test]
    fn test_grade_range() {
        assert!(is_valid_grade(0.0));
        assert!(is_valid_grade(86.0));
        assert!(is_valid_grade(100.0));
        assert!(!is_valid_grade(-1.0));
        assert!(!is_valid_grade(101.0));
        assert!(!is_valid_grade(f64::NAN));
        assert!(!is_valid_grade(f64::INFINITY));
    }
}
