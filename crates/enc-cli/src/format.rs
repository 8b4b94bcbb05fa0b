//! Number formatting for dashboard output.
//!
//! Counts use `.` as the thousands separator; decimals keep a `.` point.

/// Formats a count with `.` between thousands groups: `1234567` becomes
/// `1.234.567`.
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Daily average card: one decimal.
pub fn format_daily_average(value: f64) -> String {
    format!("{value:.1}")
}

/// Monthly average card: no decimals.
pub fn format_monthly_average(value: f64) -> String {
    format!("{value:.0}")
}

/// Percentage with one decimal and a trailing `%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Footer line: rows with a valid encounter date, plus the number dropped
/// for an invalid one when there are any.
pub fn format_loaded_rows(valid_rows: usize, raw_rows: usize) -> String {
    let dropped = raw_rows.saturating_sub(valid_rows);
    if dropped == 0 {
        format!("Loaded rows: {}", format_count(valid_rows))
    } else {
        format!(
            "Loaded rows: {} ({} without a valid date)",
            format_count(valid_rows),
            format_count(dropped)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(12345), "12.345");
        assert_eq!(format_count(1_234_567), "1.234.567");
    }

    #[test]
    fn test_card_formats() {
        assert_eq!(format_daily_average(2.0), "2.0");
        assert_eq!(format_daily_average(12.345), "12.3");
        assert_eq!(format_monthly_average(41.6), "42");
        assert_eq!(format_monthly_average(0.0), "0");
        assert_eq!(format_percent(50.0), "50.0%");
        assert_eq!(format_percent(33.333), "33.3%");
    }

    #[test]
    fn test_loaded_rows_counts_valid_dates() {
        assert_eq!(format_loaded_rows(1234, 1234), "Loaded rows: 1.234");
        assert_eq!(
            format_loaded_rows(1230, 2230),
            "Loaded rows: 1.230 (1.000 without a valid date)"
        );
        assert_eq!(format_loaded_rows(0, 2), "Loaded rows: 0 (2 without a valid date)");
    }
}
