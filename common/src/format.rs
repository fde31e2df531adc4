//! Display formatting for numbers, money, percentages, text and dates.
//!
//! Every function here is total: missing input renders a placeholder instead
//! of an empty string.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const PLACEHOLDER_NA: &str = "N/A";
pub const PLACEHOLDER_UNKNOWN: &str = "Unknown";
pub const PLACEHOLDER_SALARY: &str = "Not disclosed";

/// Formats an integer with `,` thousands separators, e.g. `1234567` -> `1,234,567`.
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

pub fn format_count(value: u64) -> String {
    format_number(i64::try_from(value).unwrap_or(i64::MAX))
}

/// Whole US dollars with grouping, e.g. `$85,000`; `N/A` when missing.
pub fn format_usd(amount: Option<f64>) -> String {
    match amount.filter(|a| a.is_finite()) {
        Some(amount) => format!("${}", format_number(amount.round() as i64)),
        None => PLACEHOLDER_NA.to_string(),
    }
}

pub fn format_percentage(value: Option<f64>, decimals: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{v:.decimals$}%"),
        None => "0%".to_string(),
    }
}

/// Cuts `text` to `max_chars` characters and appends `...` when anything was cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

/// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and plain dates.
pub fn parse_posted_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `2024-03-05` -> `Mar 5, 2024`.
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_posted_date)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| PLACEHOLDER_UNKNOWN.to_string())
}

pub fn format_salary_range(min: Option<f64>, max: Option<f64>) -> String {
    let min = min.filter(|v| v.is_finite() && *v > 0.0);
    let max = max.filter(|v| v.is_finite() && *v > 0.0);
    let usd = |v: f64| format_usd(Some(v));
    match (min, max) {
        (Some(min), Some(max)) => format!("{} - {}", usd(min), usd(max)),
        (Some(min), None) => format!("{}+", usd(min)),
        (None, Some(max)) => format!("Up to {}", usd(max)),
        (None, None) => PLACEHOLDER_SALARY.to_string(),
    }
}

pub fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_grouped() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-45000), "-45,000");
        assert_eq!(format_count(u64::MAX), "9,223,372,036,854,775,807");
    }

    #[test]
    fn dollars() {
        assert_eq!(format_usd(Some(85000.4)), "$85,000");
        assert_eq!(format_usd(Some(1234567.6)), "$1,234,568");
        assert_eq!(format_usd(Some(f64::INFINITY)), "N/A");
        assert_eq!(format_usd(None), "N/A");
    }

    #[test]
    fn percentages() {
        assert_eq!(format_percentage(Some(34.26), 1), "34.3%");
        assert_eq!(format_percentage(Some(50.0), 0), "50%");
        assert_eq!(format_percentage(None, 1), "0%");
        assert_eq!(format_percentage(Some(f64::NAN), 1), "0%");
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_text("Senior Data Engineer", 6), "Senior...");
        assert_eq!(truncate_text("Z\u{00FC}rich office", 6), "Z\u{00FC}rich...");
    }

    #[test]
    fn dates() {
        assert_eq!(format_date(Some("2024-03-05")), "Mar 5, 2024");
        assert_eq!(format_date(Some("2024-12-31 08:15:00")), "Dec 31, 2024");
        assert_eq!(format_date(Some("2024-01-02T10:00:00Z")), "Jan 2, 2024");
        assert_eq!(format_date(Some("not a date")), "Unknown");
        assert_eq!(format_date(None), "Unknown");
    }

    #[test]
    fn salary_ranges() {
        assert_eq!(format_salary_range(Some(60000.0), Some(90000.0)), "$60,000 - $90,000");
        assert_eq!(format_salary_range(Some(60000.0), None), "$60,000+");
        assert_eq!(format_salary_range(None, Some(90000.0)), "Up to $90,000");
        assert_eq!(format_salary_range(None, None), "Not disclosed");
        assert_eq!(format_salary_range(Some(0.0), None), "Not disclosed");
    }

    #[test]
    fn placeholders() {
        assert_eq!(or_placeholder(Some("  "), PLACEHOLDER_UNKNOWN), "Unknown");
        assert_eq!(or_placeholder(None, PLACEHOLDER_NA), "N/A");
        assert_eq!(or_placeholder(Some("Acme"), PLACEHOLDER_NA), "Acme");
    }
}
