//! Formatting helpers shared by the template filters and the chart.
//!
//! Numbers follow Italian conventions: `.` groups thousands, `,` separates
//! decimals.

use chrono::NaiveDate;

/// Default day-first pattern used in the report body.
pub const DATE_PATTERN: &str = "%d-%m-%Y";

/// Short pattern for chart axis labels.
pub const CHART_DATE_PATTERN: &str = "%d-%m";

pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    date.format(pattern).to_string()
}

/// RFC 2822 timestamp at midnight of `date`, no zone information (`-0000`).
pub fn format_rfc2822(date: NaiveDate) -> String {
    date.and_time(chrono::NaiveTime::MIN)
        .format("%a, %d %b %Y %H:%M:%S -0000")
        .to_string()
}

/// Two decimals with grouped thousands; whole amounts drop the `,00`.
///
/// `1234.0 -> "1.234"`, `10.5 -> "10,50"`.
pub fn format_currency(value: f64) -> String {
    let s = format_decimal(value);
    match s.strip_suffix(",00") {
        Some(whole) => whole.to_string(),
        None => s,
    }
}

/// Two decimals with grouped thousands: `3.14159 -> "3,14"`.
pub fn format_percent(value: f64) -> String {
    format_decimal(value)
}

fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let raw = format!("{:.2}", value.abs());
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{},{frac_part}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
