//! Display formatting for note cards: relative dates, clock times, and
//! attachment sizes. Matches what the app has always shown.

use chrono::{DateTime, Datelike, Utc};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Relative day label for a note's timestamp: "Today", "Yesterday",
/// "4 days ago", then short dates ("Mar 5", with the year once it differs).
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    format_date_at(timestamp, Utc::now())
}

fn format_date_at(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds().abs();
    // Any partial day counts as a full one, so a note from a few hours
    // ago that crossed no midnight still rounds up.
    let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;

    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        _ => {
            if timestamp.year() == now.year() {
                timestamp.format("%b %-d").to_string()
            } else {
                timestamp.format("%b %-d, %Y").to_string()
            }
        }
    }
}

/// 12-hour clock time, e.g. "3:05 PM".
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

/// Human-readable byte count for attachment chips. 1024-based, at most
/// two decimals, "GB" at the top like the app's chips.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = (bytes as f64 / 1024_f64.powi(exponent as i32) * 100.0).round() / 100.0;
    format!("{} {}", value, UNITS[exponent])
}
