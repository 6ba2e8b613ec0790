//! Formatting utilities for file sizes, dates, and display names.

use chrono::{DateTime, Utc};

use crate::config::display;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

const ELLIPSIS: &str = "...";

/// Format a byte count for display (e.g., "512 B", "1.5 KB", "2.00 MB").
pub fn format_size(bytes: u64) -> String {
    if bytes >= MIB {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a timestamp as a short date (e.g., "Jan 5, 2026").
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Format a timestamp as a clock time (e.g., "3:05 PM").
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

/// Shorten a file name to at most `max` characters.
///
/// The extension is preserved by cutting from the base name and inserting
/// an ellipsis before it. Names whose extension is longer than the
/// preserve threshold (or that have none) are truncated whole, with a
/// trailing ellipsis and no extension kept.
pub fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }

    let ext = name.rfind('.').map(|i| &name[i..]).unwrap_or("");
    let ext_len = ext.chars().count();

    if ext_len == 0
        || ext_len > display::MAX_EXT_PRESERVE_LEN
        || ext_len + ELLIPSIS.len() >= max
    {
        let keep = max.saturating_sub(ELLIPSIS.len());
        let base: String = name.chars().take(keep).collect();
        return format!("{base}{ELLIPSIS}");
    }

    let keep = max - ext_len - ELLIPSIS.len();
    let base: String = name.chars().take(keep).collect();
    format!("{base}{ELLIPSIS}{ext}")
}

/// Relative age label for the activity feed ("2 days ago", "just now").
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - then;
    let days = elapsed.num_days();
    if days > 0 {
        return format!("{} day{} ago", days, if days > 1 { "s" } else { "" });
    }
    let hours = elapsed.num_hours();
    if hours > 0 {
        return format!("{} hour{} ago", hours, if hours > 1 { "s" } else { "" });
    }
    "just now".to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2_097_152), "2.00 MB");
        assert_eq!(format_size(1_572_864), "1.50 MB");
    }

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(format_date(ts), "Jan 5, 2026");
    }

    #[test]
    fn test_format_time() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 5, 15, 5, 0).unwrap();
        assert_eq!(format_time(ts), "3:05 PM");
        let morning = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
        assert_eq!(format_time(morning), "9:00 AM");
    }

    #[test]
    fn test_truncate_preserves_extension() {
        let truncated = truncate_name("a_very_long_filename_indeed.docx", 20);
        assert_eq!(truncated, "a_very_long_....docx");
        assert!(truncated.chars().count() <= 20);
        assert!(truncated.ends_with(".docx"));
    }

    #[test]
    fn test_truncate_short_names_untouched() {
        assert_eq!(truncate_name("notes.txt", 20), "notes.txt");
    }

    #[test]
    fn test_truncate_oversized_extension_drops_it() {
        // ".presentation" exceeds the preserve threshold.
        let truncated = truncate_name("quarterly_sales_review.presentation", 20);
        assert_eq!(truncated.chars().count(), 20);
        assert!(truncated.ends_with(ELLIPSIS));
        assert!(!truncated.ends_with(".presentation"));
    }

    #[test]
    fn test_truncate_name_without_extension() {
        let truncated = truncate_name("a_note_with_no_extension_at_all", 12);
        assert_eq!(truncated, "a_note_wi...");
    }

    #[test]
    fn test_time_ago() {
        let now = Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap();
        assert_eq!(time_ago(now - Duration::days(3), now), "3 days ago");
        assert_eq!(time_ago(now - Duration::days(1), now), "1 day ago");
        assert_eq!(time_ago(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(time_ago(now - Duration::minutes(20), now), "just now");
    }
}
