//! Trash retention math.
//!
//! Trashed items are auto-purged by the server after a fixed retention
//! window; these helpers render the deadline for the trash view.

use chrono::{DateTime, Duration, Utc};

use crate::config::RETENTION_DAYS;
use crate::utils::format::format_date;

/// What to render about the purge deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetentionMode {
    /// Days remaining until auto-purge ("3 day left", "Expired").
    Remaining,
    /// The deadline date itself.
    Date,
}

/// Render auto-purge information for an item deleted at `deleted_at`.
///
/// `now` is passed in rather than read from the clock so callers and
/// tests agree on the reference point.
pub fn retention_info(deleted_at: DateTime<Utc>, mode: RetentionMode, now: DateTime<Utc>) -> String {
    let deadline = deleted_at + Duration::days(RETENTION_DAYS);
    match mode {
        RetentionMode::Date => format_date(deadline),
        RetentionMode::Remaining => {
            let secs = (deadline - now).num_seconds();
            if secs <= 0 {
                return "Expired".to_string();
            }
            // Round any partial day up, matching the deadline date shown
            // alongside.
            let days = (secs as u64).div_ceil(86_400);
            if days == 1 {
                "1 day left".to_string()
            } else {
                format!("{days} day left")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_one_day_left() {
        let deleted = now() - Duration::days(29);
        assert_eq!(
            retention_info(deleted, RetentionMode::Remaining, now()),
            "1 day left"
        );
    }

    #[test]
    fn test_expired_at_thirty_days() {
        let deleted = now() - Duration::days(30);
        assert_eq!(
            retention_info(deleted, RetentionMode::Remaining, now()),
            "Expired"
        );
        let long_gone = now() - Duration::days(45);
        assert_eq!(
            retention_info(long_gone, RetentionMode::Remaining, now()),
            "Expired"
        );
    }

    #[test]
    fn test_partial_days_round_up() {
        let deleted = now() - Duration::days(27) - Duration::hours(12);
        assert_eq!(
            retention_info(deleted, RetentionMode::Remaining, now()),
            "3 day left"
        );
    }

    #[test]
    fn test_deadline_date() {
        let deleted = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(
            retention_info(deleted, RetentionMode::Date, now()),
            "Feb 4, 2026"
        );
    }
}
