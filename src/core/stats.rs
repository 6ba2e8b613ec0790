//! Statistics derivations: status counts, time periods, and the
//! dashboard activity feed.
//!
//! Chart rendering is an external concern; these helpers only prepare the
//! numbers the charts and dashboard consume.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

use crate::config;
use crate::models::{Document, DocumentStatus};
use crate::utils::format::time_ago;

// =============================================================================
// Status Counts
// =============================================================================

/// Documents bucketed by lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub uploaded: usize,
    pub ready: usize,
    pub deleted: usize,
}

pub fn status_counts(documents: &[Document]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for doc in documents {
        match doc.status {
            DocumentStatus::Uploaded => counts.uploaded += 1,
            DocumentStatus::Ready => counts.ready += 1,
            DocumentStatus::Deleted => counts.deleted += 1,
        }
    }
    counts
}

// =============================================================================
// Time Periods
// =============================================================================

/// Granularity of a statistics window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PeriodKind {
    #[default]
    Week,
    Month,
}

/// One selectable time window.
#[derive(Clone, Debug, PartialEq)]
pub struct Period {
    /// Stable selector key ("week-0", "month-3", ...).
    pub key: String,
    pub label: String,
    pub start: NaiveDate,
    /// Inclusive end date.
    pub end: NaiveDate,
}

fn week_label(index: usize, start: NaiveDate, end: NaiveDate) -> String {
    match index {
        0 => "This Week".to_string(),
        1 => "Last Week".to_string(),
        _ => format!("{} {}-{}", start.format("%b"), start.day(), end.day()),
    }
}

fn month_label(index: usize, start: NaiveDate) -> String {
    match index {
        0 => "This Month".to_string(),
        1 => "Last Month".to_string(),
        _ => start.format("%B %Y").to_string(),
    }
}

fn weeks_back(today: NaiveDate, days_into_week: u64) -> Vec<Period> {
    (0..config::periods::WEEK_PERIODS)
        .map(|i| {
            let start = today - Days::new(days_into_week + (i as u64) * 7);
            let end = start + Days::new(6);
            Period {
                key: format!("week-{i}"),
                label: week_label(i, start, end),
                start,
                end,
            }
        })
        .collect()
}

fn months_back(today: NaiveDate) -> Vec<Period> {
    (0..config::periods::MONTH_PERIODS)
        .map(|i| {
            let months = today.year() * 12 + today.month0() as i32 - i as i32;
            let (year, month0) = (months.div_euclid(12), months.rem_euclid(12) as u32);
            let start = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or(today);
            let end = crate::core::calendar::next_month(start)
                .pred_opt()
                .unwrap_or(start);
            Period {
                key: format!("month-{i}"),
                label: month_label(i, start),
                start,
                end,
            }
        })
        .collect()
}

/// Trailing periods for document statistics.
///
/// Weeks run Sunday through Saturday.
pub fn document_periods(kind: PeriodKind, today: NaiveDate) -> Vec<Period> {
    match kind {
        PeriodKind::Week => weeks_back(today, u64::from(today.weekday().num_days_from_sunday())),
        PeriodKind::Month => months_back(today),
    }
}

/// Trailing periods for event statistics.
///
/// Event weeks run Monday through Sunday.
pub fn event_periods(kind: PeriodKind, today: NaiveDate) -> Vec<Period> {
    match kind {
        PeriodKind::Week => weeks_back(today, u64::from(today.weekday().num_days_from_monday())),
        PeriodKind::Month => months_back(today),
    }
}

/// Count timestamps whose date falls inside the period (inclusive).
pub fn count_in_period(stamps: &[DateTime<Utc>], period: &Period) -> usize {
    stamps
        .iter()
        .filter(|ts| {
            let date = ts.date_naive();
            date >= period.start && date <= period.end
        })
        .count()
}

// =============================================================================
// Dashboard Activity Feed
// =============================================================================

/// One entry of the dashboard activity feed.
#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    pub id: i64,
    pub title: String,
    /// Extension tag shown as the activity type ("PDF", "DOCX", ...).
    pub type_label: String,
    /// "RESTORE" for processed documents, "UPLOAD" otherwise.
    pub status_label: &'static str,
    pub time_ago: String,
}

/// The newest active documents rendered as activity entries.
pub fn recent_activities(documents: &[Document], now: DateTime<Utc>) -> Vec<Activity> {
    let mut docs: Vec<&Document> = documents.iter().filter(|d| d.is_active()).collect();
    docs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    docs.into_iter()
        .take(config::RECENT_ACTIVITY_LIMIT)
        .map(|doc| Activity {
            id: doc.id,
            title: doc.original_name.clone(),
            type_label: doc
                .original_name
                .rsplit('.')
                .next()
                .unwrap_or_default()
                .to_uppercase(),
            status_label: if doc.status == DocumentStatus::Ready {
                "RESTORE"
            } else {
                "UPLOAD"
            },
            time_ago: time_ago(doc.created_at, now),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn doc(id: i64, name: &str, status: DocumentStatus, day: u32) -> Document {
        Document {
            id,
            filename: String::new(),
            original_name: name.to_string(),
            file_type: String::new(),
            file_size: 1,
            status,
            folder_id: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, day, 8, 0, 0).unwrap(),
            deleted_at: None,
        }
    }

    #[test]
    fn test_status_counts() {
        let docs = vec![
            doc(1, "a.pdf", DocumentStatus::Uploaded, 1),
            doc(2, "b.pdf", DocumentStatus::Ready, 2),
            doc(3, "c.pdf", DocumentStatus::Ready, 3),
            doc(4, "d.pdf", DocumentStatus::Deleted, 4),
        ];
        let counts = status_counts(&docs);
        assert_eq!(counts.uploaded, 1);
        assert_eq!(counts.ready, 2);
        assert_eq!(counts.deleted, 1);
    }

    #[test]
    fn test_document_weeks_start_on_sunday() {
        // 2026-01-07 is a Wednesday; its document week starts Sunday 01-04.
        let today = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        let periods = document_periods(PeriodKind::Week, today);
        assert_eq!(periods.len(), 8);
        assert_eq!(periods[0].start, NaiveDate::from_ymd_opt(2026, 1, 4).unwrap());
        assert_eq!(periods[0].end, NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
        assert_eq!(periods[0].label, "This Week");
        assert_eq!(periods[1].label, "Last Week");
        assert_eq!(periods[2].label, "Dec 21-27");
    }

    #[test]
    fn test_event_weeks_start_on_monday() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        let periods = event_periods(PeriodKind::Week, today);
        assert_eq!(periods[0].start, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        assert_eq!(periods[0].end, NaiveDate::from_ymd_opt(2026, 1, 11).unwrap());
    }

    #[test]
    fn test_month_periods_cross_year_boundary() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
        let periods = document_periods(PeriodKind::Month, today);
        assert_eq!(periods.len(), 12);
        assert_eq!(periods[0].start, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(periods[0].end, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
        assert_eq!(periods[2].start, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(periods[2].label, "December 2025");
    }

    #[test]
    fn test_count_in_period_is_inclusive() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        let period = &document_periods(PeriodKind::Week, today)[0];
        let stamps = vec![
            Utc.with_ymd_and_hms(2026, 1, 4, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 1, 10, 23, 59, 59).unwrap(),
            Utc.with_ymd_and_hms(2026, 1, 11, 0, 0, 0).unwrap(),
        ];
        assert_eq!(count_in_period(&stamps, period), 2);
    }

    #[test]
    fn test_recent_activities() {
        let now = Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).unwrap();
        let docs = vec![
            doc(1, "old.pdf", DocumentStatus::Uploaded, 1),
            doc(2, "processed.docx", DocumentStatus::Ready, 8),
            doc(3, "gone.txt", DocumentStatus::Deleted, 9),
        ];
        let feed = recent_activities(&docs, now);
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].id, 2);
        assert_eq!(feed[0].type_label, "DOCX");
        assert_eq!(feed[0].status_label, "RESTORE");
        assert_eq!(feed[0].time_ago, "2 days ago");
        assert_eq!(feed[1].status_label, "UPLOAD");
    }
}
