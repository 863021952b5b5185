use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Seconds in one bucket. Buckets are exactly this wide even on
/// DST-transition days; see [`DayBucket`].
pub const DAY_SECONDS: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
}

impl AttendanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Late => "Late",
            Self::Absent => "Absent",
        }
    }

    /// CSS class for status coloring; matches the lowercase wire form.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Late => "late",
            Self::Absent => "absent",
        }
    }
}

/// One attendance event, append-only from our perspective.
///
/// There is no identity beyond `(user_id, timestamp)`; the appliance may
/// report duplicates and we do not deduplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub timestamp: i64,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Name if the appliance knew it, otherwise the raw user id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.user_id)
    }
}

/// Status facet of the attendance filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AttendanceStatus),
}

impl StatusFilter {
    /// Parse a filter-select value, falling back to `All` for anything else.
    pub fn from_value(value: &str) -> Self {
        match value {
            "present" => Self::Only(AttendanceStatus::Present),
            "late" => Self::Only(AttendanceStatus::Late),
            "absent" => Self::Only(AttendanceStatus::Absent),
            _ => Self::All,
        }
    }

    pub fn matches(&self, status: AttendanceStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

/// One local calendar day as a half-open range of epoch seconds.
///
/// The start is local midnight in the viewer's zone; the end is exactly
/// 86400 seconds later. DST-transition days are therefore still 86400
/// seconds wide here, which can shift the evening boundary by an hour on
/// those two days a year. Known limitation, kept deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBucket {
    pub start: i64,
    pub end: i64,
}

impl DayBucket {
    pub fn for_date(date: Date, tz: &TimeZone) -> Result<Self> {
        let midnight = date
            .to_zoned(tz.clone())
            .map_err(|e| crate::err!("no midnight for {date}: {e}"))?;
        let start = midnight.timestamp().as_second();
        Ok(Self {
            start,
            end: start + DAY_SECONDS,
        })
    }

    pub fn today(tz: &TimeZone) -> Result<Self> {
        let date = Timestamp::now().to_zoned(tz.clone()).date();
        Self::for_date(date, tz)
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        self.start <= timestamp && timestamp < self.end
    }
}

/// The viewer's zone, falling back to UTC when the system zone is unknown
/// (which is the common case on the web target).
pub fn local_tz() -> TimeZone {
    TimeZone::try_system().unwrap_or(TimeZone::UTC)
}

pub fn filter_by_status(records: &[AttendanceRecord], filter: StatusFilter) -> Vec<AttendanceRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record.status))
        .cloned()
        .collect()
}

pub fn filter_by_day(records: &[AttendanceRecord], bucket: &DayBucket) -> Vec<AttendanceRecord> {
    records
        .iter()
        .filter(|record| bucket.contains(record.timestamp))
        .cloned()
        .collect()
}

/// Sort for display: newest first, ties broken by user id so equal
/// timestamps render in a deterministic order.
pub fn sort_newest_first(records: &mut [AttendanceRecord]) {
    records.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
}

/// The `n` most recent records, newest first. Leaves the input untouched.
pub fn recent(records: &[AttendanceRecord], n: usize) -> Vec<AttendanceRecord> {
    let mut sorted = records.to_vec();
    sort_newest_first(&mut sorted);
    sorted.truncate(n);
    sorted
}

/// Per-status totals for one day's bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayCounts {
    pub present: usize,
    pub late: usize,
    pub absent: usize,
}

impl DayCounts {
    pub fn tally(records: &[AttendanceRecord]) -> Self {
        let mut counts = Self::default();
        for record in records {
            match record.status {
                AttendanceStatus::Present => counts.present += 1,
                AttendanceStatus::Late => counts.late += 1,
                AttendanceStatus::Absent => counts.absent += 1,
            }
        }
        counts
    }
}

/// Local time-of-day for a record timestamp, e.g. "08:07:31 AM".
pub fn format_time_of_day(timestamp: i64, tz: &TimeZone) -> String {
    match Timestamp::new(timestamp, 0) {
        Ok(ts) => ts
            .to_zoned(tz.clone())
            .strftime("%I:%M:%S %p")
            .to_string(),
        Err(_) => "--:--:--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil;

    fn tz() -> TimeZone {
        TimeZone::get("America/New_York").unwrap()
    }

    fn at(date: Date, hour: i8, minute: i8) -> i64 {
        date.at(hour, minute, 0, 0)
            .to_zoned(tz())
            .unwrap()
            .timestamp()
            .as_second()
    }

    fn record(user_id: &str, timestamp: i64, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            user_id: user_id.into(),
            name: None,
            timestamp,
            status,
        }
    }

    #[test]
    fn bucket_is_exactly_one_day_wide() {
        for date in [
            civil::date(2024, 5, 6),
            // DST transitions: still 86400 by design.
            civil::date(2024, 3, 10),
            civil::date(2024, 11, 3),
        ] {
            let bucket = DayBucket::for_date(date, &tz()).unwrap();
            assert_eq!(bucket.start + DAY_SECONDS, bucket.end, "{date}");
        }
    }

    #[test]
    fn bucket_membership_is_half_open() {
        let bucket = DayBucket::for_date(civil::date(2024, 5, 6), &tz()).unwrap();
        assert!(bucket.contains(bucket.start));
        assert!(bucket.contains(bucket.end - 1));
        assert!(!bucket.contains(bucket.end));
        assert!(!bucket.contains(bucket.start - 1));
    }

    #[test]
    fn day_filter_keeps_only_that_day() {
        let day = civil::date(2024, 5, 6);
        let records = vec![
            record("u1", at(day, 8, 0), AttendanceStatus::Present),
            record("u2", at(day, 9, 30), AttendanceStatus::Late),
            record("u1", at(day.tomorrow().unwrap(), 8, 0), AttendanceStatus::Present),
        ];
        let bucket = DayBucket::for_date(day, &tz()).unwrap();
        let today = filter_by_day(&records, &bucket);
        assert_eq!(today.len(), 2);
        assert!(today.iter().all(|r| r.timestamp < bucket.end));
    }

    #[test]
    fn status_all_is_identity() {
        let day = civil::date(2024, 5, 6);
        let records = vec![
            record("u1", at(day, 8, 0), AttendanceStatus::Present),
            record("u2", at(day, 9, 30), AttendanceStatus::Absent),
        ];
        assert_eq!(filter_by_status(&records, StatusFilter::All), records);
    }

    #[test]
    fn status_filter_selects_one_status() {
        let day = civil::date(2024, 5, 6);
        let records = vec![
            record("u1", at(day, 8, 0), AttendanceStatus::Present),
            record("u2", at(day, 9, 30), AttendanceStatus::Late),
            record("u3", at(day, 9, 45), AttendanceStatus::Late),
        ];
        let late = filter_by_status(&records, StatusFilter::Only(AttendanceStatus::Late));
        assert_eq!(late.len(), 2);
        assert!(late.iter().all(|r| r.status == AttendanceStatus::Late));
    }

    #[test]
    fn sort_is_newest_first_and_idempotent() {
        let mut records = vec![
            record("u1", 100, AttendanceStatus::Present),
            record("u2", 300, AttendanceStatus::Late),
            record("u3", 200, AttendanceStatus::Present),
        ];
        sort_newest_first(&mut records);
        let once = records.clone();
        sort_newest_first(&mut records);
        assert_eq!(records, once);
        assert_eq!(
            records.iter().map(|r| r.timestamp).collect::<Vec<_>>(),
            vec![300, 200, 100]
        );
    }

    #[test]
    fn equal_timestamps_break_ties_by_user_id() {
        let mut records = vec![
            record("u2", 100, AttendanceStatus::Present),
            record("u1", 100, AttendanceStatus::Late),
        ];
        sort_newest_first(&mut records);
        assert_eq!(records[0].user_id, "u1");
        assert_eq!(records[1].user_id, "u2");
    }

    #[test]
    fn recent_truncates_after_sorting() {
        let records: Vec<_> = (0..25)
            .map(|i| record(&format!("u{i}"), i, AttendanceStatus::Present))
            .collect();
        let top = recent(&records, 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].timestamp, 24);
        assert_eq!(top[9].timestamp, 15);
        // Source order untouched.
        assert_eq!(records[0].timestamp, 0);
    }

    #[test]
    fn tally_counts_by_status() {
        let records = vec![
            record("u1", 1, AttendanceStatus::Present),
            record("u2", 2, AttendanceStatus::Present),
            record("u3", 3, AttendanceStatus::Late),
            record("u4", 4, AttendanceStatus::Absent),
        ];
        let counts = DayCounts::tally(&records);
        assert_eq!(
            counts,
            DayCounts {
                present: 2,
                late: 1,
                absent: 1
            }
        );
    }

    #[test]
    fn display_name_falls_back_to_user_id() {
        let mut rec = record("u7", 1, AttendanceStatus::Present);
        assert_eq!(rec.display_name(), "u7");
        rec.name = Some("Grace".into());
        assert_eq!(rec.display_name(), "Grace");
    }

    #[test]
    fn wire_format_matches_the_appliance() {
        let json = serde_json::json!({
            "userId": "u1",
            "timestamp": 1_714_988_400,
            "status": "late"
        });
        let rec: AttendanceRecord = serde_json::from_value(json).unwrap();
        assert_eq!(rec.user_id, "u1");
        assert_eq!(rec.name, None);
        assert_eq!(rec.status, AttendanceStatus::Late);

        let back = serde_json::to_value(&rec).unwrap();
        assert_eq!(back["userId"], "u1");
        assert_eq!(back["status"], "late");
        assert!(back.get("name").is_none());
    }

    #[test]
    fn time_of_day_is_twelve_hour_with_seconds() {
        let ts = civil::date(2024, 5, 6)
            .at(13, 5, 9, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
            .timestamp()
            .as_second();
        assert_eq!(format_time_of_day(ts, &TimeZone::UTC), "01:05:09 PM");
    }
}
