use serde::{Deserialize, Serialize};

/// Device-side attendance policy. Write-only from the dashboard; the
/// appliance applies the thresholds, we never compute them locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub attendance_start_hour: u8,
    pub attendance_start_minute: u8,
    pub late_threshold_minutes: u32,
    pub absent_threshold_minutes: u32,
    pub max_absences_before_drop: u32,
}

/// Parse an `HH:MM` time-input value into (hour, minute).
pub fn parse_start_time(value: &str) -> Option<(u8, u8)> {
    let (hours, minutes) = value.split_once(':')?;
    let hour: u8 = hours.parse().ok()?;
    let minute: u8 = minutes.parse().ok()?;
    (hour <= 23 && minute <= 59).then_some((hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_start_times() {
        assert_eq!(parse_start_time("08:30"), Some((8, 30)));
        assert_eq!(parse_start_time("00:00"), Some((0, 0)));
        assert_eq!(parse_start_time("23:59"), Some((23, 59)));
    }

    #[test]
    fn rejects_malformed_or_out_of_range_times() {
        assert_eq!(parse_start_time(""), None);
        assert_eq!(parse_start_time("0830"), None);
        assert_eq!(parse_start_time("24:00"), None);
        assert_eq!(parse_start_time("08:60"), None);
        assert_eq!(parse_start_time("ab:cd"), None);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let settings = Settings {
            attendance_start_hour: 8,
            attendance_start_minute: 0,
            late_threshold_minutes: 15,
            absent_threshold_minutes: 60,
            max_absences_before_drop: 3,
        };
        let json = serde_json::to_value(settings).unwrap();
        assert_eq!(json["attendanceStartHour"], 8);
        assert_eq!(json["lateThresholdMinutes"], 15);
        assert_eq!(json["maxAbsencesBeforeDrop"], 3);
    }
}
