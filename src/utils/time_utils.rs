use chrono::{DateTime, Local, TimeZone};
use std::time::Duration;

pub struct TimeUtils;

impl TimeUtils {
    /// Wall-clock format used for history rows and the prediction card, e.g. "3:04:05 PM"
    pub const CLOCK_TIME_FORMAT: &'static str = "%-I:%M:%S %p";
}

/// Formats any zoned timestamp as a clock label.
pub fn time_label<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.format(TimeUtils::CLOCK_TIME_FORMAT).to_string()
}

/// The current local time as a clock label.
pub fn local_time_label() -> String {
    time_label(&Local::now())
}

/// Compact human duration for log lines ("850ms", "2.4s").
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed.as_millis() < 1000 {
        format!("{}ms", elapsed.as_millis())
    } else {
        format!("{:.1}s", elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn clock_label_uses_twelve_hour_format() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 9, 15, 4, 5).unwrap();
        assert_eq!(time_label(&dt), "3:04:05 PM");

        let morning = Utc.with_ymd_and_hms(2024, 3, 9, 9, 30, 0).unwrap();
        assert_eq!(time_label(&morning), "9:30:00 AM");
    }

    #[test]
    fn elapsed_switches_units_at_one_second() {
        assert_eq!(format_elapsed(Duration::from_millis(850)), "850ms");
        assert_eq!(format_elapsed(Duration::from_millis(2400)), "2.4s");
    }
}
