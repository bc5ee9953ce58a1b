//! Time source and timestamp formatting.
//!
//! Timestamps are stored as RFC 3339 UTC strings with millisecond precision,
//! e.g. `2026-10-19T08:00:00.000Z`.

use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Injected source of "now" so controllers stay deterministic under test.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Current time in stored timestamp form.
    fn timestamp(&self) -> String {
        format_timestamp(self.now())
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Renders a stored timestamp as local date-time.
///
/// Unparsable input renders as `Invalid Date`, matching browser output.
pub fn display_local(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp.trim()) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{display_local, format_timestamp, Clock, FixedClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn timestamps_use_millisecond_utc_form() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        assert_eq!(format_timestamp(instant), "2026-10-19T08:00:00.000Z");
        assert_eq!(
            FixedClock::new(instant).timestamp(),
            "2026-10-19T08:00:00.000Z"
        );
    }

    #[test]
    fn display_local_handles_bad_input() {
        assert_eq!(display_local("yesterday"), "Invalid Date");
        assert_eq!(display_local(""), "Invalid Date");
        assert_eq!(display_local("2026-10-19T08:00:00.000Z").len(), 19);
    }
}
