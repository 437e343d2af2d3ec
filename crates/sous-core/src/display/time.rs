//! Time display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Seconds rendered as a zero-padded `MM:SS` clock.
///
/// Minutes are not wrapped into hours, so 5400 seconds reads `90:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock(pub u32);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Human description of a timer length.
///
/// Whole minutes from 60 seconds up ("1 minute", "30 minutes"), plain
/// seconds below that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationLabel(pub u32);

impl fmt::Display for DurationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (count, unit) = if self.0 >= 60 {
            (self.0 / 60, "minute")
        } else {
            (self.0, "second")
        };
        write!(f, "{count} {unit}{}", if count == 1 { "" } else { "s" })
    }
}

/// A timestamp shown as wall-clock time (`HH:MM:SS`) in the system zone.
pub struct LocalTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::system()).strftime("%H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_padding() {
        assert_eq!(Clock(0).to_string(), "00:00");
        assert_eq!(Clock(5).to_string(), "00:05");
        assert_eq!(Clock(300).to_string(), "05:00");
        assert_eq!(Clock(1799).to_string(), "29:59");
        assert_eq!(Clock(5400).to_string(), "90:00");
    }

    #[test]
    fn test_duration_label_pluralization() {
        assert_eq!(DurationLabel(60).to_string(), "1 minute");
        assert_eq!(DurationLabel(119).to_string(), "1 minute");
        assert_eq!(DurationLabel(120).to_string(), "2 minutes");
        assert_eq!(DurationLabel(1800).to_string(), "30 minutes");
        assert_eq!(DurationLabel(45).to_string(), "45 seconds");
        assert_eq!(DurationLabel(1).to_string(), "1 second");
    }

    #[test]
    fn test_local_time_shape() {
        let ts = Timestamp::from_second(1_640_995_200).unwrap();
        let text = LocalTime(&ts).to_string();
        assert_eq!(text.len(), 8);
        assert_eq!(text.matches(':').count(), 2);
    }
}
