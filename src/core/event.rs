use chrono::NaiveDateTime;
use std::fmt;

/// Timestamp layout used by every sink (second precision, local wall clock).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single synthetic log record, built fresh for each loop iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    /// Local wall-clock time the event was generated, truncated to seconds.
    pub timestamp: NaiveDateTime,
    /// Severity drawn for this event.
    pub level: Level,
    /// Simulated platform service that "produced" the message.
    pub service: String,
    /// Fully rendered message text.
    pub message: String,
}

impl LogEvent {
    /// Timestamp rendered in the sink layout.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Event severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Info, Level::Warn, Level::Error];

    /// Label written by sinks. `Warn` is spelled out as `WARNING` there while
    /// the other two match their internal names.
    pub fn sink_label(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn warn_maps_to_warning_at_the_sink() {
        assert_eq!(Level::Info.sink_label(), "INFO");
        assert_eq!(Level::Warn.sink_label(), "WARNING");
        assert_eq!(Level::Error.sink_label(), "ERROR");
        assert_eq!(Level::Warn.to_string(), "WARN");
    }

    #[test]
    fn timestamp_has_second_precision() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|date| date.and_hms_opt(7, 5, 1))
            .expect("valid timestamp");
        let event = LogEvent {
            timestamp,
            level: Level::Info,
            service: "ShippingService".to_string(),
            message: "Shipping delay for order ID #2001".to_string(),
        };
        assert_eq!(event.formatted_timestamp(), "2024-03-09 07:05:01");
    }
}
