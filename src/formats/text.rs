//! Plain-text sink.
//!
//! Writes one `[LEVEL] [timestamp] [module: origin] message` line per event.

use super::open_append;
use crate::core::event::LogEvent;
use crate::core::traits::EventWriter;
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::path::Path;

pub struct TextWriter<W: Write> {
    out: W,
    origin: String,
}

impl TextWriter<File> {
    /// Appends to `path`, creating the file and its directories if needed.
    pub fn append_to(path: impl AsRef<Path>, origin: impl Into<String>) -> io::Result<Self> {
        let file = open_append(path.as_ref())?;
        Ok(Self::new(file, origin))
    }
}

impl TextWriter<Stdout> {
    pub fn stdout(origin: impl Into<String>) -> Self {
        Self::new(io::stdout(), origin)
    }
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W, origin: impl Into<String>) -> Self {
        Self {
            out,
            origin: origin.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Renders the record line for an event, without the trailing newline.
pub fn format_line(event: &LogEvent, origin: &str) -> String {
    format!(
        "[{}] [{}] [module: {}] {}",
        event.level.sink_label(),
        event.formatted_timestamp(),
        origin,
        event.message
    )
}

impl<W: Write> EventWriter for TextWriter<W> {
    fn write_event(&mut self, event: &LogEvent) -> io::Result<u64> {
        let mut line = format_line(event, &self.origin);
        line.push('\n');
        self.out.write_all(line.as_bytes())?;
        self.out.flush()?;
        Ok(line.len() as u64)
    }

    fn close(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::Level;
    use chrono::NaiveDate;
    use std::fs;

    fn event(level: Level, message: &str) -> LogEvent {
        LogEvent {
            timestamp: NaiveDate::from_ymd_opt(2024, 10, 1)
                .and_then(|date| date.and_hms_opt(9, 15, 0))
                .expect("valid timestamp"),
            level,
            service: "PaymentService".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn payment_line_layout() {
        let event = event(
            Level::Info,
            "Payment processed successfully for order ID #2001 amount: $123.45",
        );
        assert_eq!(
            format_line(&event, "script"),
            "[INFO] [2024-10-01 09:15:00] [module: script] Payment processed successfully for order ID #2001 amount: $123.45"
        );
    }

    #[test]
    fn warn_is_written_as_warning() {
        let mut writer = TextWriter::new(Vec::new(), "script");
        let bytes = writer
            .write_event(&event(Level::Warn, "Shipping delay for order ID #2002"))
            .expect("write");
        let written = String::from_utf8(writer.into_inner()).expect("utf8");
        assert_eq!(bytes, written.len() as u64);
        assert_eq!(
            written,
            "[WARNING] [2024-10-01 09:15:00] [module: script] Shipping delay for order ID #2002\n"
        );
    }

    #[test]
    fn appends_to_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("ecommerce.log");

        let mut first = TextWriter::append_to(&path, "script").expect("open");
        first
            .write_event(&event(Level::Error, "Payment failed for order ID #2003 amount: $20.00"))
            .expect("write");
        first.close().expect("close");
        drop(first);

        let mut second = TextWriter::append_to(&path, "script").expect("reopen");
        second
            .write_event(&event(Level::Info, "Shipping label generated for order ID #2004"))
            .expect("write");
        second.close().expect("close");

        let contents = fs::read_to_string(&path).expect("read");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[ERROR] "));
        assert!(lines[1].ends_with("Shipping label generated for order ID #2004"));
    }
}
