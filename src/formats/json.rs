//! JSON-lines sink for shoplog events.
//!
//! Writes one object per line with the same fields as the text layout.

use super::open_append;
use crate::core::event::LogEvent;
use crate::core::traits::EventWriter;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::path::Path;

/// Writer that emits one JSON object per event.
pub struct JsonlWriter<W: Write> {
    out: W,
    origin: String,
}

#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    timestamp: String,
    level: &'static str,
    origin: &'a str,
    service: &'a str,
    message: &'a str,
}

impl JsonlWriter<File> {
    pub fn append_to(path: impl AsRef<Path>, origin: impl Into<String>) -> io::Result<Self> {
        let file = open_append(path.as_ref())?;
        Ok(Self::new(file, origin))
    }
}

impl JsonlWriter<Stdout> {
    pub fn stdout(origin: impl Into<String>) -> Self {
        Self::new(io::stdout(), origin)
    }
}

impl<W: Write> JsonlWriter<W> {
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

fn record_bytes_for_event(event: &LogEvent, origin: &str) -> io::Result<Vec<u8>> {
    let record = JsonRecord {
        timestamp: event.formatted_timestamp(),
        level: event.level.sink_label(),
        origin,
        service: &event.service,
        message: &event.message,
    };
    let mut buffer =
        serde_json::to_vec(&record).map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    buffer.push(b'\n');
    Ok(buffer)
}

impl<W: Write> EventWriter for JsonlWriter<W> {
    fn write_event(&mut self, event: &LogEvent) -> io::Result<u64> {
        let buffer = record_bytes_for_event(event, &self.origin)?;
        self.out.write_all(&buffer)?;
        self.out.flush()?;
        Ok(buffer.len() as u64)
    }

    fn close(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
