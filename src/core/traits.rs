use crate::core::event::LogEvent;

/// Infinite stream of events for the generator loop.
///
/// A source never runs dry; the only way it stops is by failing.
pub trait EventSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn next_event(&mut self) -> Result<LogEvent, Self::Error>;
}

/// Append-only record sink. Each record is durable once `write_event` returns.
pub trait EventWriter {
    /// Writes a single event and returns the number of bytes written.
    fn write_event(&mut self, event: &LogEvent) -> std::io::Result<u64>;
    fn close(&mut self) -> std::io::Result<()>;
}
