use crate::core::event::Level;
use std::time::{Duration, Instant};

/// Periodic throughput reporter for the generator loop.
pub struct Metrics {
    interval: Duration,
    last_report: Instant,
    window: Counts,
    total: Counts,
}

/// Event, byte and per-level counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub events: u64,
    pub bytes: u64,
    pub info: u64,
    pub warn: u64,
    pub error: u64,
}

impl Counts {
    fn add(&mut self, level: Level, bytes: u64) {
        self.events += 1;
        self.bytes += bytes;
        match level {
            Level::Info => self.info += 1,
            Level::Warn => self.warn += 1,
            Level::Error => self.error += 1,
        }
    }
}

impl Metrics {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_report: Instant::now(),
            window: Counts::default(),
            total: Counts::default(),
        }
    }

    pub fn record(&mut self, level: Level, bytes: u64) {
        self.window.add(level, bytes);
        self.total.add(level, bytes);

        if self.interval.is_zero() {
            return;
        }
        let elapsed = self.last_report.elapsed();
        if elapsed >= self.interval {
            let secs = elapsed.as_secs_f64().max(0.000_1);
            tracing::info!(
                events_per_sec = self.window.events as f64 / secs,
                bytes_per_sec = self.window.bytes as f64 / secs,
                info = self.window.info,
                warn = self.window.warn,
                error = self.window.error,
                "metrics"
            );
            self.last_report = Instant::now();
            self.window = Counts::default();
        }
    }

    pub fn totals(&self) -> Counts {
        self.total
    }

    /// Logs the run-wide totals.
    pub fn summary(&self) {
        let total = self.total;
        tracing::info!(
            events = total.events,
            bytes = total.bytes,
            info = total.info,
            warn = total.warn,
            error = total.error,
            "generation finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_track_levels_and_bytes() {
        let mut metrics = Metrics::new(Duration::ZERO);
        metrics.record(Level::Info, 10);
        metrics.record(Level::Warn, 20);
        metrics.record(Level::Warn, 5);
        metrics.record(Level::Error, 1);

        let totals = metrics.totals();
        assert_eq!(totals.events, 4);
        assert_eq!(totals.bytes, 36);
        assert_eq!((totals.info, totals.warn, totals.error), (1, 2, 1));
    }
}
