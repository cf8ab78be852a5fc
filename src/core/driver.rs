//! The generate → write → sleep loop.
//!
//! Without limits the loop only ends when the process is killed or a source or
//! sink fails; every record is flushed by the sink before the next pause, so
//! nothing is left to drain.

use crate::core::metrics::{Counts, Metrics};
use crate::core::pacing::Pacer;
use crate::core::traits::{EventSource, EventWriter};
use rand::Rng;
use std::io;
use std::time::{Duration, Instant};

/// Suspends the loop between events and reports how long it has been running.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
    fn elapsed(&self) -> Duration;
}

/// Real-time sleeper backed by `std::thread::sleep`.
pub struct ThreadSleeper {
    started: Instant,
}

impl ThreadSleeper {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for ThreadSleeper {
    fn default() -> Self {
        Self::new()
    }
}

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Optional bounds for a run. The default is unbounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Limits {
    pub max_events: Option<u64>,
    pub max_duration: Option<Duration>,
}

/// Fault that ends a run.
#[derive(Debug)]
pub enum DriverError {
    Source(Box<dyn std::error::Error + Send + Sync>),
    Sink(io::Error),
}

impl std::fmt::Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverError::Source(err) => write!(f, "event source error: {err}"),
            DriverError::Sink(err) => write!(f, "sink error: {err}"),
        }
    }
}

impl std::error::Error for DriverError {}

impl From<io::Error> for DriverError {
    fn from(err: io::Error) -> Self {
        DriverError::Sink(err)
    }
}

pub struct Driver<S: Sleeper> {
    pacer: Pacer,
    limits: Limits,
    sleeper: S,
    metrics: Metrics,
}

impl<S: Sleeper> Driver<S> {
    pub fn new(pacer: Pacer, limits: Limits, sleeper: S, metrics: Metrics) -> Self {
        Self {
            pacer,
            limits,
            sleeper,
            metrics,
        }
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Runs until a limit is hit and returns the run totals.
    ///
    /// Source and sink errors abort the run immediately.
    pub fn run<E: EventSource>(
        &mut self,
        source: &mut E,
        writer: &mut dyn EventWriter,
        rng: &mut impl Rng,
    ) -> Result<Counts, DriverError> {
        loop {
            if let Some(limit) = self.limits.max_duration {
                if self.sleeper.elapsed() >= limit {
                    break;
                }
            }
            if self.limit_reached() {
                break;
            }

            let event = source
                .next_event()
                .map_err(|err| DriverError::Source(Box::new(err)))?;

            let bytes = writer.write_event(&event)?;
            self.metrics.record(event.level, bytes);
            tracing::trace!(severity = %event.level, service = %event.service, "event written");

            if self.limit_reached() {
                break;
            }
            let delay = self.pacer.next_delay(rng);
            self.sleeper.sleep(delay);
        }

        writer.close()?;
        self.metrics.summary();
        Ok(self.metrics.totals())
    }

    fn limit_reached(&self) -> bool {
        self.limits
            .max_events
            .is_some_and(|max| self.metrics.totals().events >= max)
    }
}
