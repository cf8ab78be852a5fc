use crate::core::config::{TrafficConfig, MAX_DELAY_SECONDS};
use rand::Rng;
use std::time::Duration;

/// Samples the pause between two events uniformly from a closed range.
///
/// Bounds are clamped to `[0, MAX_DELAY_SECONDS]`, so every sample converts to
/// a `Duration`.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    min_seconds: f64,
    max_seconds: f64,
}

impl Pacer {
    pub fn new(min_seconds: f64, max_seconds: f64) -> Self {
        let min_seconds = if min_seconds.is_finite() {
            min_seconds.clamp(0.0, MAX_DELAY_SECONDS)
        } else {
            0.0
        };
        let max_seconds = if max_seconds.is_finite() {
            max_seconds.clamp(min_seconds, MAX_DELAY_SECONDS)
        } else {
            min_seconds
        };
        Self {
            min_seconds,
            max_seconds,
        }
    }

    pub fn from_config(config: &TrafficConfig) -> Self {
        Self::new(config.min_delay_seconds, config.max_delay_seconds)
    }

    /// Expected delay, the midpoint of the range.
    pub fn mean(&self) -> Duration {
        Duration::from_secs_f64((self.min_seconds + self.max_seconds) / 2.0)
    }

    pub fn next_delay(&self, rng: &mut impl Rng) -> Duration {
        if self.max_seconds <= self.min_seconds {
            return Duration::from_secs_f64(self.min_seconds);
        }
        Duration::from_secs_f64(rng.gen_range(self.min_seconds..=self.max_seconds))
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::from_config(&TrafficConfig::default())
    }
}
