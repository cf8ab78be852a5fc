//! Shared types for shoplog sources and sinks.

pub mod config;
pub mod driver;
pub mod event;
pub mod metrics;
pub mod pacing;
pub mod traits;
