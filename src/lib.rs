//! Shoplog library crate.
//!
//! Exposes core types, the e-commerce source, and output formats for the CLI.

pub mod core;
pub mod formats;
pub mod sources;

pub use self::core::config;
pub use self::core::driver;
pub use self::core::event;
pub use self::core::traits;
