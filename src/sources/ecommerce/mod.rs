//! Simulated e-commerce platform: search, payment, order, cart, inventory,
//! shipping and review services.

pub mod catalog;
pub mod generator;
pub mod templates;

pub use catalog::{Catalog, ServiceModule};
pub use generator::{draw_event, EcommerceGenerator, EventDraw};
pub use templates::{SlotValue, TemplateError};
