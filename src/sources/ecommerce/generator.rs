use super::catalog::{Catalog, ServiceModule};
use super::templates::{render, templates_for, SlotValue, TemplateError};
use crate::core::event::{Level, LogEvent};
use crate::core::traits::EventSource;
use chrono::{Local, NaiveDateTime, SubsecRound};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The random choices behind one event, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraw {
    pub module: ServiceModule,
    pub level: Level,
    pub template_index: usize,
    pub values: Vec<SlotValue>,
}

impl EventDraw {
    pub fn template(&self) -> Result<&'static str, TemplateError> {
        templates_for(self.module)
            .get(self.template_index)
            .copied()
            .ok_or(TemplateError::UnknownTemplate {
                module: self.module,
                index: self.template_index,
            })
    }

    pub fn render(&self) -> Result<String, TemplateError> {
        render(self.template()?, &self.values)
    }

    pub fn into_event(self, timestamp: NaiveDateTime) -> Result<LogEvent, TemplateError> {
        let message = self.render()?;
        Ok(LogEvent {
            timestamp,
            level: self.level,
            service: self.module.name().to_string(),
            message,
        })
    }
}

/// Draws a service, level, template and the service's slot values.
///
/// Every draw is independent and uniform.
pub fn draw_event(catalog: &Catalog, rng: &mut impl Rng) -> EventDraw {
    let module = ServiceModule::ALL[rng.gen_range(0..ServiceModule::ALL.len())];
    let level = Level::ALL[rng.gen_range(0..Level::ALL.len())];
    let template_index = rng.gen_range(0..templates_for(module).len());
    let values = resolve_values(module, catalog, rng);
    EventDraw {
        module,
        level,
        template_index,
        values,
    }
}

/// Draws the placeholder values a service's templates expect, in order.
pub fn resolve_values(module: ServiceModule, catalog: &Catalog, rng: &mut impl Rng) -> Vec<SlotValue> {
    let pools = &catalog.pools;
    match module {
        ServiceModule::Search => catalog
            .random_product(rng)
            .map(SlotValue::Text)
            .into_iter()
            .collect(),
        ServiceModule::Payment => {
            let order_id = pools.order_id(rng);
            let amount: f64 = rng.gen_range(20.0..=500.0);
            vec![
                SlotValue::Id(order_id),
                SlotValue::Amount((amount * 100.0).round() as u32),
            ]
        }
        ServiceModule::Order => {
            let order_id = pools.order_id(rng);
            let user_id = pools.user_id(rng);
            vec![SlotValue::Id(order_id), SlotValue::Id(user_id)]
        }
        ServiceModule::Cart => {
            let user_id = pools.user_id(rng);
            let product_id = pools.product_id(rng);
            vec![SlotValue::Id(user_id), SlotValue::Id(product_id)]
        }
        ServiceModule::Inventory => {
            let product_id = pools.product_id(rng);
            let stock = rng.gen_range(0..=100);
            vec![SlotValue::Id(product_id), SlotValue::Count(stock)]
        }
        ServiceModule::Shipping => vec![SlotValue::Id(pools.order_id(rng))],
        ServiceModule::Review => {
            let user_id = pools.user_id(rng);
            let product_id = pools.product_id(rng);
            let rating = rng.gen_range(1..=5);
            vec![
                SlotValue::Id(user_id),
                SlotValue::Id(product_id),
                SlotValue::Count(rating),
            ]
        }
    }
}

/// E-commerce event source over an injected random number generator.
pub struct EcommerceGenerator<R = StdRng> {
    rng: R,
    catalog: Catalog,
}

impl EcommerceGenerator<StdRng> {
    /// Builds a generator over the standard catalog and an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(Catalog::standard(), rng)
    }
}

impl<R: Rng> EcommerceGenerator<R> {
    pub fn with_rng(catalog: Catalog, rng: R) -> Self {
        Self { rng, catalog }
    }

    pub fn draw(&mut self) -> EventDraw {
        draw_event(&self.catalog, &mut self.rng)
    }

    /// Generates one event stamped with the current local time.
    pub fn generate_log(&mut self) -> Result<LogEvent, TemplateError> {
        let now = Local::now().naive_local().trunc_subsecs(0);
        self.generate_at(now)
    }

    pub fn generate_at(&mut self, timestamp: NaiveDateTime) -> Result<LogEvent, TemplateError> {
        self.draw().into_event(timestamp)
    }
}

impl<R: Rng> EventSource for EcommerceGenerator<R> {
    type Error = TemplateError;

    fn next_event(&mut self) -> Result<LogEvent, TemplateError> {
        self.generate_log()
    }
}
