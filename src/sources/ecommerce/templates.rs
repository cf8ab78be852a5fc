use super::catalog::ServiceModule;
use std::fmt;

/// Positional placeholder marker inside a message template.
pub const PLACEHOLDER: &str = "{}";

/// A value substituted into one template placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotValue {
    /// Free text such as a product name.
    Text(&'static str),
    /// User, order or product identifier.
    Id(u32),
    /// Monetary amount in cents, rendered with two decimals.
    Amount(u32),
    /// Plain integer such as a stock level or a rating.
    Count(u32),
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Text(text) => f.write_str(text),
            SlotValue::Id(id) => write!(f, "{id}"),
            SlotValue::Amount(cents) => write!(f, "{}.{:02}", cents / 100, cents % 100),
            SlotValue::Count(count) => write!(f, "{count}"),
        }
    }
}

/// Raised when a draw cannot be rendered into a complete message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    UnknownTemplate {
        module: ServiceModule,
        index: usize,
    },
    MissingValues {
        template: &'static str,
        placeholders: usize,
        supplied: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnknownTemplate { module, index } => {
                write!(f, "{module} has no template #{index}")
            }
            TemplateError::MissingValues {
                template,
                placeholders,
                supplied,
            } => write!(
                f,
                "template {template:?} needs {placeholders} values, got {supplied}"
            ),
        }
    }
}

impl std::error::Error for TemplateError {}

/// Message templates owned by each service, in declaration order.
pub fn templates_for(module: ServiceModule) -> &'static [&'static str] {
    match module {
        ServiceModule::Search => &[
            "Product search for query '{}'",
            "Product search timeout for query '{}'",
        ],
        ServiceModule::Payment => &[
            "Payment processed successfully for order ID #{} amount: ${}",
            "Payment failed for order ID #{} amount: ${}",
        ],
        ServiceModule::Order => &[
            "Order #{} created for user ID #{}",
            "Order #{} canceled by user ID #{}",
            "Order #{} shipped to user ID #{}",
        ],
        ServiceModule::Cart => &[
            "User ID #{} added product ID #{} to cart",
            "User ID #{} failed to add product ID #{} to cart, out of stock",
        ],
        ServiceModule::Inventory => &[
            "Stock updated for product ID #{}: new stock {} units",
            "Low stock warning for product ID #{}: only {} units left",
        ],
        ServiceModule::Shipping => &[
            "Shipping label generated for order ID #{}",
            "Shipping delay for order ID #{}",
        ],
        ServiceModule::Review => &[
            "User ID #{} submitted a review for product ID #{}: rating {} stars",
            "User ID #{} reported an issue with review on product ID #{}",
        ],
    }
}

pub fn placeholder_count(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}

/// Substitutes `values` into the template's placeholders left to right.
///
/// Values beyond the placeholder count are ignored; too few values is an error
/// so a line is never emitted with a literal `{}` left in it.
pub fn render(template: &'static str, values: &[SlotValue]) -> Result<String, TemplateError> {
    let placeholders = placeholder_count(template);
    if values.len() < placeholders {
        return Err(TemplateError::MissingValues {
            template,
            placeholders,
            supplied: values.len(),
        });
    }

    let mut message = String::with_capacity(template.len() + 16);
    let mut rest = template;
    let mut values = values.iter();
    while let Some(pos) = rest.find(PLACEHOLDER) {
        message.push_str(&rest[..pos]);
        if let Some(value) = values.next() {
            message.push_str(&value.to_string());
        }
        rest = &rest[pos + PLACEHOLDER.len()..];
    }
    message.push_str(rest);
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_owns_two_or_three_templates() {
        for module in ServiceModule::ALL {
            let count = templates_for(module).len();
            assert!((2..=3).contains(&count), "{module} has {count} templates");
        }
    }

    #[test]
    fn renders_payment_template() {
        let template = templates_for(ServiceModule::Payment)[0];
        let message = render(template, &[SlotValue::Id(2001), SlotValue::Amount(12345)])
            .expect("rendered");
        assert_eq!(
            message,
            "Payment processed successfully for order ID #2001 amount: $123.45"
        );
    }

    #[test]
    fn amount_keeps_two_decimals() {
        assert_eq!(SlotValue::Amount(2000).to_string(), "20.00");
        assert_eq!(SlotValue::Amount(12340).to_string(), "123.40");
        assert_eq!(SlotValue::Amount(50000).to_string(), "500.00");
        assert_eq!(SlotValue::Amount(2005).to_string(), "20.05");
    }

    #[test]
    fn extra_values_are_ignored() {
        let template = templates_for(ServiceModule::Review)[1];
        let message = render(
            template,
            &[SlotValue::Id(1001), SlotValue::Id(3001), SlotValue::Count(4)],
        )
        .expect("rendered");
        assert_eq!(
            message,
            "User ID #1001 reported an issue with review on product ID #3001"
        );
    }

    #[test]
    fn missing_values_are_rejected() {
        let template = templates_for(ServiceModule::Order)[0];
        let err = render(template, &[SlotValue::Id(2001)]).expect_err("too few values");
        assert_eq!(
            err,
            TemplateError::MissingValues {
                template,
                placeholders: 2,
                supplied: 1,
            }
        );
    }

    #[test]
    fn text_values_containing_braces_are_not_rescanned() {
        let message = render("query '{}' done", &[SlotValue::Text("{}")]).expect("rendered");
        assert_eq!(message, "query '{}' done");
    }
}
