//! Custom value formatters for an inspector UI.
//!
//! Headers are JsonML: `["tag", {attributes}, child...]`.

use std::any::Any;

use rust_decimal::Decimal;
use serde_json::json;

use crate::environment::Environment;

pub type JsonMl = serde_json::Value;

/// Renders the values it recognizes; ignores everything else.
pub trait DevtoolsFormatter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Header markup for `value`, or `None` when this formatter does not
    /// handle it.
    fn header(&self, value: &dyn Any) -> Option<JsonMl>;

    /// Whether `value` can be expanded.
    fn has_body(&self, _value: &dyn Any) -> bool {
        false
    }
}

/// Shows a decimal as its plain string instead of its internal fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalFormatter;

impl DevtoolsFormatter for DecimalFormatter {
    fn name(&self) -> &'static str {
        "decimal"
    }

    fn header(&self, value: &dyn Any) -> Option<JsonMl> {
        let decimal = value.downcast_ref::<Decimal>()?;
        Some(json!(["div", {}, decimal.normalize().to_string()]))
    }
}

/// Ordered formatter list; the first formatter returning a header wins.
#[derive(Default)]
pub struct FormatterRegistry {
    formatters: Vec<Box<dyn DevtoolsFormatter>>,
}

impl FormatterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, formatter: F)
    where
        F: DevtoolsFormatter + 'static,
    {
        self.formatters.push(Box::new(formatter));
    }

    /// Drop every installed formatter and install `formatters` instead.
    pub fn replace(&mut self, formatters: Vec<Box<dyn DevtoolsFormatter>>) {
        self.formatters = formatters;
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }

    pub fn header(&self, value: &dyn Any) -> Option<JsonMl> {
        self.formatters.iter().find_map(|f| f.header(value))
    }

    /// Body availability as reported by the formatter that renders the header.
    pub fn has_body(&self, value: &dyn Any) -> bool {
        self.formatters
            .iter()
            .find(|f| f.header(value).is_some())
            .is_some_and(|f| f.has_body(value))
    }
}

impl core::fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.formatters.iter().map(|fmt| fmt.name()))
            .finish()
    }
}

/// Install the built-in formatters when running in development.
///
/// Replaces whatever `registry` held. Outside development this does nothing
/// and returns `false`.
pub fn setup_formatter(registry: &mut FormatterRegistry, environment: Environment) -> bool {
    if !environment.is_development() {
        return false;
    }

    registry.replace(vec![Box::new(DecimalFormatter)]);
    tracing::debug!(formatters = ?registry, "devtools formatters installed");
    true
}
