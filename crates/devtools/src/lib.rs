//! `acctrules-devtools`
//!
//! Development-only display hooks: a registry of formatters that render
//! values (currently `rust_decimal::Decimal`) as JsonML headers for an
//! inspector UI. Nothing here is installed outside development.

pub mod environment;
pub mod formatter;

pub use environment::{Environment, UnknownEnvironment};
pub use formatter::{DecimalFormatter, DevtoolsFormatter, FormatterRegistry, JsonMl, setup_formatter};
