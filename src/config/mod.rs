//! Configuration loading and validation.

mod loader;
mod types;

pub use loader::{parse_http_url, ConfigError};
pub use types::{Config, EndpointConfig, LoggingConfig, UiConfig};
