//! Layered configuration for todos-rs.
//!
//! Settings are loaded from TOML files (`default.toml`, `{env}.toml`,
//! `local.toml`) and overridden by `TODOS_*` environment variables.

mod environment;
mod error;
mod loader;
pub mod settings;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{
    ApplicationConfig, DatabaseConfig, LoggerSettings, ServerConfig, Settings,
};
