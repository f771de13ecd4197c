//! Layered configuration resolver: compiled-in defaults, an optional TOML
//! file, and environment variable overrides.

pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::Settings;
