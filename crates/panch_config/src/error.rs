use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors resolving [`crate::Settings`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The TOML config file exists but could not be parsed.
    TomlParse(String),
    /// An environment or config-file override could not be parsed.
    InvalidEnvValue { var: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TomlParse(msg) => write!(f, "failed to parse config file: {msg}"),
            Self::InvalidEnvValue { var, value } => {
                write!(f, "invalid value for {var}: {value:?}")
            }
        }
    }
}

impl Error for ConfigError {}
