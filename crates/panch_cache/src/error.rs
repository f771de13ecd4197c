use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
#[non_exhaustive]
pub enum CacheError {
    Serialization(serde_json::Error),
    Database(sqlx::Error),
    /// A persistent-store operation was attempted with no `DATABASE_URL`
    /// configured; callers should treat this as a cache miss, not a fault.
    NotConfigured,
}

impl Display for CacheError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialization(e) => write!(f, "failed to (de)serialize cached record: {e}"),
            Self::Database(e) => write!(f, "persistent cache store error: {e}"),
            Self::NotConfigured => write!(f, "persistent cache store is not configured"),
        }
    }
}

impl Error for CacheError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialization(e) => Some(e),
            Self::Database(e) => Some(e),
            Self::NotConfigured => None,
        }
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

impl From<sqlx::Error> for CacheError {
    fn from(e: sqlx::Error) -> Self {
        Self::Database(e)
    }
}
