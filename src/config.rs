// Sync service configuration.
// Selects the fetch strategy, remote base URL, and cache location override.

use std::path::PathBuf;

use crate::error::{DocsError, Result};

/// Default remote authority base URL (documentation proxy).
pub const DEFAULT_BASE_URL: &str = "http://ec2-184-73-148-225.compute-1.amazonaws.com";

/// Unit of fetch used when the local documentation is stale or missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStrategy {
    /// One remote fetch returns the entire property set.
    #[default]
    Bulk,
    /// Each lookup fans out per-property sub-queries and merges the result.
    PerProperty,
}

impl FetchStrategy {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "bulk" => Ok(FetchStrategy::Bulk),
            "per-property" | "per_property" => Ok(FetchStrategy::PerProperty),
            other => Err(DocsError::Other(format!(
                "unknown fetch strategy: {other} (expected \"bulk\" or \"per-property\")"
            ))),
        }
    }
}

/// Configuration for the documentation sync service.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Base URL of the remote documentation authority.
    pub base_url: String,
    /// Unit of fetch on staleness.
    pub strategy: FetchStrategy,
    /// Cache directory override; platform default when unset.
    pub cache_dir: Option<PathBuf>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            strategy: FetchStrategy::default(),
            cache_dir: None,
        }
    }
}

impl SyncConfig {
    /// Build a configuration from `WPDOCS_BASE_URL`, `WPDOCS_STRATEGY`, and
    /// `WPDOCS_CACHE_DIR`, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("WPDOCS_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(strategy) = std::env::var("WPDOCS_STRATEGY") {
            config.strategy = FetchStrategy::parse(&strategy)?;
        }
        if let Ok(dir) = std::env::var("WPDOCS_CACHE_DIR") {
            config.cache_dir = Some(PathBuf::from(dir));
        }
        Ok(config)
    }
}
