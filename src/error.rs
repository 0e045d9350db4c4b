// Error types for the documentation cache.
// Handles remote authority errors, cache storage errors, and lookup misses.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("remote request failed: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("unexpected remote response: {0}")]
    Malformed(String),

    #[error("no documentation for: {0}")]
    NotFound(String),

    #[error("cache parse error: {0}")]
    CorruptCache(#[from] serde_json::Error),

    #[error("cache storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("no cache directory available on this platform")]
    NoCacheDir,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DocsError>;
