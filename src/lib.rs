// Client-side cache and sync for WebPlatform CSS property documentation.
// Loads a persisted documentation set, checks its freshness against the
// remote authority, refreshes when stale, and serves property lookups.

pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod remote;
pub mod sync;

pub use config::{FetchStrategy, SyncConfig};
pub use error::{DocsError, Result};
pub use model::{DocumentationSet, PropertyRecord, ValueEntry};
pub use remote::{DocsAuthority, WpdClient};
pub use sync::DocSyncService;
