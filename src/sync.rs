// Documentation sync service.
// Decides per session whether persisted documentation is usable or must be
// refreshed, and serves property lookups from the resolved set.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use futures::future::{try_join, try_join_all};
use tokio::sync::{Mutex, OnceCell, RwLock};

use crate::cache::DocStore;
use crate::config::{FetchStrategy, SyncConfig};
use crate::error::Result;
use crate::model::{
    DocumentationSet, PropertyRecord, ValueEntry, property_key, property_page_url,
};
use crate::remote::{DocsAuthority, WpdClient};

/// Resolved session state: the held set, its staleness, and which keys have
/// been refetched this session (per-property strategy only).
struct SyncState {
    docs: Arc<DocumentationSet>,
    stale: bool,
    remote_hash: Option<String>,
    refreshed: HashSet<String>,
}

impl Default for SyncState {
    fn default() -> Self {
        Self {
            docs: Arc::new(DocumentationSet::default()),
            stale: true,
            remote_hash: None,
            refreshed: HashSet::new(),
        }
    }
}

/// Fetch/merge orchestrator over a [`DocStore`] and a remote authority.
///
/// On first access the service loads the store, asks the authority for the
/// current freshness token, and refreshes if needed. Storage and remote
/// failures degrade to the last known good data; they are logged, never
/// surfaced to the caller. Lookups during an in-flight refresh await the
/// same refresh rather than starting a duplicate.
pub struct DocSyncService<A: DocsAuthority> {
    authority: A,
    store: DocStore,
    strategy: FetchStrategy,
    init: OnceCell<()>,
    state: RwLock<SyncState>,
    fetch_lock: Mutex<()>,
}

impl DocSyncService<WpdClient> {
    /// Create a service backed by the production authority client.
    pub fn new(config: SyncConfig) -> Result<Self> {
        let authority = WpdClient::new(&config.base_url)?;
        Self::with_authority(config, authority)
    }
}

impl<A: DocsAuthority> DocSyncService<A> {
    /// Create a service with an injected authority (test doubles included).
    pub fn with_authority(config: SyncConfig, authority: A) -> Result<Self> {
        let store = match &config.cache_dir {
            Some(dir) => DocStore::new(dir.join(crate::cache::paths::PROPS_CACHE_FILE)),
            None => DocStore::at_default_location()?,
        };
        Ok(Self {
            authority,
            store,
            strategy: config.strategy,
            init: OnceCell::new(),
            state: RwLock::new(SyncState::default()),
            fetch_lock: Mutex::new(()),
        })
    }

    /// Look up documentation for a property name.
    ///
    /// Absence is a normal outcome. A refresh failure with no prior data is
    /// indistinguishable from a property that does not exist.
    pub async fn lookup(&self, name: &str) -> Option<PropertyRecord> {
        self.ensure_ready().await;
        match self.strategy {
            FetchStrategy::Bulk => self.lookup_held(name).await,
            FetchStrategy::PerProperty => self.lookup_per_property(name).await,
        }
    }

    /// Run the load-then-freshness-check step exactly once per session.
    async fn ensure_ready(&self) {
        self.init.get_or_init(|| self.initialize()).await;
    }

    async fn initialize(&self) {
        let loaded = match self.store.load().await {
            Ok(Some(mut set)) => {
                set.backfill_names();
                tracing::debug!(
                    "loaded documentation cache with {} properties",
                    set.properties.len()
                );
                Some(set)
            }
            Ok(None) => {
                tracing::debug!(
                    "documentation cache not found at {}",
                    self.store.path().display()
                );
                None
            }
            Err(err) => {
                tracing::warn!("failed to read documentation cache, refetching: {err}");
                None
            }
        };

        let remote_hash = match self.authority.current_hash().await {
            Ok(hash) => Some(hash),
            Err(err) => {
                tracing::warn!("freshness check failed: {err}");
                None
            }
        };

        let mut stale = match (&loaded, &remote_hash) {
            (Some(set), Some(hash)) => set.hash != *hash,
            // Authority unreachable but local data exists: serve it rather
            // than forcing a refetch that cannot succeed.
            (Some(_), None) => false,
            (None, _) => true,
        };

        let mut docs = loaded
            .map(Arc::new)
            .unwrap_or_else(|| Arc::new(DocumentationSet::default()));

        if stale && self.strategy == FetchStrategy::Bulk {
            match self.authority.fetch_all().await {
                Ok(mut set) => {
                    set.backfill_names();
                    set.fetched_at = Some(Utc::now());
                    if let Err(err) = self.store.save(&set).await {
                        tracing::warn!("failed to persist documentation cache: {err}");
                    }
                    tracing::debug!("refreshed {} properties from server", set.properties.len());
                    docs = Arc::new(set);
                    stale = false;
                }
                Err(err) => {
                    tracing::warn!("documentation refresh failed, serving last known data: {err}");
                }
            }
        }

        let mut state = self.state.write().await;
        *state = SyncState {
            docs,
            stale,
            remote_hash,
            refreshed: HashSet::new(),
        };
    }

    /// Serve a record from the held set without touching the network.
    async fn lookup_held(&self, name: &str) -> Option<PropertyRecord> {
        let state = self.state.read().await;
        state.docs.get(name).cloned()
    }

    /// Per-property strategy: serve held data when usable, otherwise fan
    /// out the sub-queries, merge the record into the held set, and persist.
    async fn lookup_per_property(&self, name: &str) -> Option<PropertyRecord> {
        let key = property_key(name);

        {
            let state = self.state.read().await;
            if !state.stale || state.refreshed.contains(&key) {
                if let Some(record) = state.docs.properties.get(&key) {
                    return Some(record.clone());
                }
            }
        }

        // One in-flight fetch at a time; a concurrent lookup for the same
        // key reuses the merged result instead of duplicating the queries.
        let _guard = self.fetch_lock.lock().await;
        {
            let state = self.state.read().await;
            if state.refreshed.contains(&key) {
                return state.docs.properties.get(&key).cloned();
            }
        }

        match self.fetch_property(name).await {
            Ok(record) => {
                let snapshot = {
                    let mut state = self.state.write().await;
                    let mut docs = (*state.docs).clone();
                    docs.properties.insert(key.clone(), record.clone());
                    if let Some(hash) = &state.remote_hash {
                        docs.hash = hash.clone();
                    }
                    docs.fetched_at = Some(Utc::now());
                    state.docs = Arc::new(docs);
                    state.refreshed.insert(key);
                    Arc::clone(&state.docs)
                };
                if let Err(err) = self.store.save(&snapshot).await {
                    tracing::warn!("failed to persist documentation cache: {err}");
                }
                Some(record)
            }
            Err(err) => {
                tracing::warn!("refresh of '{name}' failed, serving cached entry if any: {err}");
                let state = self.state.read().await;
                state.docs.properties.get(&key).cloned()
            }
        }
    }

    /// Fan out the per-property sub-queries and join them into one record.
    ///
    /// Value order follows the values-list response, not the completion
    /// order of the description conversions. Any sub-query failure fails
    /// the whole fetch; no partial record is produced.
    async fn fetch_property(&self, name: &str) -> Result<PropertyRecord> {
        let page = property_key(name);

        let (summary_markup, raw_values) = try_join(
            self.authority.fetch_summary(name),
            self.authority.fetch_values(name),
        )
        .await?;

        let render_summary = self.authority.render_markup(&summary_markup, &page);
        let render_descriptions = try_join_all(
            raw_values
                .iter()
                .map(|value| self.authority.render_markup(&value.description, &page)),
        );
        let (summary, descriptions) = try_join(render_summary, render_descriptions).await?;

        let values = raw_values
            .into_iter()
            .zip(descriptions)
            .map(|(value, description)| ValueEntry {
                title: value.title,
                description,
            })
            .collect();

        Ok(PropertyRecord {
            name: name.to_string(),
            summary,
            values,
            url: property_page_url(name),
        })
    }
}
