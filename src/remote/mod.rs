// Remote documentation authority module.
// Provides the client and query contract for the documentation service.

use std::future::Future;

use crate::error::Result;
use crate::model::DocumentationSet;

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::WpdClient;
pub use types::RawValueEntry;

/// Query contract the sync service requires of the remote authority.
///
/// The authority is consumed, never implemented, by this crate; the
/// production implementation is [`WpdClient`], and tests substitute doubles.
pub trait DocsAuthority: Send + Sync {
    /// Current freshness token, comparable for equality to a stored token.
    fn current_hash(&self) -> impl Future<Output = Result<String>> + Send;

    /// Full documentation payload: properties mapping plus a fresh token.
    fn fetch_all(&self) -> impl Future<Output = Result<DocumentationSet>> + Send;

    /// Summary markup for one property.
    fn fetch_summary(&self, name: &str) -> impl Future<Output = Result<String>> + Send;

    /// Permitted values for one property, in presentation order, with
    /// unrendered description markup.
    fn fetch_values(&self, name: &str) -> impl Future<Output = Result<Vec<RawValueEntry>>> + Send;

    /// Convert markup to renderable text given a page-title context.
    fn render_markup(
        &self,
        markup: &str,
        page_title: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}
