// Documentation data model.
// Defines the property documentation set, its freshness token, and key scheme.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Namespace prefix for property keys in the documentation mapping.
pub const PROPERTY_KEY_PREFIX: &str = "css/properties/";

/// Host that relative documentation links resolve against.
pub const DOCS_BASE_URL: &str = "http://docs.webplatform.org";

/// The full collection of property documentation plus its freshness token.
///
/// The token is opaque and always supplied by the remote authority; it is
/// never computed locally. Any change to the properties mapping comes with
/// a matching token update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentationSet {
    /// Opaque freshness token from the remote authority.
    #[serde(rename = "HASH", default)]
    pub hash: String,
    /// When this set was last fetched from the authority, if known.
    #[serde(rename = "FETCHED_AT", default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
    /// Property documentation keyed by qualified key ("css/properties/<name>").
    #[serde(rename = "PROPERTIES", default)]
    pub properties: HashMap<String, PropertyRecord>,
}

impl DocumentationSet {
    /// Look up a record by raw property name.
    pub fn get(&self, name: &str) -> Option<&PropertyRecord> {
        self.properties.get(&property_key(name))
    }

    /// Fill in record names missing from a payload, deriving them from the
    /// qualified keys. Remote bulk payloads and caches written by older
    /// versions key records without repeating the name inside them.
    pub fn backfill_names(&mut self) {
        for (key, record) in &mut self.properties {
            if record.name.is_empty() {
                record.name = property_name(key).to_string();
            }
        }
    }
}

/// One property's documentation. Replaced wholesale on refresh, never
/// patched field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Property name without the key prefix.
    #[serde(rename = "NAME", default)]
    pub name: String,
    /// Summary text; may contain markup.
    #[serde(rename = "SUMMARY")]
    pub summary: String,
    /// Permitted values in the presentation order returned by the source.
    #[serde(rename = "VALUES", default)]
    pub values: Vec<ValueEntry>,
    /// Canonical reference URL.
    #[serde(rename = "URL", default)]
    pub url: String,
}

/// A single permitted value for a property. Identity is positional only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueEntry {
    #[serde(rename = "TITLE")]
    pub title: String,
    #[serde(rename = "DESCRIPTION", default)]
    pub description: String,
}

/// Qualified mapping key for a property name.
pub fn property_key(name: &str) -> String {
    format!("{PROPERTY_KEY_PREFIX}{name}")
}

/// Raw property name for a qualified key. Keys outside the namespace are
/// returned unchanged.
pub fn property_name(key: &str) -> &str {
    key.strip_prefix(PROPERTY_KEY_PREFIX).unwrap_or(key)
}

/// Absolutize a documentation link against the docs host.
/// Spaces become underscores in wiki paths; absolute links pass through.
pub fn absolute_doc_url(href: &str) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }
    let path = href.replace(' ', "_");
    if path.starts_with('/') {
        format!("{DOCS_BASE_URL}{path}")
    } else {
        format!("{DOCS_BASE_URL}/{path}")
    }
}

/// Canonical wiki page URL for a property.
pub fn property_page_url(name: &str) -> String {
    absolute_doc_url(&format!("wiki/{}", property_key(name)))
}
