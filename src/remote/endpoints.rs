// Documentation authority endpoint functions.
// Implements the query contract against the documentation proxy's REST routes.

use serde::Deserialize;

use crate::error::Result;
use crate::model::DocumentationSet;

use super::DocsAuthority;
use super::client::WpdClient;
use super::types::RawValueEntry;

/// Response wrapper for the property summary query.
#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(rename = "SUMMARY")]
    summary: String,
}

/// Response wrapper for the values-list query.
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(rename = "VALUES", default)]
    values: Vec<RawValueEntry>,
}

/// Response wrapper for the markup render query.
#[derive(Debug, Deserialize)]
struct RenderedTextResponse {
    #[serde(rename = "TEXT")]
    text: String,
}

impl DocsAuthority for WpdClient {
    /// Get the current freshness token for the property set.
    ///
    /// Served by the proxy as a plain-text sidecar of the bulk payload.
    async fn current_hash(&self) -> Result<String> {
        let response = self.get("/css.json.hash").await?;
        let hash = response.text().await?;
        Ok(hash.trim().to_string())
    }

    /// Fetch the entire property documentation set.
    async fn fetch_all(&self) -> Result<DocumentationSet> {
        let response = self.get("/css.json").await?;
        let set: DocumentationSet = Self::parse_json(response).await?;
        Ok(set)
    }

    /// Fetch summary markup for a property.
    async fn fetch_summary(&self, name: &str) -> Result<String> {
        let response = self
            .get(&format!("/css/properties/{name}/summary.json"))
            .await?;
        let wrapper: SummaryResponse = Self::parse_json(response).await?;
        Ok(wrapper.summary)
    }

    /// Fetch the permitted values for a property, in presentation order.
    async fn fetch_values(&self, name: &str) -> Result<Vec<RawValueEntry>> {
        let response = self
            .get(&format!("/css/properties/{name}/values.json"))
            .await?;
        let wrapper: ValuesResponse = Self::parse_json(response).await?;
        Ok(wrapper.values)
    }

    /// Convert markup to renderable text in the context of a page title.
    async fn render_markup(&self, markup: &str, page_title: &str) -> Result<String> {
        let params = [("text", markup), ("title", page_title)];
        let response = self.get_with_params("/render.json", &params).await?;
        let wrapper: RenderedTextResponse = Self::parse_json(response).await?;
        Ok(wrapper.text)
    }
}
