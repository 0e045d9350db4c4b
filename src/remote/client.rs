// Documentation authority HTTP client.
// Handles request construction, status checking, and response decoding.

use reqwest::{
    Client, Response, StatusCode,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;

use crate::error::{DocsError, Result};

/// HTTP client for the remote documentation authority.
pub struct WpdClient {
    client: Client,
    base_url: String,
}

impl WpdClient {
    /// Create a new client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("wpdocs"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(DocsError::Remote)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Make a GET request to the authority.
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(DocsError::Remote)?;
        Self::check_response(response).await
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(DocsError::Remote)?;
        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::OK => Ok(response),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(DocsError::NotFound(url))
            }
            status => Err(DocsError::Malformed(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            ))),
        }
    }

    /// Decode a JSON body, reporting shape mismatches distinctly from
    /// transport failures.
    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let url = response.url().to_string();
        response.json().await.map_err(|err| {
            if err.is_decode() {
                DocsError::Malformed(format!("{url}: {err}"))
            } else {
                DocsError::Remote(err)
            }
        })
    }
}
