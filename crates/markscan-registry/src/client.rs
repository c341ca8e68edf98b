//! HTTP client for the trademark-registry search API.
//!
//! Wraps `reqwest` with the registry's header requirements (client-identifier,
//! bearer token, JSON accept) and the page-walking fetch loop. Any non-200
//! page response aborts the whole query with
//! [`RegistryError::UnexpectedStatus`]: there is no retry and no partial
//! result.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::RegistryError;
use crate::types::{RegistryRecord, SearchPage};

const DEFAULT_BASE_URL: &str = "https://api-sandbox.euipo.europa.eu/trademark-search";

/// Client-identifier header required by the registry gateway.
const CLIENT_ID_HEADER: &str = "X-IBM-Client-Id";

/// Records requested per page.
pub const PAGE_SIZE: u32 = 100;

/// Client for the registry's `trademarks` search endpoint.
///
/// Use [`RegistryClient::new`] for production or
/// [`RegistryClient::with_base_url`] to point at a mock server in tests.
pub struct RegistryClient {
    client: Client,
    client_id: String,
    access_token: String,
    endpoint: Url,
}

impl RegistryClient {
    /// Creates a new client pointed at the production search API.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        client_id: &str,
        access_token: &str,
        timeout_secs: u64,
    ) -> Result<Self, RegistryError> {
        Self::with_base_url(client_id, access_token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RegistryError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        client_id: &str,
        access_token: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("markscan/0.1 (trademark-pattern-checks)")
            .build()?;

        let endpoint_raw = format!("{}/trademarks", base_url.trim_end_matches('/'));
        let endpoint =
            Url::parse(&endpoint_raw).map_err(|e| RegistryError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            client_id: client_id.to_owned(),
            access_token: access_token.to_owned(),
            endpoint,
        })
    }

    /// Fetches every page of results for one query, in server order.
    ///
    /// Pages are requested sequentially starting at index 0 until the
    /// server-reported total page count is reached; a missing or zero
    /// `totalPages` means exactly one request is made. When `expected_length`
    /// is set, records whose verbal element does not have exactly that many
    /// characters are dropped as each page arrives.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnexpectedStatus`] if any page returns a non-200
    ///   status; records accumulated from earlier pages are discarded.
    /// - [`RegistryError::Http`] on network failure.
    /// - [`RegistryError::Deserialize`] if a page body is not the expected
    ///   JSON shape.
    pub async fn fetch_all(
        &self,
        query: &str,
        expected_length: Option<usize>,
    ) -> Result<Vec<RegistryRecord>, RegistryError> {
        let mut all_records: Vec<RegistryRecord> = Vec::new();
        let mut page: u32 = 0;

        loop {
            let response = self.fetch_page(query, page).await?;
            tracing::debug!(
                query,
                page,
                total_pages = response.total_pages,
                records = response.trademarks.len(),
                "fetched registry page"
            );

            let mut records = response.trademarks;
            if let Some(expected) = expected_length {
                records.retain(|record| record.verbal_element_len() == expected);
            }
            all_records.extend(records);

            if page + 1 >= response.total_pages {
                break;
            }
            page += 1;
        }

        Ok(all_records)
    }

    /// Requests a single result page.
    async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchPage, RegistryError> {
        let url = self.search_url(query, page);
        let response = self
            .client
            .get(url)
            .header(CLIENT_ID_HEADER, &self.client_id)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.access_token),
            )
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RegistryError::UnexpectedStatus {
                query: query.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RegistryError::Deserialize {
            context: format!("page {page} for query: {query}"),
            source: e,
        })
    }

    /// Builds the page request URL with percent-encoded query parameters.
    fn search_url(&self, query: &str, page: u32) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            pairs.append_pair("size", &PAGE_SIZE.to_string());
            pairs.append_pair("page", &page.to_string());
        }
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
