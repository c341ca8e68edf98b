use thiserror::Error;

/// Errors returned by the trademark-registry search client.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A page request returned a non-200 status. The whole pattern's fetch is
    /// aborted; no partial results are returned.
    #[error("registry returned status {status} for query: {query}")]
    UnexpectedStatus { query: String, status: u16 },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL cannot be parsed.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
