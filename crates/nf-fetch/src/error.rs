//! Fetch errors

/// Error type for downloads.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("Unsupported content encoding '{0}'")]
    UnsupportedEncoding(String),
    #[error("Failed to decode body of {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
