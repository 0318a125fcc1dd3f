/// An HTTP round-trip to Vault that could not be completed.
///
/// The driver treats every variant as fatal for the whole run. Status codes
/// and body contents are never reported through this type.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("reading response body from {url} failed")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl TransportError {
    pub fn url(&self) -> &str {
        match self {
            TransportError::Request { url, .. } | TransportError::Body { url, .. } => url,
        }
    }
}
