use hoteldm_core::Supplier;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupplierError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate limited by {supplier} (retry after {retry_after_secs}s)")]
    RateLimited {
        supplier: Supplier,
        retry_after_secs: u64,
    },

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("response body from {supplier} is not valid JSON: {source}")]
    InvalidBody {
        supplier: Supplier,
        #[source]
        source: serde_json::Error,
    },

    #[error("payload from {supplier} does not match its record shape: {source}")]
    Decode {
        supplier: Supplier,
        #[source]
        source: serde_json::Error,
    },
}

impl SupplierError {
    /// `true` when the payload arrived but could not be mapped onto the
    /// supplier's record shape. Everything else is a fetch failure.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, SupplierError::Decode { .. })
    }
}
