use hoteldm_suppliers::SupplierError;
use thiserror::Error;

/// Why a refresh cycle was abandoned without publishing.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("fetch failed: {0}")]
    Fetch(#[source] SupplierError),

    #[error("decode failed: {0}")]
    Decode(#[source] SupplierError),
}

impl From<SupplierError> for RefreshError {
    fn from(err: SupplierError) -> Self {
        if err.is_decode() {
            RefreshError::Decode(err)
        } else {
            RefreshError::Fetch(err)
        }
    }
}

/// A query rejected before it reached the index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no request parameters were specified")]
    EmptyQuery,

    #[error("destination ID '{0}' does not exist")]
    UnknownDestination(u64),

    #[error("none of the requested hotel IDs exist: {}", .0.join(", "))]
    UnknownHotels(Vec<String>),
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("service temporarily unavailable: data update in progress")]
    Unavailable,
}
