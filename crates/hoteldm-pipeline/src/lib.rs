//! The reconciliation pipeline: merge, index, gate, and refresh.

pub mod error;
pub mod index;
pub mod merge;
pub mod query;
pub mod refresh;
pub mod store;

pub use error::{QueryError, RefreshError, ValidationError};
pub use index::HotelIndex;
pub use merge::{merge_hotels, merge_pair};
pub use query::HotelQuery;
pub use refresh::{RefreshCoordinator, RefreshOutcome};
pub use store::{HotelStore, StoreStatus};
