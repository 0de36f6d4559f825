//! The non-blocking gate around the live [`HotelIndex`].
//!
//! Neither side ever waits: a refresh that finds readers active is skipped,
//! and a query that finds a refresh in progress is answered with
//! [`QueryError::Unavailable`].

use chrono::{DateTime, Utc};
use hoteldm_core::Hotel;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::QueryError;
use crate::index::HotelIndex;
use crate::query::HotelQuery;

#[derive(Debug, Default)]
pub struct HotelStore {
    index: RwLock<HotelIndex>,
}

/// Point-in-time view of the store for health reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreStatus {
    /// A refresh holds the gate.
    Refreshing,
    Ready {
        hotels: usize,
        destinations: usize,
        refreshed_at: Option<DateTime<Utc>>,
    },
}

impl HotelStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_index(index: HotelIndex) -> Self {
        Self {
            index: RwLock::new(index),
        }
    }

    /// Takes the gate shared, or returns `None` while a refresh holds it.
    pub fn try_read(&self) -> Option<RwLockReadGuard<'_, HotelIndex>> {
        self.index.try_read().ok()
    }

    /// Takes the gate exclusively, or returns `None` if anyone holds it.
    pub fn try_write(&self) -> Option<RwLockWriteGuard<'_, HotelIndex>> {
        self.index.try_write().ok()
    }

    /// Validates `query` and resolves it against one consistent snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Unavailable`] while a refresh holds the gate, or
    /// [`QueryError::Validation`] when the query is rejected.
    pub fn get_hotels(&self, query: &HotelQuery) -> Result<Vec<Hotel>, QueryError> {
        let Some(index) = self.try_read() else {
            tracing::warn!("query rejected: refresh in progress");
            return Err(QueryError::Unavailable);
        };

        if let Err(e) = query.validate(&index) {
            tracing::warn!(
                error = %e,
                hotel_ids = query.hotel_ids.len(),
                destination_id = ?query.destination_id,
                "query failed validation"
            );
            return Err(e.into());
        }

        Ok(index.lookup(&query.hotel_ids, query.destination()))
    }

    /// Every hotel in the live snapshot, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Unavailable`] while a refresh holds the gate.
    pub fn all_hotels(&self) -> Result<Vec<Hotel>, QueryError> {
        let index = self.try_read().ok_or(QueryError::Unavailable)?;
        Ok(index.hotels().into_iter().cloned().collect())
    }

    #[must_use]
    pub fn status(&self) -> StoreStatus {
        match self.try_read() {
            Some(index) => StoreStatus::Ready {
                hotels: index.hotel_count(),
                destinations: index.destination_count(),
                refreshed_at: index.refreshed_at(),
            },
            None => StoreStatus::Refreshing,
        }
    }
}
