//! One refresh cycle: fetch every supplier, normalize, merge, publish.
//!
//! The store's write gate is taken before the first fetch and held until the
//! new snapshot is in place. Any failure drops the guard without touching the
//! index, so the previous snapshot stays live.

use std::sync::Arc;

use chrono::Utc;
use futures::future::try_join_all;
use hoteldm_core::Supplier;
use hoteldm_suppliers::{normalize, SupplierSource};

use crate::error::RefreshError;
use crate::merge::merge_hotels;
use crate::store::HotelStore;

/// How a cycle ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The gate was held by someone else; nothing was fetched.
    Skipped,
    Published { hotels: usize, destinations: usize },
}

pub struct RefreshCoordinator {
    source: Arc<dyn SupplierSource>,
    store: Arc<HotelStore>,
    suppliers: Vec<Supplier>,
}

impl RefreshCoordinator {
    /// `suppliers` is visited in the order given; that order decides merge
    /// precedence.
    #[must_use]
    pub fn new(
        source: Arc<dyn SupplierSource>,
        store: Arc<HotelStore>,
        suppliers: Vec<Supplier>,
    ) -> Self {
        Self {
            source,
            store,
            suppliers,
        }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<HotelStore> {
        &self.store
    }

    /// Runs one cycle.
    ///
    /// # Errors
    ///
    /// Returns [`RefreshError::Fetch`] if any supplier could not be fetched and
    /// [`RefreshError::Decode`] if any payload had the wrong shape. Nothing is
    /// published in either case.
    pub async fn run_cycle(&self) -> Result<RefreshOutcome, RefreshError> {
        let Some(mut index) = self.store.try_write() else {
            tracing::warn!("refresh: gate busy, skipping cycle");
            return Ok(RefreshOutcome::Skipped);
        };

        tracing::info!(suppliers = self.suppliers.len(), "refresh: starting cycle");

        let payloads = try_join_all(self.suppliers.iter().map(|&supplier| async move {
            match self.source.fetch_raw(supplier).await {
                Ok(payload) => Ok((supplier, payload)),
                Err(e) => {
                    tracing::error!(%supplier, error = %e, "refresh: supplier fetch failed");
                    Err(e)
                }
            }
        }))
        .await?;

        let mut records = Vec::new();
        for (supplier, payload) in payloads {
            let hotels = normalize(supplier, payload).inspect_err(|e| {
                tracing::error!(%supplier, error = %e, "refresh: supplier payload rejected");
            })?;
            records.extend(hotels);
        }

        let record_count = records.len();
        index.replace(merge_hotels(records), Utc::now());

        let outcome = RefreshOutcome::Published {
            hotels: index.hotel_count(),
            destinations: index.destination_count(),
        };
        tracing::info!(
            records = record_count,
            hotels = index.hotel_count(),
            destinations = index.destination_count(),
            "refresh: published snapshot"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "refresh_test.rs"]
mod tests;
