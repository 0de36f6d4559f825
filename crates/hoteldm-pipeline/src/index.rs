//! The two in-memory indices the serving layer reads from.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use hoteldm_core::Hotel;

/// Hotels keyed by id, plus the destination index derived from them.
///
/// Both maps are only ever replaced together, so a reader holding a shared
/// borrow always sees a consistent pair.
#[derive(Debug, Clone, Default)]
pub struct HotelIndex {
    by_id: HashMap<String, Hotel>,
    /// Hotel ids per destination, sorted. Destination `0` is never present.
    by_destination: HashMap<u64, Vec<String>>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl HotelIndex {
    /// Builds both indices from a merged snapshot.
    #[must_use]
    pub fn from_hotels(hotels: HashMap<String, Hotel>, refreshed_at: DateTime<Utc>) -> Self {
        let mut by_destination: HashMap<u64, Vec<String>> = HashMap::new();
        for hotel in hotels.values() {
            if hotel.destination_id == 0 {
                continue;
            }
            by_destination
                .entry(hotel.destination_id)
                .or_default()
                .push(hotel.id.clone());
        }
        for ids in by_destination.values_mut() {
            ids.sort_unstable();
        }

        Self {
            by_id: hotels,
            by_destination,
            refreshed_at: Some(refreshed_at),
        }
    }

    /// Swaps in a new snapshot. Nothing from the previous one survives.
    pub fn replace(&mut self, hotels: HashMap<String, Hotel>, refreshed_at: DateTime<Utc>) {
        *self = Self::from_hotels(hotels, refreshed_at);
    }

    /// Resolves a lookup against the current snapshot.
    ///
    /// With ids, returns the known ones in request order, restricted to
    /// `destination` when one is given. Without ids, returns every hotel in
    /// `destination` ordered by id. Duplicates are returned once.
    #[must_use]
    pub fn lookup(&self, ids: &[String], destination: Option<u64>) -> Vec<Hotel> {
        let destination = destination.filter(|&d| d != 0);

        if ids.is_empty() {
            let Some(destination) = destination else {
                return Vec::new();
            };
            return self
                .by_destination
                .get(&destination)
                .into_iter()
                .flatten()
                .filter_map(|id| self.by_id.get(id))
                .cloned()
                .collect();
        }

        let mut seen = HashSet::new();
        ids.iter()
            .filter(|id| seen.insert(id.as_str()))
            .filter_map(|id| self.by_id.get(id))
            .filter(|hotel| destination.is_none_or(|d| hotel.destination_id == d))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn contains_hotel(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    #[must_use]
    pub fn contains_destination(&self, destination_id: u64) -> bool {
        self.by_destination.contains_key(&destination_id)
    }

    #[must_use]
    pub fn hotel_count(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn destination_count(&self) -> usize {
        self.by_destination.len()
    }

    /// When the current snapshot was published; `None` before the first refresh.
    #[must_use]
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// Every hotel in the snapshot, ordered by id.
    #[must_use]
    pub fn hotels(&self) -> Vec<&Hotel> {
        let mut hotels: Vec<&Hotel> = self.by_id.values().collect();
        hotels.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        hotels
    }
}
