use crate::error::ValidationError;
use crate::index::HotelIndex;

/// A lookup request as the serving layer received it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelQuery {
    pub hotel_ids: Vec<String>,
    /// `Some(0)` is treated the same as `None`.
    pub destination_id: Option<u64>,
}

impl HotelQuery {
    #[must_use]
    pub fn new(hotel_ids: Vec<String>, destination_id: Option<u64>) -> Self {
        Self {
            hotel_ids,
            destination_id,
        }
    }

    /// The destination filter, if any. Destination `0` is never a filter.
    #[must_use]
    pub fn destination(&self) -> Option<u64> {
        self.destination_id.filter(|&d| d != 0)
    }

    /// Checks the query against a snapshot.
    ///
    /// Unknown ids next to at least one known id (or a valid destination)
    /// are not an error; they are dropped at lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the query is empty, names an unknown
    /// destination, or names only unknown hotels without a destination.
    pub fn validate(&self, index: &HotelIndex) -> Result<(), ValidationError> {
        let destination = self.destination();

        if self.hotel_ids.is_empty() && destination.is_none() {
            return Err(ValidationError::EmptyQuery);
        }

        if let Some(destination) = destination {
            if !index.contains_destination(destination) {
                return Err(ValidationError::UnknownDestination(destination));
            }
        }

        if destination.is_none()
            && !self.hotel_ids.is_empty()
            && !self.hotel_ids.iter().any(|id| index.contains_hotel(id))
        {
            return Err(ValidationError::UnknownHotels(self.hotel_ids.clone()));
        }

        Ok(())
    }
}
