use hoteldm_core::{Amenities, Hotel, Location};

use super::{text, text_list};
use crate::types::AcmeHotel;

/// Acme has flat location fields and a single `Facilities` list, which maps
/// to general amenities. It carries no images or booking conditions.
pub(super) fn normalize_hotel(raw: AcmeHotel) -> Hotel {
    Hotel {
        id: text(raw.id),
        destination_id: raw.destination_id.unwrap_or(0),
        name: text(raw.name),
        description: text(raw.description),
        location: Some(Location {
            latitude: raw.latitude,
            longitude: raw.longitude,
            address: text(raw.address),
            city: text(raw.city),
            country: text(raw.country),
        }),
        amenities: Some(Amenities {
            general: text_list(raw.facilities),
            room: Vec::new(),
        }),
        images: None,
        booking_conditions: Vec::new(),
    }
}
