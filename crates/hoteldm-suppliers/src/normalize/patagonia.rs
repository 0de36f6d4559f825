use hoteldm_core::{Amenities, Coordinate, Hotel, ImageLink, Images, Location};

use super::{text, text_list};
use crate::types::{PatagoniaHotel, PatagoniaImage};

/// Patagonia sends numeric coordinates, a flat amenity list (general), and
/// room/amenity images keyed by `url`.
pub(super) fn normalize_hotel(raw: PatagoniaHotel) -> Hotel {
    let images = raw.images.unwrap_or_default();
    Hotel {
        id: text(raw.id),
        destination_id: raw.destination.unwrap_or(0),
        name: text(raw.name),
        description: text(raw.info),
        location: Some(Location {
            latitude: raw.lat.map(Coordinate::Numeric),
            longitude: raw.lng.map(Coordinate::Numeric),
            address: text(raw.address),
            city: String::new(),
            country: String::new(),
        }),
        amenities: Some(Amenities {
            general: text_list(raw.amenities),
            room: Vec::new(),
        }),
        images: Some(Images {
            rooms: image_links(images.rooms),
            site: Vec::new(),
            amenities: image_links(images.amenities),
        }),
        booking_conditions: Vec::new(),
    }
}

fn image_links(images: Option<Vec<PatagoniaImage>>) -> Vec<ImageLink> {
    images
        .unwrap_or_default()
        .into_iter()
        .map(|image| ImageLink {
            link: text(image.url),
            description: text(image.description),
        })
        .collect()
}
