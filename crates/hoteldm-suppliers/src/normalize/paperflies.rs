use hoteldm_core::{Amenities, Hotel, ImageLink, Images, Location};

use super::{text, text_list};
use crate::types::{PaperfliesHotel, PaperfliesImage};

/// Paperflies is the only supplier with split general/room amenities, site
/// images, and booking conditions. It has no coordinates or city.
pub(super) fn normalize_hotel(raw: PaperfliesHotel) -> Hotel {
    let location = raw.location.unwrap_or_default();
    let amenities = raw.amenities.unwrap_or_default();
    let images = raw.images.unwrap_or_default();
    Hotel {
        id: text(raw.hotel_id),
        destination_id: raw.destination_id.unwrap_or(0),
        name: text(raw.hotel_name),
        description: text(raw.details),
        location: Some(Location {
            latitude: None,
            longitude: None,
            address: text(location.address),
            city: String::new(),
            country: text(location.country),
        }),
        amenities: Some(Amenities {
            general: text_list(amenities.general),
            room: text_list(amenities.room),
        }),
        images: Some(Images {
            rooms: image_links(images.rooms),
            site: image_links(images.site),
            amenities: Vec::new(),
        }),
        booking_conditions: text_list(raw.booking_conditions),
    }
}

fn image_links(images: Option<Vec<PaperfliesImage>>) -> Vec<ImageLink> {
    images
        .unwrap_or_default()
        .into_iter()
        .map(|image| ImageLink {
            link: text(image.link),
            description: text(image.caption),
        })
        .collect()
}
