//! Field-level merge of hotel records that share an identity.
//!
//! [`merge_hotels`] is a left fold in input order: the first record for an
//! id seeds the accumulator and every later record is folded in with
//! [`merge_pair`]. The per-field rules are not associative, so reordering the
//! input can change the result.
//!
//! Amenity lists come out lowercased, trimmed, and deduplicated, with no room
//! amenity repeated under general, whether or not the hotel was merged.

use std::collections::{HashMap, HashSet};

use hoteldm_core::{Amenities, Coordinate, Hotel, ImageLink, Images, Location};

/// Merges records into one hotel per id.
#[must_use]
pub fn merge_hotels(hotels: Vec<Hotel>) -> HashMap<String, Hotel> {
    let mut merged: HashMap<String, Hotel> = HashMap::with_capacity(hotels.len());
    for hotel in hotels {
        match merged.remove(&hotel.id) {
            Some(existing) => {
                let key = hotel.id.clone();
                merged.insert(key, merge_pair(existing, hotel));
            }
            None => {
                merged.insert(hotel.id.clone(), seed(hotel));
            }
        }
    }
    merged
}

/// First record for an id. Only amenities change.
fn seed(hotel: Hotel) -> Hotel {
    Hotel {
        amenities: hotel.amenities.map(normalize_amenities),
        ..hotel
    }
}

/// Combines `existing` (the accumulator) with `new` (the record being folded in).
#[must_use]
pub fn merge_pair(existing: Hotel, new: Hotel) -> Hotel {
    Hotel {
        id: non_empty_or(new.id, existing.id),
        destination_id: if new.destination_id > 0 {
            new.destination_id
        } else {
            existing.destination_id
        },
        name: strictly_longer_or(new.name, existing.name),
        description: strictly_longer_or(new.description, existing.description),
        location: merge_optional(existing.location, new.location, merge_location),
        amenities: match (existing.amenities, new.amenities) {
            (None, None) => None,
            (existing, new) => Some(merge_amenities(
                existing.unwrap_or_default(),
                new.unwrap_or_default(),
            )),
        },
        images: merge_optional(existing.images, new.images, merge_images),
        booking_conditions: if new.booking_conditions.is_empty() {
            existing.booking_conditions
        } else {
            new.booking_conditions
        },
    }
}

/// An absent side yields the present side; two present sides go through `merge`.
fn merge_optional<T>(existing: Option<T>, new: Option<T>, merge: fn(T, T) -> T) -> Option<T> {
    match (existing, new) {
        (Some(existing), Some(new)) => Some(merge(existing, new)),
        (existing, None) => existing,
        (None, new) => new,
    }
}

fn non_empty_or(new: String, existing: String) -> String {
    if new.is_empty() {
        existing
    } else {
        new
    }
}

/// Ties keep `existing`.
fn strictly_longer_or(new: String, existing: String) -> String {
    if new.chars().count() > existing.chars().count() {
        new
    } else {
        existing
    }
}

fn merge_location(existing: Location, new: Location) -> Location {
    let country = if new.country.is_empty() || existing.country.chars().count() == 2 {
        existing.country
    } else {
        new.country
    };
    // Ties on address go to the newer record.
    let address = if new.address.chars().count() < existing.address.chars().count() {
        existing.address
    } else {
        new.address
    };
    Location {
        latitude: numeric_or(new.latitude, existing.latitude),
        longitude: numeric_or(new.longitude, existing.longitude),
        address,
        city: non_empty_or(new.city, existing.city),
        country,
    }
}

fn numeric_or(new: Option<Coordinate>, existing: Option<Coordinate>) -> Option<Coordinate> {
    match new {
        Some(coordinate) if coordinate.is_numeric() => Some(coordinate),
        _ => existing,
    }
}

fn normalize_amenities(amenities: Amenities) -> Amenities {
    merge_amenities(Amenities::default(), amenities)
}

fn merge_amenities(existing: Amenities, new: Amenities) -> Amenities {
    let room = union_normalized(existing.room, new.room);
    let room_set: HashSet<&str> = room.iter().map(String::as_str).collect();
    let general = union_normalized(existing.general, new.general)
        .into_iter()
        .filter(|amenity| !room_set.contains(amenity.as_str()))
        .collect();
    Amenities { general, room }
}

/// Lowercased, trimmed, order-preserving union. Blank entries are dropped.
fn union_normalized(existing: Vec<String>, new: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    existing
        .into_iter()
        .chain(new)
        .map(|amenity| amenity.trim().to_lowercase())
        .filter(|amenity| !amenity.is_empty() && seen.insert(amenity.clone()))
        .collect()
}

fn merge_images(existing: Images, new: Images) -> Images {
    Images {
        rooms: non_empty_images_or(new.rooms, existing.rooms),
        site: non_empty_images_or(new.site, existing.site),
        amenities: non_empty_images_or(new.amenities, existing.amenities),
    }
}

fn non_empty_images_or(new: Vec<ImageLink>, existing: Vec<ImageLink>) -> Vec<ImageLink> {
    if new.is_empty() {
        existing
    } else {
        new
    }
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod tests;
