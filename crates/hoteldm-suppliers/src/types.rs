//! Raw record shapes, one per supplier.
//!
//! Each supplier payload is a JSON array of these records. Fields are
//! modelled as `Option` because suppliers send `null` or omit keys freely;
//! only a structural mismatch (the payload is not an array, a string where a
//! number belongs) fails decoding.
//!
//! ### Coordinates
//! Acme sends `Latitude`/`Longitude` as numbers, as empty strings, or as
//! `null`, so they decode into [`Coordinate`] untouched. Patagonia always
//! sends numbers or `null`.

use hoteldm_core::Coordinate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AcmeHotel {
    #[serde(rename = "Id", default)]
    pub id: Option<String>,
    #[serde(rename = "DestinationId", default)]
    pub destination_id: Option<u64>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Latitude", default)]
    pub latitude: Option<Coordinate>,
    #[serde(rename = "Longitude", default)]
    pub longitude: Option<Coordinate>,
    #[serde(rename = "Address", default)]
    pub address: Option<String>,
    #[serde(rename = "City", default)]
    pub city: Option<String>,
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Facilities", default)]
    pub facilities: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct PatagoniaHotel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub destination: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<PatagoniaImages>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatagoniaImages {
    #[serde(default)]
    pub rooms: Option<Vec<PatagoniaImage>>,
    #[serde(default)]
    pub amenities: Option<Vec<PatagoniaImage>>,
}

#[derive(Debug, Deserialize)]
pub struct PatagoniaImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PaperfliesHotel {
    #[serde(default)]
    pub hotel_id: Option<String>,
    #[serde(default)]
    pub destination_id: Option<u64>,
    #[serde(default)]
    pub hotel_name: Option<String>,
    #[serde(default)]
    pub location: Option<PaperfliesLocation>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub amenities: Option<PaperfliesAmenities>,
    #[serde(default)]
    pub images: Option<PaperfliesImages>,
    #[serde(default)]
    pub booking_conditions: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PaperfliesLocation {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PaperfliesAmenities {
    #[serde(default)]
    pub general: Option<Vec<String>>,
    #[serde(default)]
    pub room: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PaperfliesImages {
    #[serde(default)]
    pub rooms: Option<Vec<PaperfliesImage>>,
    #[serde(default)]
    pub site: Option<Vec<PaperfliesImage>>,
}

#[derive(Debug, Deserialize)]
pub struct PaperfliesImage {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}
