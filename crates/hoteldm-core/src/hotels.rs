//! Canonical hotel model shared by the normalizers, the merge engine, and the
//! serving layer.
//!
//! Every supplier payload is mapped into [`Hotel`]. Optional sections
//! (`location`, `amenities`, `images`) stay `None` when a supplier has no
//! notion of them at all, which the merge rules treat differently from an
//! empty section.

use serde::{Deserialize, Serialize};

/// A hotel record in supplier-agnostic form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hotel {
    /// Identity key shared by every supplier describing the same hotel.
    pub id: String,
    /// Destination the hotel belongs to. `0` means unknown.
    pub destination_id: u64,
    pub name: String,
    pub description: String,
    pub location: Option<Location>,
    pub amenities: Option<Amenities>,
    pub images: Option<Images>,
    pub booking_conditions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Kept exactly as the supplier sent it; see [`Coordinate`].
    pub latitude: Option<Coordinate>,
    pub longitude: Option<Coordinate>,
    pub address: String,
    pub city: String,
    pub country: String,
}

/// A latitude or longitude as a supplier provided it.
///
/// Some suppliers send coordinates as JSON numbers, others as strings (often
/// empty). Only [`Coordinate::Numeric`] is ever handed to numeric consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Numeric(f64),
    Text(String),
}

impl Coordinate {
    /// Returns the numeric value, or `None` for the text form.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Coordinate::Numeric(value) => Some(*value),
            Coordinate::Text(_) => None,
        }
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Coordinate::Numeric(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Amenities {
    pub general: Vec<String>,
    pub room: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Images {
    pub rooms: Vec<ImageLink>,
    pub site: Vec<ImageLink>,
    pub amenities: Vec<ImageLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageLink {
    pub link: String,
    pub description: String,
}
