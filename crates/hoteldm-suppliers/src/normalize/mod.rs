//! Normalization from raw supplier payloads to canonical [`Hotel`] records.
//!
//! Each supplier has its own module; [`normalize`] dispatches on the closed
//! [`Supplier`] set. Normalizers only reshape and trim. They never coerce
//! coordinate types and never merge.

mod acme;
mod paperflies;
mod patagonia;

use hoteldm_core::{Hotel, Supplier};
use serde::de::DeserializeOwned;

use crate::error::SupplierError;

/// Maps one supplier's payload into canonical hotels, preserving record order.
///
/// # Errors
///
/// Returns [`SupplierError::Decode`] if the payload is not an array of that
/// supplier's records. One bad record fails the whole batch.
pub fn normalize(
    supplier: Supplier,
    payload: serde_json::Value,
) -> Result<Vec<Hotel>, SupplierError> {
    let hotels: Vec<Hotel> = match supplier {
        Supplier::Acme => decode(supplier, payload)?
            .into_iter()
            .map(acme::normalize_hotel)
            .collect(),
        Supplier::Patagonia => decode(supplier, payload)?
            .into_iter()
            .map(patagonia::normalize_hotel)
            .collect(),
        Supplier::Paperflies => decode(supplier, payload)?
            .into_iter()
            .map(paperflies::normalize_hotel)
            .collect(),
    };
    tracing::debug!(%supplier, count = hotels.len(), "normalized supplier payload");
    Ok(hotels)
}

fn decode<T: DeserializeOwned>(
    supplier: Supplier,
    payload: serde_json::Value,
) -> Result<Vec<T>, SupplierError> {
    serde_json::from_value(payload).map_err(|source| SupplierError::Decode { supplier, source })
}

/// Trims a free-text field; `None` becomes the empty string.
fn text(value: Option<String>) -> String {
    match value {
        Some(s) => s.trim().to_owned(),
        None => String::new(),
    }
}

/// Trims every element of a text list; `None` becomes an empty list.
fn text_list(values: Option<Vec<String>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .map(|s| s.trim().to_owned())
        .collect()
}
