use axum::{
    extract::{Query, State},
    Extension, Json,
};
use hoteldm_core::{Amenities, Coordinate, Hotel, Images};
use hoteldm_pipeline::HotelQuery;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_query_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct HotelsQuery {
    /// Comma-separated hotel ids.
    pub hotel_ids: Option<String>,
    pub destination_id: Option<String>,
}

/// `hotels` is omitted entirely when nothing matched.
#[derive(Debug, Serialize)]
pub(super) struct HotelsData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotels: Option<Vec<HotelItem>>,
}

#[derive(Debug, Serialize)]
pub(super) struct HotelItem {
    pub id: String,
    pub destination_id: u64,
    pub name: String,
    pub location: Option<LocationItem>,
    pub description: String,
    pub amenities: Option<Amenities>,
    pub images: Option<Images>,
    pub booking_conditions: Vec<String>,
}

/// Coordinates are served as numbers only; text values are left out.
#[derive(Debug, Serialize)]
pub(super) struct LocationItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    pub address: String,
    pub city: String,
    pub country: String,
}

impl From<Hotel> for HotelItem {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            destination_id: hotel.destination_id,
            name: hotel.name,
            location: hotel.location.map(|location| LocationItem {
                lat: location.latitude.as_ref().and_then(Coordinate::as_f64),
                lng: location.longitude.as_ref().and_then(Coordinate::as_f64),
                address: location.address,
                city: location.city,
                country: location.country,
            }),
            description: hotel.description,
            amenities: hotel.amenities,
            images: hotel.images,
            booking_conditions: hotel.booking_conditions,
        }
    }
}

pub(super) async fn get_hotels(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<HotelsQuery>,
) -> Result<Json<ApiResponse<HotelsData>>, ApiError> {
    let query = parse_query(&params).map_err(|message| {
        tracing::warn!(reason = message, "rejected malformed hotels query");
        ApiError::new(req_id.0.clone(), "validation_error", message)
    })?;

    let hotels = state
        .store
        .get_hotels(&query)
        .map_err(|e| map_query_error(req_id.0.clone(), &e))?;

    let hotels = if hotels.is_empty() {
        None
    } else {
        Some(hotels.into_iter().map(HotelItem::from).collect())
    };

    Ok(Json(ApiResponse {
        data: HotelsData { hotels },
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn parse_query(params: &HotelsQuery) -> Result<HotelQuery, &'static str> {
    let hotel_ids = params
        .hotel_ids
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToOwned::to_owned)
        .collect();

    let destination_id = match params.destination_id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<u64>()
                .map_err(|_| "destination_id must be a non-negative integer")?,
        ),
    };

    Ok(HotelQuery::new(hotel_ids, destination_id))
}
