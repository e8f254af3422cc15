//! API handlers

use axum::{
    extract::{rejection::JsonRejection, Path, Query},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::Bike;

/// Health check
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: String,
}

/// Fetch a single bike by id.
///
/// The id is opaque text: no lookup happens, so any value succeeds,
/// numeric or not.
pub async fn get_bike(Path(id): Path<String>) -> Json<GetBikeResponse> {
    Json(GetBikeResponse {
        message: "Fetching details for bike ID".to_string(),
        bike_id: id,
    })
}

#[derive(Debug, Serialize)]
pub struct GetBikeResponse {
    pub message: String,
    pub bike_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ListBikesParams {
    #[serde(rename = "type")]
    pub bike_type: Option<String>,
    pub color: Option<String>,
}

/// List bikes, echoing the effective filters.
///
/// `type` defaults to "any"; a missing or empty `color` reports
/// "not specified". No retrieval happens.
pub async fn list_bikes(Query(params): Query<ListBikesParams>) -> Json<ListBikesResponse> {
    let filter_type = params.bike_type.unwrap_or_else(|| "any".to_string());
    let filter_color = match params.color {
        Some(color) if !color.is_empty() => color,
        _ => "not specified".to_string(),
    };

    Json(ListBikesResponse {
        message: "Fetching list of bikes".to_string(),
        filter_type,
        filter_color,
    })
}

#[derive(Debug, Serialize)]
pub struct ListBikesResponse {
    pub message: String,
    pub filter_type: String,
    pub filter_color: String,
}

/// Create a bike.
///
/// The payload is validated and echoed back with 201; nothing is stored.
/// Malformed JSON, missing required fields, and constraint violations all
/// surface as 400 with the underlying message.
pub async fn create_bike(
    payload: Result<Json<Bike>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateBikeResponse>), Error> {
    let Json(bike) = payload.map_err(|rejection| Error::validation(rejection.body_text()))?;

    if let Err(err) = bike.validate() {
        tracing::warn!(error = %err, "Rejected bike payload");
        return Err(err);
    }

    let response = CreateBikeResponse {
        message: "Bike created successfully!".to_string(),
        bike_name: bike.name.clone(),
        wheel_size: bike.wheel_size,
        color: bike.color_or_default().to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[derive(Debug, Serialize)]
pub struct CreateBikeResponse {
    pub message: String,
    pub bike_name: String,
    pub wheel_size: i32,
    pub color: String,
}
