use axum::{extract::State, Json};

use common::types::MessageResponse;
use service::stations::{self, StationInput, StationView};

use crate::errors::ApiError;
use crate::extract::ValidJson;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/stations", tag = "stations",
    responses((status = 200, description = "All stations", body = [crate::openapi::StationDoc]))
)]
pub async fn list_stations(State(state): State<ServerState>) -> Result<Json<Vec<StationView>>, ApiError> {
    let list = stations::list_stations(&state.db).await?;
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/stations", tag = "stations",
    request_body = crate::openapi::StationRequest,
    responses(
        (status = 200, description = "Created", body = crate::openapi::MessageDoc),
        (status = 400, description = "Missing or malformed field", body = crate::openapi::MessageDoc)
    )
)]
pub async fn add_station(
    State(state): State<ServerState>,
    ValidJson(input): ValidJson<StationInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    stations::add_station(&state.db, input).await?;
    Ok(Json(MessageResponse::new("Station added successfully!")))
}
