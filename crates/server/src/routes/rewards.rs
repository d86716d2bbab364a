use axum::{extract::State, Json};
use serde::Serialize;

use common::types::MessageResponse;
use service::errors::ServiceError;
use service::rewards;

use crate::errors::{ApiError, USER_NOT_FOUND};
use crate::extract::ValidPath;
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct RewardsOutput {
    pub rewards: i32,
}

fn user_not_found(e: ServiceError) -> ApiError {
    match e {
        ServiceError::NotFound(_) => ApiError::NotFound(USER_NOT_FOUND.into()),
        other => other.into(),
    }
}

/// An integer that does not fit the id column names no account, so it is a
/// 404 like any other unknown id. Anything that is not an integer is a 400.
fn parse_user_id(raw: &str) -> Result<i32, ApiError> {
    if let Ok(id) = raw.parse::<i32>() {
        return Ok(id);
    }
    let digits = raw.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Err(ApiError::NotFound(USER_NOT_FOUND.into()))
    } else {
        Err(ApiError::BadRequest(format!("Invalid URL: Cannot parse `{raw}` as an integer")))
    }
}

#[utoipa::path(
    post, path = "/reward/{user_id}", tag = "rewards",
    params(("user_id" = i32, Path, description = "Account id")),
    responses(
        (status = 200, description = "Points added", body = crate::openapi::MessageDoc),
        (status = 404, description = "User not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn grant_reward(
    State(state): State<ServerState>,
    ValidPath(raw_id): ValidPath<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user_id = parse_user_id(&raw_id)?;
    let total = rewards::grant_reward(&state.db, user_id).await.map_err(user_not_found)?;
    Ok(Json(MessageResponse::new(format!("Reward added! Total points: {total}"))))
}

#[utoipa::path(
    get, path = "/reward/{user_id}", tag = "rewards",
    params(("user_id" = i32, Path, description = "Account id")),
    responses(
        (status = 200, description = "Current balance", body = crate::openapi::RewardsResponse),
        (status = 404, description = "User not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_rewards(
    State(state): State<ServerState>,
    ValidPath(raw_id): ValidPath<String>,
) -> Result<Json<RewardsOutput>, ApiError> {
    let user_id = parse_user_id(&raw_id)?;
    let rewards = rewards::get_rewards(&state.db, user_id).await.map_err(user_not_found)?;
    Ok(Json(RewardsOutput { rewards }))
}
