use axum::{extract::State, Json};
use serde::Serialize;

use common::types::MessageResponse;
use service::auth::domain::{LoginInput, RegisterInput};

use crate::errors::ApiError;
use crate::extract::ValidJson;
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct LoginOutput {
    pub message: String,
    pub user_id: i32,
}

#[utoipa::path(
    post, path = "/register", tag = "auth",
    request_body = crate::openapi::RegisterRequest,
    responses(
        (status = 200, description = "Registered", body = crate::openapi::MessageDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::MessageDoc),
        (status = 409, description = "Username taken", body = crate::openapi::MessageDoc)
    )
)]
pub async fn register(
    State(state): State<ServerState>,
    ValidJson(input): ValidJson<RegisterInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.auth.register(input).await?;
    Ok(Json(MessageResponse::new("User registered successfully!")))
}

/// Credentials are checked on every call; nothing reusable is handed back.
#[utoipa::path(
    post, path = "/login", tag = "auth",
    request_body = crate::openapi::LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = crate::openapi::LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::openapi::MessageDoc)
    )
)]
pub async fn login(
    State(state): State<ServerState>,
    ValidJson(input): ValidJson<LoginInput>,
) -> Result<Json<LoginOutput>, ApiError> {
    let user = state.auth.login(input).await?;
    Ok(Json(LoginOutput { message: "Login successful!".into(), user_id: user.id }))
}
