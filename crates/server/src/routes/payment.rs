use axum::Json;

use common::types::MessageResponse;
use service::payment::{self, PaymentInput};

use crate::errors::{ApiError, INVALID_PAYMENT_AMOUNT};
use crate::extract::ValidJson;

/// Mock checkout: only the amount is judged, nothing is charged.
#[utoipa::path(
    post, path = "/payment", tag = "payment",
    request_body = crate::openapi::PaymentRequest,
    responses(
        (status = 200, description = "Accepted", body = crate::openapi::MessageDoc),
        (status = 400, description = "Amount not positive", body = crate::openapi::MessageDoc)
    )
)]
pub async fn process_payment(
    ValidJson(input): ValidJson<PaymentInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    payment::process_payment(input).map_err(|_| ApiError::BadRequest(INVALID_PAYMENT_AMOUNT.into()))?;
    Ok(Json(MessageResponse::new("Payment successful!")))
}
