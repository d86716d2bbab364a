//! Shared building blocks for the refill workspace: logging setup and
//! small wire types used by more than one crate.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::types::{Health, MessageResponse};

    #[test]
    fn health_type_ok() {
        let h = Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_response_serializes_as_message_field() {
        let body = serde_json::to_value(MessageResponse::new("Payment successful!")).unwrap();
        assert_eq!(body, serde_json::json!({"message": "Payment successful!"}));
    }
}
