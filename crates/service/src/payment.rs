//! Stubbed payment check. No gateway is contacted; only the amount is judged.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::ServiceError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaymentInput {
    pub amount: f64,
}

/// Accept strictly positive, finite amounts.
pub fn process_payment(input: PaymentInput) -> Result<(), ServiceError> {
    if input.amount.is_finite() && input.amount > 0.0 {
        info!(amount = input.amount, "payment_accepted");
        Ok(())
    } else {
        warn!(amount = input.amount, "payment_rejected");
        Err(ServiceError::Validation("invalid payment amount".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pay(amount: f64) -> Result<(), ServiceError> {
        process_payment(PaymentInput { amount })
    }

    #[test]
    fn positive_amounts_succeed() {
        for amount in [0.01, 1.0, 9.99, 1e9] {
            assert!(pay(amount).is_ok(), "amount {amount}");
        }
    }

    #[test]
    fn zero_and_negative_amounts_fail() {
        for amount in [0.0, -0.0, -0.01, -100.0] {
            assert!(matches!(pay(amount), Err(ServiceError::Validation(_))), "amount {amount}");
        }
    }

    #[test]
    fn non_finite_amounts_fail() {
        assert!(pay(f64::NAN).is_err());
        assert!(pay(f64::INFINITY).is_err());
    }

    #[test]
    fn integer_json_amount_parses() {
        let input: PaymentInput = serde_json::from_str(r#"{"amount": 5}"#).unwrap();
        assert_eq!(input.amount, 5.0);
    }
}
