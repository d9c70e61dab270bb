use std::borrow::Cow;

use validator::ValidationError;

/// Parses the draft amount text ahead of any remote call. Non-numeric,
/// non-finite and negative values are refused locally instead of being left
/// for the remote service to reject.
pub fn parse_amount(amount: &str) -> Result<f64, ValidationError> {
    match amount.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        Ok(_) => Err(ValidationError::new("0")
            .with_message(Cow::from("Amount must be a non-negative number"))),
        Err(_) => Err(ValidationError::new("0").with_message(Cow::from("Amount must be a number"))),
    }
}
