// Checkout details posted by the web application when the shopper clicks "pay".
//
// The raw request keeps every field optional so that a missing field is
// reported by name instead of as a generic deserialization failure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{AppError, Currency, MinorUnits, Result};

/// `amount` arrives either as a JSON number or as a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Text(String),
    Number(f64),
}

impl AmountInput {
    /// Parses the amount as an exact decimal in major units
    pub fn to_decimal(&self) -> Result<Decimal> {
        let text = match self {
            AmountInput::Text(s) => s.trim().to_string(),
            // f64 Display never uses exponent notation and round-trips
            AmountInput::Number(n) => n.to_string(),
        };

        let plain_number = !text.is_empty()
            && text
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
        if !plain_number {
            return Err(AppError::validation(format!("Invalid amount: {:?}", text)));
        }

        let parsed = if text.contains(['e', 'E']) {
            Decimal::from_scientific(&text)
        } else {
            Decimal::from_str(&text)
        };

        parsed.map_err(|_| AppError::validation(format!("Invalid amount: {:?}", text)))
    }
}

/// Raw initiation request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub amount: Option<AmountInput>,
    pub ref_no: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_contact: Option<String>,
    pub description: Option<String>,
}

/// Checkout details that passed validation and are ready to be signed
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutDetails {
    pub amount: Decimal,
    pub amount_minor: MinorUnits,
    pub currency: Currency,
    pub ref_no: String,
    pub user_name: String,
    pub user_email: String,
    pub user_contact: String,
    pub description: String,
}

impl CheckoutRequest {
    /// Checks every required field and converts the amount to minor units.
    ///
    /// A non-numeric, non-positive or sub-minor-unit amount is rejected here,
    /// so no malformed value ever reaches the signature or the form.
    pub fn validate(self, currency: Currency) -> Result<CheckoutDetails> {
        let amount = self
            .amount
            .ok_or_else(|| missing("amount"))?
            .to_decimal()?;

        if amount <= Decimal::ZERO {
            return Err(AppError::validation("Amount must be greater than 0"));
        }

        let amount_minor = currency
            .to_minor_units(amount)
            .ok_or_else(|| AppError::validation("Amount is too large"))?;

        if amount_minor.value() == 0 {
            return Err(AppError::validation(format!(
                "Amount must be at least {} {}",
                currency.smallest_unit(),
                currency
            )));
        }

        Ok(CheckoutDetails {
            amount,
            amount_minor,
            currency,
            ref_no: required(self.ref_no, "refNo")?,
            user_name: required(self.user_name, "userName")?,
            user_email: required(self.user_email, "userEmail")?,
            user_contact: required(self.user_contact, "userContact")?,
            description: required(self.description, "description")?,
        })
    }
}

fn missing(field: &str) -> AppError {
    AppError::validation(format!("Missing required field: {}", field))
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}
