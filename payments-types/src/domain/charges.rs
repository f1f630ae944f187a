//! Charges applied to a payment.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{AMOUNT, CURRENCY, Field, REQUIRED, Rule, Validate};

/// A single charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Charge {
    /// Decimal amount, kept as text
    #[schema(example = "5.00")]
    pub amount: String,
    /// ISO 4217 currency code
    #[schema(example = "GBP")]
    pub currency: String,
}

impl Validate for Charge {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::text("amount", &self.amount, AMOUNT),
            Field::text("currency", &self.currency, CURRENCY),
        ]
    }
}

/// Who bears the charges and what the sender and receiver paid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ChargesInformation {
    #[schema(example = "SHAR")]
    pub bearer_code: String,
    pub sender_charges: Vec<Charge>,
    #[schema(example = "1.00")]
    pub receiver_charges_amount: String,
    #[schema(example = "USD")]
    pub receiver_charges_currency: String,
}

impl Validate for ChargesInformation {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::text("bearer_code", &self.bearer_code, REQUIRED),
            Field::list("sender_charges", &self.sender_charges, &[Rule::Dive]),
            Field::text(
                "receiver_charges_amount",
                &self.receiver_charges_amount,
                AMOUNT,
            ),
            Field::text(
                "receiver_charges_currency",
                &self.receiver_charges_currency,
                CURRENCY,
            ),
        ]
    }
}
