//! Foreign exchange details of a payment.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{AMOUNT, CURRENCY, Field, Rule, Validate};

/// Exchange rate information attached to a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Fx {
    #[schema(example = "FX123")]
    pub contract_reference: String,
    /// Decimal rate, kept as text
    #[schema(example = "2.00000")]
    pub exchange_rate: String,
    #[schema(example = "200.42")]
    pub original_amount: String,
    #[schema(example = "USD")]
    pub original_currency: String,
}

impl Validate for Fx {
    fn fields(&self) -> Vec<Field<'_>> {
        const CONTRACT_REFERENCE: &[Rule] = &[Rule::Required, Rule::Alphanum];

        vec![
            Field::text(
                "contract_reference",
                &self.contract_reference,
                CONTRACT_REFERENCE,
            ),
            Field::text("exchange_rate", &self.exchange_rate, AMOUNT),
            Field::text("original_amount", &self.original_amount, AMOUNT),
            Field::text("original_currency", &self.original_currency, CURRENCY),
        ]
    }
}
