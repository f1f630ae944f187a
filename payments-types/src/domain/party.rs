//! Parties taking part in a payment.
//!
//! The hierarchy is expressed by composition: a richer party holds its base
//! shape as a named field, flattened on the wire so the JSON stays flat.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{Field, REQUIRED, Rule, Validate};

/// Account number codes accepted for a payment party.
pub const ACCOUNT_NUMBER_CODES: &[&str] = &["IBAN", "BBAN"];

/// Base account details shared by every party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Account {
    #[schema(example = "56781234")]
    pub account_number: String,
    #[schema(example = "123123")]
    pub bank_id: String,
    #[schema(example = "GBDSC")]
    pub bank_id_code: String,
}

impl Validate for Account {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::text("account_number", &self.account_number, REQUIRED),
            Field::text("bank_id", &self.bank_id, REQUIRED),
            Field::text("bank_id_code", &self.bank_id_code, REQUIRED),
        ]
    }
}

/// A party of the payment transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PaymentParty {
    #[serde(flatten)]
    pub account: Account,
    pub account_name: String,
    /// `IBAN` or `BBAN`
    #[schema(example = "IBAN")]
    pub account_number_code: String,
    pub address: String,
    pub name: String,
}

impl Validate for PaymentParty {
    fn fields(&self) -> Vec<Field<'_>> {
        const ACCOUNT_NUMBER_CODE: &[Rule] = &[Rule::Required, Rule::OneOf(ACCOUNT_NUMBER_CODES)];

        vec![
            Field::embedded("account", &self.account),
            Field::text("account_name", &self.account_name, REQUIRED),
            Field::text(
                "account_number_code",
                &self.account_number_code,
                ACCOUNT_NUMBER_CODE,
            ),
            Field::text("address", &self.address, REQUIRED),
            Field::text("name", &self.name, REQUIRED),
        ]
    }
}

/// The debtor is a plain payment party.
pub type DebtorParty = PaymentParty;

/// The sponsor only carries account details.
pub type SponsorParty = Account;

/// The beneficiary of a payment.
///
/// `account_type` exists in the wire format but must always stay at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct BeneficiaryParty {
    #[serde(flatten)]
    pub party: PaymentParty,
    #[serde(skip_serializing_if = "is_zero")]
    pub account_type: i64,
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

impl Validate for BeneficiaryParty {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::embedded("party", &self.party),
            Field::integer("account_type", self.account_type, &[Rule::IsDefault]),
        ]
    }
}
