//! Payment aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::charges::ChargesInformation;
use super::codec::{self, DecodeError, EncodeError};
use super::fx::Fx;
use super::party::{BeneficiaryParty, DebtorParty, SponsorParty};
use crate::validation::{AMOUNT, CURRENCY, Field, REQUIRED, Validate};

/// Identifier of a payment.
///
/// Opaque text on the wire. Empty means "not assigned yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "4ee3a8d8-ca7b-4290-a52c-dd5b6165ec43")]
pub struct PaymentId(String);

impl PaymentId {
    /// Generates a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for PaymentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PaymentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single payment registered in the system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Payment {
    /// Assigned by the service on creation
    pub id: PaymentId,
    #[schema(example = "743d5b63-8e6f-432e-a8fa-c5d8d2ee5fcb")]
    pub organisation_id: String,
    pub attributes: PaymentAttributes,
}

impl Payment {
    /// Encodes the payment as canonical JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        codec::encode(self)
    }

    /// Decodes a payment from JSON bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        codec::decode(bytes)
    }
}

impl Validate for Payment {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::text("id", self.id.as_str(), REQUIRED),
            Field::text("organisation_id", &self.organisation_id, REQUIRED),
            Field::nested("attributes", &self.attributes, REQUIRED),
        ]
    }
}

/// Details of the payment transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PaymentAttributes {
    /// Decimal amount, kept as text
    #[schema(example = "100.21")]
    pub amount: String,
    pub beneficiary_party: BeneficiaryParty,
    pub charges_information: ChargesInformation,
    #[schema(example = "GBP")]
    pub currency: String,
    pub debtor_party: DebtorParty,
    pub end_to_end_reference: String,
    pub fx: Fx,
    #[schema(example = "1002001")]
    pub numeric_reference: String,
    pub payment_id: String,
    pub payment_purpose: String,
    #[schema(example = "FPS")]
    pub payment_scheme: String,
    #[schema(example = "Credit")]
    pub payment_type: String,
    /// RFC 3339 timestamp. A bare `YYYY-MM-DD` is read as midnight UTC.
    #[serde(with = "processing_date")]
    #[schema(value_type = Option<String>, format = DateTime, example = "2017-01-18T00:00:00Z")]
    pub processing_date: Option<DateTime<Utc>>,
    pub reference: String,
    #[schema(example = "ImmediatePayment")]
    pub scheme_payment_type: String,
    #[schema(example = "InternetBanking")]
    pub scheme_payment_sub_type: String,
    pub sponsor_party: SponsorParty,
}

impl Validate for PaymentAttributes {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::text("amount", &self.amount, AMOUNT),
            Field::nested("beneficiary_party", &self.beneficiary_party, REQUIRED),
            Field::nested("charges_information", &self.charges_information, REQUIRED),
            Field::text("currency", &self.currency, CURRENCY),
            Field::nested("debtor_party", &self.debtor_party, REQUIRED),
            Field::text("end_to_end_reference", &self.end_to_end_reference, REQUIRED),
            Field::nested("fx", &self.fx, REQUIRED),
            Field::text("numeric_reference", &self.numeric_reference, REQUIRED),
            Field::text("payment_id", &self.payment_id, REQUIRED),
            Field::text("payment_purpose", &self.payment_purpose, REQUIRED),
            Field::text("payment_scheme", &self.payment_scheme, REQUIRED),
            Field::text("payment_type", &self.payment_type, REQUIRED),
            Field::date("processing_date", self.processing_date.as_ref(), REQUIRED),
            Field::text("reference", &self.reference, REQUIRED),
            Field::text("scheme_payment_type", &self.scheme_payment_type, REQUIRED),
            Field::text(
                "scheme_payment_sub_type",
                &self.scheme_payment_sub_type,
                REQUIRED,
            ),
            Field::nested("sponsor_party", &self.sponsor_party, REQUIRED),
        ]
    }
}

mod processing_date {
    use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(text) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if let Ok(at) = DateTime::parse_from_rfc3339(&text) {
            return Ok(Some(at.with_timezone(&Utc)));
        }
        NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .map(|date| Some(date.and_time(NaiveTime::MIN).and_utc()))
            .map_err(|_| D::Error::custom(format!("invalid processing date `{text}`")))
    }
}
