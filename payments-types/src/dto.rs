//! Data Transfer Objects (DTOs) for responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Payment;

/// Resource type tag carried by every payment response.
pub const PAYMENT_RESOURCE_TYPE: &str = "Payment";

/// A payment as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    #[serde(rename = "type")]
    #[schema(example = "Payment")]
    pub resource_type: String,
    /// Always zero; updates are not versioned
    #[schema(example = 0)]
    pub version: u32,
    #[serde(flatten)]
    pub payment: Payment,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            resource_type: PAYMENT_RESOURCE_TYPE.to_string(),
            version: 0,
            payment,
        }
    }
}

/// Envelope for the list of payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaymentListResponse {
    pub data: Vec<PaymentResponse>,
}

impl From<Vec<Payment>> for PaymentListResponse {
    fn from(payments: Vec<Payment>) -> Self {
        Self {
            data: payments.into_iter().map(PaymentResponse::from).collect(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    #[schema(example = "Payment not found: 4ee3a8d8-ca7b-4290-a52c-dd5b6165ec43")]
    pub error: String,
    /// HTTP status code
    #[schema(example = 404)]
    pub code: u16,
    /// Individual rule violations, present for validation failures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<crate::validation::Violation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PaymentId;

    #[test]
    fn test_response_flattens_payment() {
        let payment = Payment {
            id: PaymentId::from("abc"),
            organisation_id: "org".into(),
            ..Default::default()
        };

        let json = serde_json::to_value(PaymentResponse::from(payment.clone())).unwrap();

        assert_eq!(json["type"], "Payment");
        assert_eq!(json["version"], 0);
        assert_eq!(json["id"], "abc");
        assert_eq!(json["organisation_id"], "org");
        assert!(json["attributes"].is_object());

        let back: PaymentResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back.payment, payment);
    }

    #[test]
    fn test_list_is_wrapped_in_data() {
        let list = PaymentListResponse::from(vec![Payment::default(), Payment::default()]);
        let json = serde_json::to_value(&list).unwrap();

        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        assert_eq!(json["data"][0]["type"], "Payment");
    }
}
