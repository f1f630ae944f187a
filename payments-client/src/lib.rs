//! # Payments Client SDK
//!
//! A typed Rust client for the Payments API.

use payments_types::{ErrorResponse, Payment, PaymentId, PaymentListResponse, PaymentResponse};
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Created payment has no usable Location header")]
    MissingLocation,
}

/// Payments API client.
pub struct PaymentsClient {
    base_url: String,
    http: Client,
}

impl PaymentsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists all payments.
    pub async fn list_payments(&self) -> Result<Vec<Payment>, ClientError> {
        let list: PaymentListResponse = self.get("/payments").await?;
        Ok(list.data.into_iter().map(|r| r.payment).collect())
    }

    /// Gets a payment by ID.
    pub async fn get_payment(&self, id: &PaymentId) -> Result<Payment, ClientError> {
        let resp: PaymentResponse = self.get(&format!("/payments/{}", id)).await?;
        Ok(resp.payment)
    }

    /// Creates a payment and returns the ID the server assigned.
    pub async fn create_payment(&self, payment: &Payment) -> Result<PaymentId, ClientError> {
        let resp = self
            .http
            .post(format!("{}/payments", self.base_url))
            .json(payment)
            .send()
            .await?;
        let resp = Self::check(resp).await?;

        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .and_then(id_from_location)
            .ok_or(ClientError::MissingLocation)
    }

    /// Replaces an existing payment.
    pub async fn update_payment(&self, payment: &Payment) -> Result<(), ClientError> {
        let resp = self
            .http
            .put(format!("{}/payments", self.base_url))
            .json(payment)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// Deletes a payment.
    pub async fn delete_payment(&self, id: &PaymentId) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(format!("{}/payments/{}", self.base_url, id))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal helpers
    // ─────────────────────────────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Passes successful responses through; turns the rest into `ClientError::Api`.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(status, body),
        })
    }
}

/// Extracts the payment ID from a `/payments/{id}` location.
fn id_from_location(location: &str) -> Option<PaymentId> {
    location
        .rsplit_once("/payments/")
        .map(|(_, id)| id)
        .filter(|id| !id.is_empty() && !id.contains('/'))
        .map(PaymentId::from)
}

/// Builds a readable message from an error body, listing rule violations if any.
fn error_message(status: StatusCode, body: String) -> String {
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) if err.violations.is_empty() => err.error,
        Ok(err) => {
            let violations: Vec<String> = err.violations.iter().map(ToString::to_string).collect();
            format!("{}: {}", err.error, violations.join("; "))
        }
        Err(_) if body.is_empty() => status.to_string(),
        Err(_) => body,
    }
}
