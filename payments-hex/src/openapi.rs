//! OpenAPI document for the payments API.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payments_types::domain::{
    Account, BeneficiaryParty, Charge, ChargesInformation, Fx, Payment, PaymentAttributes,
    PaymentId, PaymentParty,
};
use payments_types::dto::{ErrorResponse, PaymentListResponse, PaymentResponse};
use payments_types::validation::Violation;
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List all payments
#[utoipa::path(
    get,
    path = "/payments",
    tag = "payments",
    responses(
        (status = 200, description = "Every stored payment, in no particular order", body = PaymentListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_payments() {}

/// Create a payment
///
/// The payment must not carry an `id`; the service assigns one.
#[utoipa::path(
    post,
    path = "/payments",
    tag = "payments",
    request_body = Payment,
    responses(
        (status = 204, description = "Payment created",
            headers(("Location" = String, description = "Path of the new payment, `/payments/{id}`"))),
        (status = 400, description = "Malformed body, id already set, or failed validation", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_payment() {}

/// Replace a payment
#[utoipa::path(
    put,
    path = "/payments",
    tag = "payments",
    request_body = Payment,
    responses(
        (status = 204, description = "Payment updated"),
        (status = 400, description = "Malformed body or failed validation", body = ErrorResponse),
        (status = 404, description = "Payment not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn update_payment() {}

/// Get payment by ID
#[utoipa::path(
    get,
    path = "/payments/{id}",
    tag = "payments",
    params(
        ("id" = String, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment details", body = PaymentResponse),
        (status = 404, description = "Payment not found", body = ErrorResponse)
    )
)]
async fn get_payment() {}

/// Delete payment by ID
#[utoipa::path(
    delete,
    path = "/payments/{id}",
    tag = "payments",
    params(
        ("id" = String, Path, description = "Payment ID")
    ),
    responses(
        (status = 204, description = "Payment deleted"),
        (status = 404, description = "Payment not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn delete_payment() {}

/// OpenAPI documentation for the Payments API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payments API",
        version = "1.0.0",
        description = "Create, read, list, update and delete payments.\n\nEvery payment is validated against its field rules before it is stored; validation failures list each broken rule.",
        license(name = "MIT"),
    ),
    paths(
        health,
        list_payments,
        create_payment,
        update_payment,
        get_payment,
        delete_payment,
    ),
    components(
        schemas(
            Payment,
            PaymentId,
            PaymentAttributes,
            Account,
            PaymentParty,
            BeneficiaryParty,
            ChargesInformation,
            Charge,
            Fx,
            PaymentResponse,
            PaymentListResponse,
            ErrorResponse,
            Violation,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment management operations"),
    )
)]
pub struct ApiDoc;
