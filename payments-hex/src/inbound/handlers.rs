//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use payments_types::{
    AppError, ErrorResponse, InputError, Payment, PaymentId, PaymentListResponse,
    PaymentRepository, PaymentResponse,
};

use crate::PaymentService;

/// Application state shared across handlers.
pub struct AppState<R: PaymentRepository> {
    pub service: PaymentService<R>,
}

/// Everything a handler can fail with.
pub enum ApiError {
    /// Failure reported by the service.
    App(AppError),
    /// Request body is not a well-formed payment document.
    Body(JsonRejection),
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError::App(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, violations) = match self {
            ApiError::Body(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text(), vec![]),
            ApiError::App(AppError::Input(InputError::Validation(errors))) => (
                StatusCode::BAD_REQUEST,
                "Payment failed validation".to_string(),
                errors.into_violations(),
            ),
            ApiError::App(err @ AppError::Input(_)) => {
                (StatusCode::BAD_REQUEST, err.to_string(), vec![])
            }
            ApiError::App(err @ AppError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string(), vec![])
            }
            ApiError::App(AppError::Storage(err)) => {
                tracing::error!(error = %err, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal storage error".to_string(),
                    vec![],
                )
            }
        };

        let body = ErrorResponse {
            error: message,
            code: status.as_u16(),
            violations,
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// List all payments.
#[tracing::instrument(skip(state))]
pub async fn list_payments<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.service.get_all().await?;
    tracing::debug!(count = payments.len(), "listed payments");
    Ok(Json(PaymentListResponse::from(payments)))
}

/// Create a payment. Responds with its location.
#[tracing::instrument(skip(state, body))]
pub async fn create_payment<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    body: Result<Json<Payment>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payment) = body?;
    let id = state.service.add(payment).await?;
    tracing::info!(payment_id = %id, "payment created");
    Ok((
        StatusCode::NO_CONTENT,
        [(header::LOCATION, format!("/payments/{}", id))],
    ))
}

/// Replace a payment.
#[tracing::instrument(skip(state, body))]
pub async fn update_payment<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    body: Result<Json<Payment>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payment) = body?;
    let id = payment.id.clone();
    state.service.update(payment).await?;
    tracing::info!(payment_id = %id, "payment updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Get payment by ID.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn get_payment<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.service.get(&PaymentId::from(id)).await?;
    Ok(Json(PaymentResponse::from(payment)))
}

/// Delete payment by ID.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn delete_payment<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.delete(&PaymentId::from(id)).await?;
    tracing::info!("payment deleted");
    Ok(StatusCode::NO_CONTENT)
}
