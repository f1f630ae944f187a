//! Payment Application Service
//!
//! Orchestrates validation, ID assignment and existence checks on top of the
//! repository port. Contains NO infrastructure logic - pure business orchestration.

use payments_types::{
    AppError, InputError, Payment, PaymentId, PaymentRepository, Validator,
};

/// Application service for payment operations.
///
/// Generic over `R: PaymentRepository` - the adapter is injected at compile time.
/// This enables:
/// - Swapping repositories without code changes
/// - Testing with in-memory repo
/// - Compile-time checks for port implementation
///
/// The service holds no mutable state and is safe to share across tasks.
pub struct PaymentService<R: PaymentRepository> {
    repo: R,
    validator: Validator,
}

impl<R: PaymentRepository> PaymentService<R> {
    /// Creates a new payment service with the given repository and validator.
    pub fn new(repo: R, validator: Validator) -> Self {
        Self { repo, validator }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Registers a new payment and returns its freshly assigned ID.
    ///
    /// The caller must not supply an ID.
    pub async fn add(&self, mut payment: Payment) -> Result<PaymentId, AppError> {
        if !payment.id.is_empty() {
            return Err(InputError::IdAlreadySet.into());
        }

        payment.id = PaymentId::generate();
        self.validator.validate(&payment)?;

        Ok(self.repo.add(&payment).await?)
    }

    /// Lists every stored payment.
    pub async fn get_all(&self) -> Result<Vec<Payment>, AppError> {
        Ok(self.repo.get_all().await?)
    }

    /// Replaces an existing payment.
    ///
    /// Validation runs before the existence check, so a malformed update of an
    /// unknown payment reports the validation failure.
    pub async fn update(&self, payment: Payment) -> Result<(), AppError> {
        self.validator.validate(&payment)?;

        if !self.repo.exists(&payment.id).await {
            return Err(AppError::NotFound(payment.id));
        }

        Ok(self.repo.update(&payment).await?)
    }

    /// Reads a payment. Any repository failure is reported as not found.
    pub async fn get(&self, id: &PaymentId) -> Result<Payment, AppError> {
        if id.is_empty() {
            return Err(InputError::EmptyId.into());
        }

        self.repo
            .get(id)
            .await
            .map_err(|_| AppError::NotFound(id.clone()))
    }

    /// Removes a payment.
    pub async fn delete(&self, id: &PaymentId) -> Result<(), AppError> {
        if id.is_empty() {
            return Err(InputError::EmptyId.into());
        }

        if !self.repo.exists(id).await {
            return Err(AppError::NotFound(id.clone()));
        }

        Ok(self.repo.delete(id).await?)
    }
}
