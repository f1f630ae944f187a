//! Repository port trait.
//!
//! Storage-agnostic contract for persisting payments as key/value records:
//! one record per payment, keyed by its ID. Adapters (SQLite, Postgres,
//! in-memory mocks) implement this trait.

use crate::domain::{Payment, PaymentId};
use crate::error::RepoError;

/// The repository port for payments.
///
/// Every single-key operation runs in its own atomic transaction. There is no
/// cross-operation transaction, so check-then-write sequences built on top of
/// this trait are last-writer-wins.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Stores a payment under its ID and returns that ID.
    ///
    /// Never assigns an ID. Fails with [`RepoError::MissingKey`] if the ID is empty.
    async fn add(&self, payment: &Payment) -> Result<PaymentId, RepoError>;

    /// Reads a payment. [`RepoError::NotFound`] if nothing is stored under `id`.
    async fn get(&self, id: &PaymentId) -> Result<Payment, RepoError>;

    /// Reads every stored payment, in no particular order.
    ///
    /// The first record that fails to decode aborts the whole call.
    async fn get_all(&self) -> Result<Vec<Payment>, RepoError>;

    /// Overwrites the record stored at `payment.id`.
    async fn update(&self, payment: &Payment) -> Result<(), RepoError>;

    /// Removes a record. Deleting a missing key is not an error.
    async fn delete(&self, id: &PaymentId) -> Result<(), RepoError>;

    /// True iff a readable, decodable record is stored under `id`.
    async fn exists(&self, id: &PaymentId) -> bool {
        self.get(id).await.is_ok()
    }
}
