//! Database row type shared by the SQLite and PostgreSQL adapters.

use sqlx::FromRow;

use payments_types::{Payment, RepoError};

/// A stored key/value record: payment id and its encoded document.
#[derive(FromRow)]
pub struct DbPayment {
    pub id: String,
    pub body: Vec<u8>,
}

impl DbPayment {
    /// Encodes a payment into a row. Rejects payments without a key.
    pub fn from_domain(payment: &Payment) -> Result<Self, RepoError> {
        if payment.id.is_empty() {
            return Err(RepoError::MissingKey);
        }
        Ok(Self {
            id: payment.id.to_string(),
            body: payment.to_bytes()?,
        })
    }

    /// Decodes the stored document back into a payment.
    pub fn into_domain(self) -> Result<Payment, RepoError> {
        Ok(Payment::from_bytes(&self.body)?)
    }
}
