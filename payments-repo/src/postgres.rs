//! PostgreSQL repository adapter.
//!
//! Same key/value layout as the SQLite backend, with a `BYTEA` body column.

use async_trait::async_trait;
use sqlx::PgPool;

use payments_types::{Payment, PaymentId, PaymentRepository, RepoError};

use crate::types::DbPayment;

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        execute_migration(
            &pool,
            include_str!("../migrations/0001_create_payments_pg.sql"),
            "0001",
        )
        .await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Writes the record for `payment`, replacing any previous value.
    async fn put(&self, payment: &Payment) -> Result<PaymentId, RepoError> {
        let row = DbPayment::from_domain(payment)?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        sqlx::query(
            r#"INSERT INTO payments (id, body) VALUES ($1, $2)
               ON CONFLICT (id) DO UPDATE SET body = EXCLUDED.body"#,
        )
        .bind(&row.id)
        .bind(&row.body)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(PaymentId::from(row.id))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for PostgresRepo {
    async fn add(&self, payment: &Payment) -> Result<PaymentId, RepoError> {
        self.put(payment).await
    }

    async fn get(&self, id: &PaymentId) -> Result<Payment, RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        let row: Option<DbPayment> =
            sqlx::query_as(r#"SELECT id, body FROM payments WHERE id = $1"#)
                .bind(id.as_str())
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        row.ok_or(RepoError::NotFound)?.into_domain()
    }

    async fn get_all(&self) -> Result<Vec<Payment>, RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        let rows: Vec<DbPayment> = sqlx::query_as(r#"SELECT id, body FROM payments"#)
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbPayment::into_domain).collect()
    }

    async fn update(&self, payment: &Payment) -> Result<(), RepoError> {
        self.put(payment).await.map(|_| ())
    }

    async fn delete(&self, id: &PaymentId) -> Result<(), RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        sqlx::query(r#"DELETE FROM payments WHERE id = $1"#)
            .bind(id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }
}
