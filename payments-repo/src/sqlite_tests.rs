//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use payments_types::{Payment, PaymentId, PaymentRepository, RepoError};

    use crate::SqliteRepo;

    const VALID: &str = include_str!("../../testdata/valid_payment.json");

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn payment() -> Payment {
        let mut payment = Payment::from_bytes(VALID.as_bytes()).unwrap();
        payment.id = PaymentId::generate();
        payment
    }

    async fn insert_raw(repo: &SqliteRepo, id: &str, body: &[u8]) {
        sqlx::query("INSERT INTO payments (id, body) VALUES (?, ?)")
            .bind(id)
            .bind(body)
            .execute(repo.pool())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let repo = setup_repo().await;
        let payment = payment();

        let id = repo.add(&payment).await.unwrap();
        let fetched = repo.get(&id).await.unwrap();

        assert_eq!(id, payment.id);
        assert_eq!(fetched, payment);
    }

    #[tokio::test]
    async fn test_add_without_id_is_rejected() {
        let repo = setup_repo().await;
        let mut payment = payment();
        payment.id = PaymentId::default();

        let result = repo.add(&payment).await;

        assert!(matches!(result, Err(RepoError::MissingKey)));
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let repo = setup_repo().await;

        let result = repo.get(&PaymentId::generate()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_all_returns_every_payment() {
        let repo = setup_repo().await;
        let mut ids = HashSet::new();
        for _ in 0..10 {
            ids.insert(repo.add(&payment()).await.unwrap());
        }

        let all = repo.get_all().await.unwrap();

        assert_eq!(all.len(), 10);
        let fetched: HashSet<PaymentId> = all.into_iter().map(|p| p.id).collect();
        assert_eq!(fetched, ids);
    }

    #[tokio::test]
    async fn test_get_all_empty() {
        let repo = setup_repo().await;
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites() {
        let repo = setup_repo().await;
        let mut payment = payment();
        repo.add(&payment).await.unwrap();

        payment.attributes.amount = "999.99".to_string();
        repo.update(&payment).await.unwrap();

        let fetched = repo.get(&payment.id).await.unwrap();
        assert_eq!(fetched.attributes.amount, "999.99");
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_writes_missing_key() {
        let repo = setup_repo().await;
        let payment = payment();

        repo.update(&payment).await.unwrap();

        assert!(repo.exists(&payment.id).await);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = setup_repo().await;
        let payment = payment();
        repo.add(&payment).await.unwrap();

        repo.delete(&payment.id).await.unwrap();

        assert!(!repo.exists(&payment.id).await);
        assert!(matches!(
            repo.get(&payment.id).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let repo = setup_repo().await;
        assert!(repo.delete(&PaymentId::generate()).await.is_ok());
    }

    #[tokio::test]
    async fn test_exists() {
        let repo = setup_repo().await;
        let payment = payment();

        assert!(!repo.exists(&payment.id).await);
        repo.add(&payment).await.unwrap();
        assert!(repo.exists(&payment.id).await);
    }

    #[tokio::test]
    async fn test_corrupt_record_is_a_decode_error() {
        let repo = setup_repo().await;
        insert_raw(&repo, "broken", b"{not json").await;
        let id = PaymentId::from("broken");

        assert!(matches!(repo.get(&id).await, Err(RepoError::Decode(_))));
        assert!(!repo.exists(&id).await);
    }

    #[tokio::test]
    async fn test_get_all_aborts_on_corrupt_record() {
        let repo = setup_repo().await;
        repo.add(&payment()).await.unwrap();
        insert_raw(&repo, "broken", br#"{"attributes": "none"}"#).await;

        let result = repo.get_all().await;

        assert!(matches!(result, Err(RepoError::Decode(_))));
    }

    #[tokio::test]
    async fn test_stored_value_is_json_document() {
        let repo = setup_repo().await;
        let payment = payment();
        repo.add(&payment).await.unwrap();

        let body: Vec<u8> = sqlx::query_scalar("SELECT body FROM payments WHERE id = ?")
            .bind(payment.id.as_str())
            .fetch_one(repo.pool())
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["id"], payment.id.as_str());
        assert_eq!(json["attributes"]["currency"], "GBP");
    }

    #[tokio::test]
    async fn test_schema_creation_is_idempotent() {
        let repo = setup_repo().await;
        repo.add(&payment()).await.unwrap();

        repo.create_schema().await.unwrap();

        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_file_backed_database_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}/data/payments.db?mode=rwc", dir.path().display());
        let payment = payment();

        {
            let repo = SqliteRepo::new(&url).await.unwrap();
            repo.add(&payment).await.unwrap();
            repo.pool().close().await;
        }

        let repo = SqliteRepo::new(&url).await.unwrap();
        assert_eq!(repo.get(&payment.id).await.unwrap(), payment);
        assert!(dir.path().join("data/payments.db").exists());

        repo.pool().close().await;
    }
}
