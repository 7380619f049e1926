// src/core/vault.rs
use std::sync::Arc;
use thiserror::Error;

use crate::crypto::{self, CryptoError};
use crate::db::{Database, DbError};
use crate::models::CredentialRecord;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Database error: {0}")]
    Db(#[from] DbError),
}

pub type Result<T> = std::result::Result<T, VaultError>;

/// Context object for the credential store: the process-lifetime
/// encryption key plus the storage handle.
pub struct Vault {
    db: Arc<Database>,
    key: Vec<u8>,
}

impl Vault {
    pub fn new(db: Arc<Database>, key: Vec<u8>) -> Self {
        Self { db, key }
    }

    /// Encrypt a password and append it to the record set.
    ///
    /// Both inputs must be non-empty; a validation failure leaves the
    /// store untouched.
    pub async fn store_credential(&self, website: &str, password: &str) -> Result<CredentialRecord> {
        if website.is_empty() {
            return Err(VaultError::Validation("Website must not be empty".into()));
        }
        if password.is_empty() {
            return Err(VaultError::Validation("Password must not be empty".into()));
        }

        let encrypted = crypto::encrypt_password(&self.key, password)?;
        let id = self.db.insert_credential(website, &encrypted).await?;
        log::info!("Stored credential {} for {}", id, website);

        Ok(CredentialRecord {
            id,
            website: website.to_string(),
            password: encrypted,
        })
    }

    /// All stored credentials in insertion order.
    pub async fn list_credentials(&self) -> Result<Vec<CredentialRecord>> {
        Ok(self.db.get_all_credentials().await?)
    }

    /// Decrypt a record under the current process key.
    pub fn decrypt_record(&self, record: &CredentialRecord) -> Result<String> {
        Ok(crypto::decrypt_password(&self.key, &record.password)?)
    }

    /// Fetch a credential by id and decrypt it.
    pub async fn reveal_credential(&self, id: i64) -> Result<String> {
        let record = self.db.get_credential_by_id(id).await?;
        self.decrypt_record(&record)
    }

    pub async fn count_credentials(&self) -> Result<usize> {
        Ok(self.db.count_credentials().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn temp_vault(dir: &tempfile::TempDir) -> Vault {
        let url = format!("sqlite:{}", dir.path().join("vault.db").display());
        let database = db::init_db(&url).await.unwrap();
        Vault::new(Arc::new(database), crypto::generate_key())
    }

    #[tokio::test]
    async fn store_then_list_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let vault = temp_vault(&dir).await;

        let record = vault
            .store_credential("example.com", "Tr0ub4dor&3")
            .await
            .unwrap();
        assert_eq!(record.website, "example.com");

        let records = vault.list_credentials().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].website, "example.com");
        assert_eq!(vault.decrypt_record(&records[0]).unwrap(), "Tr0ub4dor&3");
    }

    #[tokio::test]
    async fn ids_increase_and_ciphertexts_differ() {
        let dir = tempfile::tempdir().unwrap();
        let vault = temp_vault(&dir).await;

        let first = vault.store_credential("example.com", "hunter2").await.unwrap();
        let second = vault.store_credential("example.com", "hunter2").await.unwrap();

        assert!(second.id > first.id);
        assert_ne!(first.password, second.password);
        assert_eq!(vault.decrypt_record(&first).unwrap(), "hunter2");
        assert_eq!(vault.decrypt_record(&second).unwrap(), "hunter2");
    }

    #[tokio::test]
    async fn empty_inputs_are_rejected_without_persisting() {
        let dir = tempfile::tempdir().unwrap();
        let vault = temp_vault(&dir).await;

        let no_website = vault.store_credential("", "hunter2").await;
        assert!(matches!(no_website, Err(VaultError::Validation(_))));

        let no_password = vault.store_credential("example.com", "").await;
        assert!(matches!(no_password, Err(VaultError::Validation(_))));

        assert!(vault.list_credentials().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reveal_fetches_and_decrypts_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let vault = temp_vault(&dir).await;

        let record = vault.store_credential("example.com", "hunter2").await.unwrap();
        assert_eq!(vault.reveal_credential(record.id).await.unwrap(), "hunter2");

        let missing = vault.reveal_credential(record.id + 1).await;
        assert!(matches!(missing, Err(VaultError::Db(DbError::NotFound(_)))));
    }

    #[tokio::test]
    async fn restart_with_fresh_key_orphans_old_records() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("vault.db").display());

        {
            let database = db::init_db(&url).await.unwrap();
            let vault = Vault::new(Arc::new(database), crypto::generate_key());
            vault.store_credential("example.com", "hunter2").await.unwrap();
        }

        // Same database file, new process: records survive but the key does not
        let database = db::init_db(&url).await.unwrap();
        let vault = Vault::new(Arc::new(database), crypto::generate_key());

        let records = vault.list_credentials().await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(matches!(
            vault.decrypt_record(&records[0]),
            Err(VaultError::Crypto(CryptoError::DecryptionError(_)))
        ));
    }

    #[tokio::test]
    async fn count_tracks_stored_records() {
        let dir = tempfile::tempdir().unwrap();
        let vault = temp_vault(&dir).await;

        assert_eq!(vault.count_credentials().await.unwrap(), 0);
        vault.store_credential("a.example", "one").await.unwrap();
        vault.store_credential("b.example", "two").await.unwrap();
        assert_eq!(vault.count_credentials().await.unwrap(), 2);
    }
}
