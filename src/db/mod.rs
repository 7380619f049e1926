// src/db/mod.rs
use thiserror::Error;

use crate::models::CredentialRecord;

pub mod sqlite;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    SqlxError(String),

    #[error("Credential not found: {0}")]
    NotFound(i64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Initialization error: {0}")]
    InitError(String),
}

// Convert database-specific errors to our DbError
impl From<sqlx::Error> for DbError {
    fn from(error: sqlx::Error) -> Self {
        DbError::SqlxError(error.to_string())
    }
}

// The main database handle; all storage goes through the SQLite backend
#[derive(Debug, Clone)]
pub struct Database {
    backend: sqlite::SqliteBackend,
}

impl Database {
    pub async fn new(connection_string: &str) -> Result<Self, DbError> {
        let mut backend = sqlite::SqliteBackend::new();
        backend.init(connection_string).await?;
        Ok(Self { backend })
    }

    pub async fn insert_credential(
        &self,
        website: &str,
        encrypted_password: &[u8],
    ) -> Result<i64, DbError> {
        self.backend.insert_credential(website, encrypted_password).await
    }

    pub async fn get_all_credentials(&self) -> Result<Vec<CredentialRecord>, DbError> {
        self.backend.get_all_credentials().await
    }

    pub async fn get_credential_by_id(&self, id: i64) -> Result<CredentialRecord, DbError> {
        self.backend.get_credential_by_id(id).await
    }

    pub async fn count_credentials(&self) -> Result<usize, DbError> {
        self.backend.count_credentials().await
    }
}

// Function to initialize the database
pub async fn init_db(db_url: &str) -> Result<Database, DbError> {
    Database::new(db_url).await
}
