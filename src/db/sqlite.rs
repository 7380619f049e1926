// src/db/sqlite.rs
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::path::Path;
use std::str::FromStr;

use super::DbError;
use crate::models::CredentialRecord;

#[derive(Debug, Clone)]
pub struct SqliteBackend {
    pool: Option<SqlitePool>,
}

impl SqliteBackend {
    pub fn new() -> Self {
        Self { pool: None }
    }

    // Helper to get the pool or return an error
    fn get_pool(&self) -> Result<&SqlitePool, DbError> {
        self.pool
            .as_ref()
            .ok_or(DbError::InitError("Database not initialized".into()))
    }

    pub async fn init(&mut self, connection_string: &str) -> Result<(), DbError> {
        let db_path = connection_string
            .strip_prefix("sqlite:")
            .ok_or(DbError::ConfigError("Invalid SQLite connection string".into()))?;

        // Create the database directory if it doesn't exist
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DbError::InitError(format!("Failed to create database directory: {}", e))
                })?;
            }
        }

        log::info!("Initializing SQLite database at: {}", db_path);

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path))
            .map_err(|e| DbError::InitError(e.to_string()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        // AUTOINCREMENT keeps ids monotonically increasing and never reused
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS passwords (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                website TEXT NOT NULL,
                password BLOB NOT NULL
            );
            "#,
        )
        .execute(&pool)
        .await?;

        self.pool = Some(pool);
        Ok(())
    }

    pub async fn insert_credential(
        &self,
        website: &str,
        encrypted_password: &[u8],
    ) -> Result<i64, DbError> {
        let pool = self.get_pool()?;

        let result = sqlx::query(
            r#"
            INSERT INTO passwords (website, password)
            VALUES (?, ?)
            "#,
        )
        .bind(website)
        .bind(encrypted_password)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get_all_credentials(&self) -> Result<Vec<CredentialRecord>, DbError> {
        let pool = self.get_pool()?;

        let rows = sqlx::query(
            r#"
            SELECT id, website, password
            FROM passwords
            ORDER BY id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        let mut records = Vec::new();
        for row in rows {
            records.push(CredentialRecord {
                id: row.get("id"),
                website: row.get("website"),
                password: row.get("password"),
            });
        }

        Ok(records)
    }

    pub async fn get_credential_by_id(&self, id: i64) -> Result<CredentialRecord, DbError> {
        let pool = self.get_pool()?;

        let row = sqlx::query(
            r#"
            SELECT id, website, password
            FROM passwords
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound(id))?;

        Ok(CredentialRecord {
            id: row.get("id"),
            website: row.get("website"),
            password: row.get("password"),
        })
    }

    pub async fn count_credentials(&self) -> Result<usize, DbError> {
        let pool = self.get_pool()?;

        let row = sqlx::query("SELECT COUNT(*) AS count FROM passwords")
            .fetch_one(pool)
            .await?;

        let count: i64 = row.get("count");
        Ok(count as usize)
    }
}
