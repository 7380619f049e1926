// src/models.rs
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub id: i64,
    pub website: String,
    pub password: Vec<u8>, // Encrypted password (nonce || ciphertext)
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: i64,
    pub include_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_symbols: true,
        }
    }
}
