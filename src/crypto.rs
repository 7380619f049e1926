// src/crypto.rs
use aes_gcm::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm, Key, Nonce,
};
use thiserror::Error;

// Ciphertexts are stored as nonce || ciphertext
const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Encryption error: {0}")]
    EncryptionError(String),

    #[error("Decryption error: {0}")]
    DecryptionError(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Key size error: expected 32 bytes, got {0}")]
    KeySizeError(usize),

    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Generate a fresh 256-bit key from the OS RNG.
///
/// The key lives for the process lifetime only and is never persisted,
/// so records written in an earlier run will not decrypt in this one.
pub fn generate_key() -> Vec<u8> {
    Aes256Gcm::generate_key(&mut OsRng).to_vec()
}

// Encrypt a password with AES-256-GCM
pub fn encrypt_password(key: &[u8], plaintext: &str) -> Result<Vec<u8>> {
    if key.len() != KEY_LEN {
        return Err(CryptoError::KeySizeError(key.len()));
    }

    let aes_key = Key::<Aes256Gcm>::from_slice(key);
    let cipher = Aes256Gcm::new(aes_key);

    // Fresh random nonce per call, so identical plaintexts never
    // produce identical ciphertexts
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_bytes())
        .map_err(|e| CryptoError::EncryptionError(e.to_string()))?;

    let mut encrypted = nonce.to_vec();
    encrypted.extend_from_slice(&ciphertext);

    Ok(encrypted)
}

// Decrypt a password with AES-256-GCM
pub fn decrypt_password(key: &[u8], ciphertext: &[u8]) -> Result<String> {
    if key.len() != KEY_LEN {
        return Err(CryptoError::KeySizeError(key.len()));
    }

    // Must hold at least the nonce and something beyond it
    if ciphertext.len() <= NONCE_LEN {
        return Err(CryptoError::InvalidFormat("Ciphertext too short".into()));
    }

    let (nonce_bytes, encrypted_data) = ciphertext.split_at(NONCE_LEN);

    let aes_key = Key::<Aes256Gcm>::from_slice(key);
    let cipher = Aes256Gcm::new(aes_key);
    let nonce = Nonce::from_slice(nonce_bytes);

    let plaintext = cipher
        .decrypt(nonce, encrypted_data)
        .map_err(|e| CryptoError::DecryptionError(e.to_string()))?;

    let password = String::from_utf8(plaintext)?;

    Ok(password)
}
