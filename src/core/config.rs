// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

// Configuration for the password vault CLI
#[derive(Debug, Clone)]
pub struct Config {
    // Database
    pub database_url: String,

    // Password Generation
    pub default_password_length: i64,
    pub default_include_symbols: bool,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:./data/vaultgen.db".to_string(),
            default_password_length: 12,
            default_include_symbols: true,
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("./logs/vaultgen.log"),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(url) = env::var("DATABASE_URL") {
            config.database_url = url;
        }

        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        if let Ok(val) = env::var("DEFAULT_INCLUDE_SYMBOLS") {
            if let Ok(include) = val.parse() {
                config.default_include_symbols = include;
            }
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        config
    }

    // Create directories needed for operation
    pub fn ensure_directories_exist(&self) {
        if let Some(parent) = self.log_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("⚠️ Failed to create log directory: {}", e);
                }
            }
        }

        // Ensure the SQLite database directory exists
        if let Some(db_path) = self.database_url.strip_prefix("sqlite:") {
            if let Some(parent) = PathBuf::from(db_path).parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    if let Err(e) = std::fs::create_dir_all(parent) {
                        eprintln!("⚠️ Failed to create database directory: {}", e);
                    }
                }
            }
        }
    }
}
