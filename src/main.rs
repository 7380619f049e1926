// src/main.rs
use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::Arc;

mod cli;
mod core;
mod crypto;
mod db;
mod generators;
mod models;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::core::vault::Vault;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();
    config.ensure_directories_exist();

    // Log to a file so the interactive prompts stay clean
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .target(env_logger::Target::Pipe(Box::new(std::fs::File::create(
            &config.log_file,
        )?)))
        .init();

    log::info!("🔒 Starting vaultgen - password generator & credential store");

    let database = match db::init_db(&args.db).await {
        Ok(database) => database,
        Err(e) => {
            eprintln!("❌ Database connection failed: {e}");
            eprintln!("Troubleshooting:");
            eprintln!("• Does the directory in the database URL exist and is it writable?");
            eprintln!("• Use --db or set DATABASE_URL in `.env` (e.g. sqlite:./data/vaultgen.db)");
            return Ok(());
        }
    };

    ctrlc::set_handler(move || {
        log::info!("🔴 Ctrl+C received. Shutting down...");
        println!("\n👋 Goodbye!");
        std::process::exit(0);
    })
    .expect("Failed to set Ctrl+C handler");

    // Process-lifetime encryption key: generated fresh every run and never
    // persisted, so credentials stored in earlier runs will not decrypt
    let key = crypto::generate_key();
    log::warn!("Fresh encryption key generated; credentials from previous runs cannot be decrypted in this session");

    let vault = Vault::new(Arc::new(database), key);

    let result = match args.command {
        Some(CliCommand::Generate { length, no_symbols }) => {
            cli::handlers::handle_generate(&config, length, no_symbols, args.json)
        }
        Some(CliCommand::Store { website, password }) => {
            cli::handlers::handle_store(&vault, &website, password, args.json).await
        }
        Some(CliCommand::List) => cli::handlers::handle_list(&vault, args.json).await,
        Some(CliCommand::Reveal { id }) => {
            cli::handlers::handle_reveal(&vault, id, args.json).await
        }
        None => cli::menu::run_cli_menu(&vault, &config).await,
    };

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    log::info!("✅ vaultgen shutdown complete");
    Ok(())
}
