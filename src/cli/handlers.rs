// src/cli/handlers.rs
use std::error::Error;

use base64::Engine;
use serde_json::json;

use crate::core::config::Config;
use crate::core::vault::Vault;
use crate::generators::password;
use crate::models::GenerationOptions;

// Handlers for CLI subcommands
pub fn handle_generate(
    config: &Config,
    length: Option<i64>,
    no_symbols: bool,
    json_output: bool,
) -> Result<(), Box<dyn Error>> {
    let options = GenerationOptions {
        length: length.unwrap_or(config.default_password_length),
        include_symbols: if no_symbols {
            false
        } else {
            config.default_include_symbols
        },
    };

    let generated = password::generate(&options)?;
    let strength = password::analyze_strength(&generated);

    if json_output {
        println!("{}", json!({ "password": generated, "strength": strength }));
    } else {
        println!("{}", generated);
        println!("Strength: {}/100", strength);
    }

    Ok(())
}

pub async fn handle_store(
    vault: &Vault,
    website: &str,
    password: Option<String>,
    json_output: bool,
) -> Result<(), Box<dyn Error>> {
    let password = match password {
        Some(password) => password,
        None => inquire::Password::new("Password to store:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .prompt()?,
    };

    let record = vault.store_credential(website, &password).await?;

    if json_output {
        println!("{}", json!({ "id": record.id, "website": record.website }));
    } else {
        println!("✅ Stored credential {} for {}", record.id, record.website);
    }

    Ok(())
}

pub async fn handle_list(vault: &Vault, json_output: bool) -> Result<(), Box<dyn Error>> {
    let records = vault.list_credentials().await?;

    if json_output {
        let engine = base64::engine::general_purpose::STANDARD;
        let out: Vec<_> = records
            .iter()
            .map(|r| {
                json!({
                    "id": r.id,
                    "website": r.website,
                    "password": engine.encode(&r.password),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No credentials stored yet.");
        return Ok(());
    }

    println!("{:>4}  {:<32}  PASSWORD", "ID", "WEBSITE");
    for record in &records {
        println!(
            "{:>4}  {:<32}  🔒 {} bytes encrypted",
            record.id,
            record.website,
            record.password.len()
        );
    }

    Ok(())
}

pub async fn handle_reveal(vault: &Vault, id: i64, json_output: bool) -> Result<(), Box<dyn Error>> {
    let revealed = vault.reveal_credential(id).await?;

    if json_output {
        println!("{}", json!({ "id": id, "password": revealed }));
    } else {
        println!("{}", revealed);
    }

    Ok(())
}
