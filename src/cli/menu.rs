// src/cli/menu.rs
use inquire::{Confirm, Password, Select, Text};
use std::error::Error;

use crate::core::config::Config;
use crate::core::vault::Vault;
use crate::generators::password;
use crate::models::GenerationOptions;

pub async fn run_cli_menu(vault: &Vault, config: &Config) -> Result<(), Box<dyn Error>> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║            🔐 VAULTGEN               ║");
    println!("╚══════════════════════════════════════╝");

    match vault.count_credentials().await {
        Ok(count) => println!("{} credential(s) stored in this vault\n", count),
        Err(e) => println!("⚠️ Could not read the credential count: {}\n", e),
    }

    loop {
        let choice = Select::new(
            "What would you like to do?",
            vec![
                "🎲 Generate a password",
                "💾 Store a credential",
                "📋 List credentials",
                "🔓 Reveal a credential",
                "🚪 Exit",
            ],
        )
        .prompt()?;

        let result = match choice {
            "🎲 Generate a password" => generate_flow(vault, config).await,
            "💾 Store a credential" => store_flow(vault).await,
            "📋 List credentials" => list_flow(vault).await,
            "🔓 Reveal a credential" => reveal_flow(vault).await,
            _ => break,
        };

        if let Err(e) = result {
            println!("❌ {}", e);
        }

        println!();
    }

    println!("👋 Goodbye!");
    Ok(())
}

async fn generate_flow(vault: &Vault, config: &Config) -> Result<(), Box<dyn Error>> {
    let length_input = Text::new("Password length:")
        .with_default(&config.default_password_length.to_string())
        .prompt()?;
    let length: i64 = length_input.trim().parse()?;

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(config.default_include_symbols)
        .prompt()?;

    let options = GenerationOptions {
        length,
        include_symbols,
    };
    let generated = password::generate(&options)?;

    println!("Generated password: {}", generated);
    println!("Strength: {}/100", password::analyze_strength(&generated));

    let store_it = Confirm::new("Store this password?")
        .with_default(false)
        .prompt()?;

    if store_it {
        let website = Text::new("Website:").prompt()?;
        let record = vault.store_credential(&website, &generated).await?;
        println!("✅ Stored credential {} for {}", record.id, record.website);
    }

    Ok(())
}

async fn store_flow(vault: &Vault) -> Result<(), Box<dyn Error>> {
    let website = Text::new("Website:").prompt()?;
    let secret = Password::new("Password to store:")
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .prompt()?;

    let record = vault.store_credential(&website, &secret).await?;
    println!("✅ Stored credential {} for {}", record.id, record.website);

    Ok(())
}

async fn list_flow(vault: &Vault) -> Result<(), Box<dyn Error>> {
    let records = vault.list_credentials().await?;

    if records.is_empty() {
        println!("No credentials stored yet.");
        return Ok(());
    }

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

async fn reveal_flow(vault: &Vault) -> Result<(), Box<dyn Error>> {
    let id_input = Text::new("Credential ID:").prompt()?;
    let id: i64 = id_input.trim().parse()?;

    let revealed = vault.reveal_credential(id).await?;
    println!("🔓 {}", revealed);

    Ok(())
}
