// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output
    #[arg(long)]
    pub json: bool,

    /// Database URL
    #[arg(long, short, env = "DATABASE_URL", default_value = "sqlite:./data/vaultgen.db")]
    pub db: String,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
