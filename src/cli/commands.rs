// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a random password
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<i64>,

        /// Leave symbols out of the character universe
        #[arg(long)]
        no_symbols: bool,
    },

    /// Encrypt and store a credential
    Store {
        /// Website the credential belongs to
        #[arg(required = true)]
        website: String,

        /// Password to store (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// List all stored credentials
    List,

    /// Decrypt one credential under the current process key
    Reveal {
        /// Credential ID
        #[arg(required = true)]
        id: i64,
    },
}
