//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};

use clap::Parser;
use zeroize::Zeroizing;

use crate::errors::{EncBoxError, Result};
use crate::pbe::MIN_PASSPHRASE_LEN;

/// Environment variable consulted before prompting for a passphrase.
pub const PASSPHRASE_ENV: &str = "ENCBOX_PASSPHRASE";

/// encbox CLI: passphrase-based encryption for configuration secrets.
#[derive(Parser)]
#[command(
    name = "encbox",
    about = "Passphrase-based encryption for configuration secrets",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a value and print the ENC(...) token
    Encrypt {
        /// Value to encrypt (omit for interactive prompt)
        value: Option<String>,

        /// Print the bare base64 envelope without the ENC(...) wrapper
        #[arg(long)]
        raw: bool,
    },

    /// Decrypt an envelope (bare base64 or ENC(...) token)
    Decrypt {
        /// Envelope to decrypt (omit to read from stdin)
        value: Option<String>,
    },

    /// Resolve a config value: decrypt ENC(...) tokens, pass anything else through
    Resolve {
        /// Value to resolve (omit to read from stdin)
        value: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the passphrase for reading existing ciphertext, trying in order:
/// 1. `ENCBOX_PASSPHRASE` env var (CI/CD)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory
/// on drop. No length check here: legacy ciphertexts may have been
/// made with passphrases shorter than today's minimum.
pub fn prompt_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSPHRASE_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter passphrase")
        .interact()
        .map_err(|e| EncBoxError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Get the passphrase for producing new ciphertext, with confirmation
/// and a minimum length. Also respects `ENCBOX_PASSPHRASE` for
/// scripted/CI usage.
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_new_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSPHRASE_ENV) {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSPHRASE_LEN {
                return Err(EncBoxError::CommandFailed(format!(
                    "passphrase must be at least {MIN_PASSPHRASE_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let pw = dialoguer::Password::new()
            .with_prompt("Choose passphrase")
            .with_confirmation("Confirm passphrase", "Passphrases do not match, try again")
            .interact()
            .map_err(|e| EncBoxError::CommandFailed(format!("passphrase prompt: {e}")))?;

        if pw.len() < MIN_PASSPHRASE_LEN {
            output::warning(&format!(
                "Passphrase must be at least {MIN_PASSPHRASE_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(pw));
    }
}

/// Read a non-secret value from the argument, piped stdin, or an
/// interactive prompt, in that order.
pub fn read_value(value: Option<&str>, prompt: &str) -> Result<String> {
    if let Some(v) = value {
        return Ok(v.to_string());
    }

    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf.trim_end().to_string());
    }

    dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| EncBoxError::CommandFailed(format!("input prompt: {e}")))
}
