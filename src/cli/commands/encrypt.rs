//! `encbox encrypt` — encrypt a value into an ENC(...) token.

use std::io::{self, IsTerminal, Read};

use crate::cli::{output, prompt_new_passphrase};
use crate::errors::{EncBoxError, Result};
use crate::pbe::{Pbe, ENC_PREFIX, ENC_SUFFIX};

/// Execute the `encrypt` command.
pub fn execute(value: Option<&str>, raw: bool) -> Result<()> {
    let passphrase = prompt_new_passphrase()?;

    // Determine the plaintext from one of three sources.
    let plaintext = if let Some(v) = value {
        // Source 1: Inline value on the command line.
        output::warning("Value provided on command line — it may appear in shell history.");
        v.to_string()
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim_end().to_string()
    } else {
        // Source 3: Interactive secure prompt (default).
        dialoguer::Password::new()
            .with_prompt("Enter value to encrypt")
            .interact()
            .map_err(|e| EncBoxError::CommandFailed(format!("input prompt: {e}")))?
    };

    let pbe = Pbe::new(passphrase.as_str());
    let sealed = pbe.encrypt(&plaintext)?;

    if raw {
        println!("{sealed}");
    } else {
        println!("{ENC_PREFIX}{sealed}{ENC_SUFFIX}");
    }

    Ok(())
}
