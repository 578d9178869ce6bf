//! `encbox decrypt` — decrypt an envelope and print the plaintext.

use crate::cli::{prompt_passphrase, read_value};
use crate::errors::Result;
use crate::pbe::{Pbe, ENC_PREFIX, ENC_SUFFIX};

/// Execute the `decrypt` command.
///
/// Accepts both the bare base64 envelope and the wrapped `ENC(...)`
/// token, so values can be pasted straight out of a config file.
pub fn execute(value: Option<&str>) -> Result<()> {
    let sealed = read_value(value, "Envelope to decrypt")?;

    let token = sealed
        .strip_prefix(ENC_PREFIX)
        .and_then(|inner| inner.strip_suffix(ENC_SUFFIX))
        .unwrap_or(&sealed);

    let passphrase = prompt_passphrase()?;
    let pbe = Pbe::new(passphrase.as_str());
    let plaintext = pbe.decrypt(token)?;

    println!("{plaintext}");

    Ok(())
}
