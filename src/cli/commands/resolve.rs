//! `encbox resolve` — decrypt ENC(...) tokens, pass plain values through.

use crate::cli::{prompt_passphrase, read_value};
use crate::errors::Result;
use crate::pbe::{Pbe, ENC_PREFIX, ENC_SUFFIX};

/// Execute the `resolve` command.
pub fn execute(value: Option<&str>) -> Result<()> {
    let value = read_value(value, "Value to resolve")?;

    // Plain values need no passphrase, so only prompt when the value is
    // actually wrapped.
    let is_wrapped = value.starts_with(ENC_PREFIX) && value.ends_with(ENC_SUFFIX);
    let resolved = if is_wrapped {
        let passphrase = prompt_passphrase()?;
        let pbe = Pbe::new(passphrase.as_str());
        pbe.try_decrypt(&value)?
    } else {
        value
    };

    println!("{resolved}");

    Ok(())
}
