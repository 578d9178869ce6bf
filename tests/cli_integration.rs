//! Integration tests for the encbox CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Interactive passphrase prompts are hard to automate, so every run
//! supplies the passphrase through `ENCBOX_PASSPHRASE`.

use assert_cmd::Command;
use predicates::prelude::*;

const PASSPHRASE: &str = "chem123456";

const LEGACY_ENVELOPE: &str = "H/kW2klYNBA9KOO1jw4X1BRKAqykmeFhsXWfy232SvGY1fvAM9hur+aBzpaz3s93";

/// Helper: get a Command pointing at the encbox binary.
fn encbox() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("encbox").expect("binary should exist")
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf-8 stdout")
}

#[test]
fn help_flag_shows_usage() {
    encbox()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Passphrase-based encryption for configuration secrets",
        ))
        .stdout(predicate::str::contains("encrypt"))
        .stdout(predicate::str::contains("decrypt"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_shows_version() {
    encbox()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("encbox"));
}

#[test]
fn no_args_shows_help() {
    encbox()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn encrypt_then_decrypt_roundtrip() {
    let out = stdout_of(
        encbox()
            .env("ENCBOX_PASSPHRASE", PASSPHRASE)
            .args(["encrypt", "postgres://user:hunter2@db/app"]),
    );
    let token = out.trim();
    assert!(token.starts_with("ENC("), "expected wrapped token, got {token}");
    assert!(token.ends_with(')'));

    let out = stdout_of(
        encbox()
            .env("ENCBOX_PASSPHRASE", PASSPHRASE)
            .args(["decrypt", token]),
    );
    assert_eq!(out.trim_end(), "postgres://user:hunter2@db/app");
}

#[test]
fn encrypt_raw_prints_bare_envelope() {
    let out = stdout_of(
        encbox()
            .env("ENCBOX_PASSPHRASE", PASSPHRASE)
            .args(["encrypt", "--raw", "secret"]),
    );
    let token = out.trim();
    assert!(!token.starts_with("ENC("));

    let out = stdout_of(
        encbox()
            .env("ENCBOX_PASSPHRASE", PASSPHRASE)
            .args(["decrypt", token]),
    );
    assert_eq!(out.trim_end(), "secret");
}

#[test]
fn encrypt_reads_piped_stdin() {
    let out = stdout_of(
        encbox()
            .env("ENCBOX_PASSPHRASE", PASSPHRASE)
            .arg("encrypt")
            .write_stdin("piped secret\n"),
    );
    let token = out.trim().to_string();

    let out = stdout_of(
        encbox()
            .env("ENCBOX_PASSPHRASE", PASSPHRASE)
            .args(["decrypt", &token]),
    );
    assert_eq!(out.trim_end(), "piped secret");
}

#[test]
fn decrypt_legacy_envelope() {
    let out = stdout_of(
        encbox()
            .env("ENCBOX_PASSPHRASE", PASSPHRASE)
            .args(["decrypt", LEGACY_ENVELOPE]),
    );
    assert_eq!(out.trim_end(), "12");
}

#[test]
fn decrypt_with_wrong_passphrase_fails() {
    encbox()
        .env("ENCBOX_PASSPHRASE", "not-the-passphrase")
        .args(["decrypt", LEGACY_ENVELOPE])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid padding"));
}

#[test]
fn resolve_passes_plain_values_through() {
    // No passphrase needed for a plain value.
    let out = stdout_of(encbox().args(["resolve", "plainvalue"]));
    assert_eq!(out.trim_end(), "plainvalue");
}

#[test]
fn resolve_decrypts_wrapped_tokens() {
    let out = stdout_of(
        encbox()
            .env("ENCBOX_PASSPHRASE", PASSPHRASE)
            .args(["encrypt", "secret"]),
    );
    let token = out.trim().to_string();

    let out = stdout_of(
        encbox()
            .env("ENCBOX_PASSPHRASE", PASSPHRASE)
            .args(["resolve", &token]),
    );
    assert_eq!(out.trim_end(), "secret");
}

#[test]
fn encrypt_rejects_short_passphrase() {
    encbox()
        .env("ENCBOX_PASSPHRASE", "short")
        .args(["encrypt", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8"));
}

#[test]
fn decrypt_rejects_garbage_input() {
    encbox()
        .env("ENCBOX_PASSPHRASE", PASSPHRASE)
        .args(["decrypt", "not*valid*base64"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base64"));
}

#[test]
fn completions_bash_generates_script() {
    encbox()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("encbox"));
}

#[test]
fn completions_unknown_shell_fails() {
    encbox()
        .args(["completions", "csh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shell"));
}
