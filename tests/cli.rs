use std::error::Error;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn mixdown_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mixdown"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(mixdown_command().args(args).output()?)
}

#[test]
fn digest_prints_a_stable_hex_line() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("payload.bin");
    fs::write(&input, b"Wh?")?;

    let first = run(&["digest", "--key", "passphrase", input.to_str().unwrap()])?;
    assert!(
        first.status.success(),
        "digest command failed: {}",
        String::from_utf8_lossy(&first.stderr)
    );

    let line = String::from_utf8(first.stdout)?;
    let line = line.trim();
    assert_eq!(line.len(), 64, "32 digest bytes render as 64 hex chars");
    assert!(
        line.chars().all(|c| c.is_ascii_hexdigit()),
        "output must be pure hex: {}",
        line
    );

    // Same file, same key, fresh process: identical digest
    let second = run(&["digest", "--key", "passphrase", input.to_str().unwrap()])?;
    assert_eq!(
        line,
        String::from_utf8(second.stdout)?.trim(),
        "digest must be reproducible across runs"
    );

    Ok(())
}

#[test]
fn text_input_matches_file_input() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("payload.txt");
    fs::write(&input, b"same bytes either way")?;

    let from_file = run(&["digest", "--key", "k", input.to_str().unwrap()])?;
    let from_text = run(&["digest", "--key", "k", "--text", "same bytes either way"])?;

    assert!(from_file.status.success());
    assert!(from_text.status.success());
    assert_eq!(from_file.stdout, from_text.stdout);

    Ok(())
}

#[test]
fn hyphenated_format_prints_uppercase_pairs() -> Result<(), Box<dyn Error>> {
    let out = run(&[
        "digest",
        "--key",
        "passphrase",
        "--text",
        "Wh?",
        "--format",
        "hyphenated",
    ])?;
    assert!(out.status.success());

    let line = String::from_utf8(out.stdout)?;
    let line = line.trim();
    let pairs: Vec<&str> = line.split('-').collect();

    assert_eq!(pairs.len(), 32, "one pair per digest byte");
    assert!(pairs.iter().all(|p| {
        p.len() == 2 && p.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    }));

    Ok(())
}

#[test]
fn hash_flag_changes_the_digest() -> Result<(), Box<dyn Error>> {
    let sha256 = run(&["digest", "--key", "k", "--text", "payload"])?;
    let blake3 = run(&["digest", "--key", "k", "--text", "payload", "--hash", "blake3"])?;

    assert!(sha256.status.success());
    assert!(blake3.status.success());
    assert_ne!(sha256.stdout, blake3.stdout);

    Ok(())
}

#[test]
fn empty_key_is_rejected() -> Result<(), Box<dyn Error>> {
    let out = run(&["digest", "--key", "", "--text", "payload"])?;
    assert!(!out.status.success(), "empty key must fail");
    assert!(
        String::from_utf8_lossy(&out.stderr).contains("empty"),
        "error should name the empty key"
    );

    Ok(())
}

#[test]
fn missing_input_is_rejected() -> Result<(), Box<dyn Error>> {
    let out = run(&["digest", "--key", "k"])?;
    assert!(!out.status.success(), "digest needs a file or --text");

    Ok(())
}

#[test]
fn unknown_hash_is_a_usage_error() -> Result<(), Box<dyn Error>> {
    let out = run(&["digest", "--key", "k", "--text", "x", "--hash", "md5"])?;
    assert!(!out.status.success());

    Ok(())
}

#[test]
fn info_describes_the_pipeline() -> Result<(), Box<dyn Error>> {
    let out = run(&["info"])?;
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout)?;
    assert!(stdout.contains("Feistel"));
    assert!(stdout.contains("AES-256-CBC"));
    assert!(stdout.contains("Feistel rounds: 16"));

    Ok(())
}

#[test]
fn version_flag_prints_identity() -> Result<(), Box<dyn Error>> {
    let out = run(&["-V"])?;
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout)?.starts_with("mixdown"));

    Ok(())
}
