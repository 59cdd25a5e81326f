//! cloak-cli — Terminal front end for Cloak recovery phrases.
//!
//! Generates and validates recovery phrases and seals them under a
//! passphrase for offline backup. Everything happens on the terminal:
//! nothing is written to disk and nothing leaves the machine.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use cloak_mnemonic::{decrypt, encrypt, generate_mnemonic, validate_mnemonic, DEFAULT_STRENGTH};

/// Cloak recovery-phrase tool.
#[derive(Parser)]
#[command(name = "cloak-cli")]
#[command(version, about = "Recovery phrases you can actually write down.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh recovery phrase.
    Generate(GenerateArgs),
    /// Check a phrase's word count and checksum.
    Validate(ValidateArgs),
    /// Encrypt a phrase under a passphrase, printing a hex blob.
    Encrypt,
    /// Decrypt a hex blob back to the phrase.
    Decrypt(DecryptArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Entropy strength in bits (128, 160, 192, 224, or 256).
    #[arg(short, long, default_value_t = DEFAULT_STRENGTH)]
    strength: usize,
}

#[derive(Args)]
struct ValidateArgs {
    /// Phrase to check. Prompted for (hidden) when omitted.
    phrase: Option<String>,
}

#[derive(Args)]
struct DecryptArgs {
    /// Hex-encoded blob produced by `encrypt`.
    blob: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => cmd_generate(args),
        Commands::Validate(args) => cmd_validate(args),
        Commands::Encrypt => cmd_encrypt(),
        Commands::Decrypt(args) => cmd_decrypt(args),
    }
}

/// Generate a phrase and print it to stdout.
fn cmd_generate(args: GenerateArgs) -> Result<()> {
    tracing::debug!(strength = args.strength, "generate requested");
    let phrase = generate_mnemonic(args.strength)?;
    println!("{phrase}");
    eprintln!();
    eprintln!("WARNING: this phrase will NOT be shown again.");
    eprintln!("Write it down and store it securely. Anyone with the phrase has the account.");
    Ok(())
}

/// Validate a phrase from the argument or a hidden prompt.
fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let phrase = match args.phrase {
        Some(p) => p,
        None => rpassword::prompt_password("Recovery phrase: ")
            .context("Failed to read phrase")?,
    };

    if !validate_mnemonic(&phrase) {
        bail!("Invalid phrase (word count, unknown word, or checksum)");
    }
    println!("valid");
    Ok(())
}

/// Encrypt a validated phrase under a passphrase; print the blob as hex.
fn cmd_encrypt() -> Result<()> {
    let phrase = rpassword::prompt_password("Recovery phrase: ")
        .context("Failed to read phrase")?;
    if !validate_mnemonic(&phrase) {
        bail!("Refusing to encrypt an invalid phrase");
    }

    let passphrase = rpassword::prompt_password("Passphrase: ")?;
    let confirm = rpassword::prompt_password("Confirm passphrase: ")?;
    if passphrase != confirm {
        bail!("Passphrases do not match");
    }

    // Store the canonical lowercase single-space form so decryption always
    // yields something the validator accepts verbatim.
    let canonical = phrase
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let blob = encrypt(canonical.as_bytes(), passphrase.as_bytes())?;
    println!("{}", hex::encode(blob));
    Ok(())
}

/// Decrypt a blob and print the recovered phrase.
fn cmd_decrypt(args: DecryptArgs) -> Result<()> {
    let blob = hex::decode(args.blob.trim()).context("Blob is not valid hex")?;
    let passphrase = rpassword::prompt_password("Passphrase: ")?;

    let plaintext = decrypt(&blob, passphrase.as_bytes())?;
    let phrase = std::str::from_utf8(&plaintext).context("Decrypted data is not UTF-8")?;
    println!("{phrase}");
    Ok(())
}
