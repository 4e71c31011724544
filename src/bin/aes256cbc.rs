// src/bin/aes256cbc.rs
//! Command-line front end for aes256-cbc-vault

use std::io::Write;
use std::path::{Path, PathBuf};

use aes256_cbc_vault::crypto::{decrypt_to_string, encrypt_str};
use aes256_cbc_vault::file_ops::{decrypt_file_with_record, encrypt_file_with_record};
use aes256_cbc_vault::key_ops::{key_to_hex, KeyMaterial};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aes256cbc")]
#[command(about = "AES-256-CBC string and file encryption", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a fresh key+IV record (96 hex chars, IV first)
    Keygen {
        /// Print only the 64-char key hex, for the string commands
        #[arg(long)]
        key_only: bool,
    },
    /// Encrypt text into a base64 token
    EncryptString {
        #[arg(long)]
        key: String,
        text: String,
    },
    /// Decrypt a base64 token back to text
    DecryptString {
        #[arg(long)]
        key: String,
        token: String,
    },
    /// Encrypt a file with the key and IV from a record
    EncryptFile {
        #[arg(long)]
        record: String,
        input: PathBuf,
        output: PathBuf,
    },
    /// Decrypt a file with the key and IV from a record
    DecryptFile {
        #[arg(long)]
        record: String,
        input: PathBuf,
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Keygen { key_only } => {
            let material = KeyMaterial::generate().context("secure key generation failed")?;
            if key_only {
                writeln!(stdout, "{}", key_to_hex(&material.key))?;
            } else {
                writeln!(stdout, "{}", material.to_record())?;
            }
        }
        Commands::EncryptString { key, text } => {
            let token = encrypt_str(&text, &key).context("encryption failed")?;
            writeln!(stdout, "{token}")?;
        }
        Commands::DecryptString { key, token } => {
            let text = decrypt_to_string(&token, &key)
                .map_err(|e| anyhow::anyhow!("decryption failed ({:?}): {e}", e.category()))?;
            writeln!(stdout, "{text}")?;
        }
        Commands::EncryptFile {
            record,
            input,
            output,
        } => {
            let size = encrypt_file_with_record(&input, &output, &record)
                .inspect_err(|_| discard(&output))
                .with_context(|| format!("failed to encrypt {}", input.display()))?;
            info!("ENCRYPTED {size} bytes → {}", output.display());
        }
        Commands::DecryptFile {
            record,
            input,
            output,
        } => {
            let size = decrypt_file_with_record(&input, &output, &record)
                .inspect_err(|_| discard(&output))
                .with_context(|| format!("failed to decrypt {}", input.display()))?;
            info!("DECRYPTED {size} bytes → {}", output.display());
        }
    }

    Ok(())
}

/// Remove partial output left by a failed stream operation
fn discard(path: &Path) {
    if path.exists() {
        if let Err(e) = std::fs::remove_file(path) {
            warn!("could not remove partial output {}: {e}", path.display());
        }
    }
}
