//! Signet command-line interface.
//!
//! Signs one message with the persistent identity and prints the artifact as
//! JSON on stdout, or verifies an artifact produced earlier.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use signet_core::{logging, Config};
use signet_crypto::{verify_artifact, OutputArtifact, Signer};
use signet_identity::KeyStore;

/// Longest message accepted on the command line, in characters.
const MAX_MESSAGE_CHARS: usize = 250;

#[derive(Debug, Parser)]
#[command(name = "signet", version, about)]
struct Cli {
    /// Configuration file (defaults to <config dir>/signet/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Key record to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    key_file: Option<PathBuf>,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    json_logs: bool,

    /// Verify an artifact read from FILE ("-" for stdin) instead of signing
    #[arg(long, value_name = "FILE", conflicts_with = "message")]
    verify: Option<PathBuf>,

    /// Message to sign, 250 characters or less
    #[arg(required_unless_present = "verify", allow_hyphen_values = true)]
    message: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if cli.json_logs {
        logging::init_json(&config.logging.level);
    } else {
        logging::init_from_config(&config.logging);
    }

    if let Some(source) = cli.verify {
        return verify(&source);
    }

    let message = cli.message.unwrap_or_default();
    validate_message(&message)?;

    let key_path = cli.key_file.unwrap_or_else(|| config.key_path());
    tracing::debug!(path = %key_path.display(), "Using key file");

    let store = KeyStore::new(key_path);
    let (key_pair, public_key_pem) = store
        .load_or_create()
        .context("Failed to load signing key")?;

    let artifact = Signer::new()
        .sign(&message, &public_key_pem, &key_pair)
        .context("Failed to sign message")?;

    println!("{}", artifact.to_json_pretty()?);
    Ok(())
}

fn validate_message(message: &str) -> Result<()> {
    if message.chars().count() > MAX_MESSAGE_CHARS {
        bail!("Please provide one argument that is {MAX_MESSAGE_CHARS} characters or less.");
    }
    Ok(())
}

fn verify(source: &Path) -> Result<()> {
    let text = if source == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read artifact from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read artifact {}", source.display()))?
    };

    let artifact = OutputArtifact::from_json(&text).context("Failed to parse artifact")?;
    verify_artifact(&artifact).context("Artifact did not verify")?;

    println!("Signature OK");
    Ok(())
}
