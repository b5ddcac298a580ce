use anyhow::{bail, ensure, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::IsTerminal;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuidtext::codec::{self, BRACED_LEN, CANONICAL_LEN, RAW_LEN, URN_LEN, URN_PREFIX};
use uuidtext::Uuid;

#[derive(Parser)]
#[command(name = "uuidtext")]
#[command(about = "Parse and format 128-bit identifiers")]
struct Cli {
    /// Log every accepted input at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse any accepted form and print the canonical form
    Parse {
        /// Identifier text (raw, dashed, braced or urn:uuid:)
        text: String,
    },
    /// Format 32 raw hex digits as the canonical form
    Format {
        /// Exactly 32 hex digits
        hex: String,
    },
    /// Parse any accepted form and print it as a URN
    Urn {
        /// Identifier text
        text: String,
    },
    /// Show how an identifier is carried in JSON
    Json {
        /// Identifier text
        text: String,
    },
    /// Validate several inputs, one result line each
    Check {
        /// Identifier texts
        #[arg(required = true)]
        texts: Vec<String>,
    },
}

/// The raw bytes with no text hooks, so JSON sees an array of numbers.
#[derive(Serialize)]
struct RawBytes([u8; 16]);

/// Embeds the identifier and keeps its text form.
#[derive(Serialize)]
#[serde(transparent)]
struct Wrapped {
    uuid: Uuid,
}

#[derive(Serialize)]
struct JsonForms {
    text: Uuid,
    bytes: RawBytes,
    wrapped: Wrapped,
}

fn form_name(len: usize) -> &'static str {
    match len {
        RAW_LEN => "raw",
        CANONICAL_LEN => "dashed",
        BRACED_LEN => "braced",
        URN_LEN => "urn",
        _ => "unknown",
    }
}

fn parse_logged(text: &str) -> anyhow::Result<Uuid> {
    match Uuid::parse_str(text) {
        Ok(id) => {
            debug!(form = form_name(text.len()), %id, "parsed identifier");
            Ok(id)
        }
        Err(e) => {
            warn!(input = text, error = %e, "rejected identifier");
            Err(e).with_context(|| format!("could not parse '{text}'"))
        }
    }
}

// RUST_LOG replaces the default filter; --verbose always enables debug for this binary.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) if verbose => filter.add_directive("uuidtext=debug".parse()?),
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("uuidtext=debug"),
        Err(_) => EnvFilter::new("uuidtext=warn"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Some(Commands::Parse { text }) => {
            let id = parse_logged(&text)?;
            println!("{id}");
        }
        Some(Commands::Format { hex }) => {
            ensure!(
                hex.len() == RAW_LEN,
                "expected {RAW_LEN} hex digits, got {}",
                hex.len()
            );
            let bytes = codec::parse(hex.as_bytes())
                .with_context(|| format!("could not format '{hex}'"))?;
            println!("{}", codec::format(&bytes));
        }
        Some(Commands::Urn { text }) => {
            let id = parse_logged(&text)?;
            println!("{}{id}", String::from_utf8_lossy(URN_PREFIX));
        }
        Some(Commands::Json { text }) => {
            let id = parse_logged(&text)?;
            let forms = JsonForms {
                text: id,
                bytes: RawBytes(id.into_bytes()),
                wrapped: Wrapped { uuid: id },
            };
            println!("{}", serde_json::to_string(&forms)?);
        }
        Some(Commands::Check { texts }) => {
            let mut failed = 0usize;
            for text in &texts {
                match Uuid::parse_str(text) {
                    Ok(id) => {
                        debug!(form = form_name(text.len()), %id, "parsed identifier");
                        println!("ok {id}");
                    }
                    Err(e) => {
                        warn!(input = text.as_str(), error = %e, "rejected identifier");
                        println!("error {e}");
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                bail!("{failed} of {} inputs failed", texts.len());
            }
        }
        None => {
            println!("Use 'uuidtext --help' for commands");
        }
    }

    Ok(())
}
