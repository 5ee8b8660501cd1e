//! Kargo Wire CLI
//!
//! Encodes Kargo resource manifests to their protobuf wire form and back.
//!
//! ```text
//! manifest.yaml ──encode──▶ bytes ──decode──▶ YAML
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kargo_wire::{decode_to_manifest, encode_manifest, wire, ResourceKind, Version};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Kargo Wire - translate Kargo resources to and from their wire form
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON", global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a resource manifest as a protobuf message
    Encode {
        /// YAML manifest to read
        #[arg(long, short)]
        input: PathBuf,

        /// File to write; stdout if omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Decode a protobuf message and print it as a YAML manifest
    Decode {
        /// Kind of the encoded resource
        #[arg(long, short, value_enum)]
        kind: ResourceKind,

        /// Encoded message to read
        #[arg(long, short)]
        input: PathBuf,
    },

    /// Print build metadata
    Version {
        /// Print the wire form instead of the manifest form
        #[arg(long)]
        wire: bool,
    },
}

// =============================================================================
// Main
// =============================================================================

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(&args);

    match args.command {
        Command::Encode { input, output } => {
            let manifest = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let (kind, bytes) = encode_manifest(&manifest)?;
            info!(kind = %kind, bytes = bytes.len(), "Encoded {}", input.display());

            match output {
                Some(path) => fs::write(&path, &bytes)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => io::stdout().write_all(&bytes)?,
            }
        }
        Command::Decode { kind, input } => {
            let bytes =
                fs::read(&input).with_context(|| format!("Failed to read {}", input.display()))?;
            let manifest = decode_to_manifest(kind, &bytes)?;
            print!("{}", manifest);
        }
        Command::Version { wire } => {
            let version = Version::current();
            if wire {
                println!("{:#?}", wire::VersionInfo::from(&version));
            } else {
                print!("{}", serde_yaml::to_string(&version)?);
            }
        }
    }

    Ok(())
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // stdout carries command output, so logs go to stderr
    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .init();
    }
}
