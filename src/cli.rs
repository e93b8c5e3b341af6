use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::Threshold;
use crate::logging::LogFormat;

/// Validates that threshold is at least 2
/// A single share cannot determine a polynomial of any useful degree
fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "recombine")]
#[command(about = "Reconstruct secrets from threshold shares written in mixed numeric bases")]
#[command(version)]
pub struct Cli {
    /// Default log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconstruct the secret of each share document
    Reconstruct {
        /// JSON share documents (reads one document from stdin when omitted)
        files: Vec<PathBuf>,

        /// Override the documents' threshold k (must be >= 2)
        #[arg(short, long, value_parser = validate_threshold)]
        threshold: Option<Threshold>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Decode the shares of a document and show which would be dropped
    Inspect {
        /// JSON share document (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}
