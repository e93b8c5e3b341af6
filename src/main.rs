use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use recombine::cli::{Cli, Commands, OutputFormat};
use recombine::commands::{inspect_document, reconstruct_document};
use recombine::domain::Threshold;
use recombine::logging::init_logging;

/// Read a whole share document from a file, or from stdin when no path is given
fn read_document(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read share document {}", path.display())),
        None => {
            let mut document = String::new();
            io::stdin()
                .read_to_string(&mut document)
                .context("Failed to read share document from stdin")?;
            Ok(document)
        }
    }
}

/// Reconstruct every document, reporting failures without stopping
///
/// Returns whether every document produced a secret.
fn run_reconstruct(
    files: &[PathBuf],
    threshold: Option<Threshold>,
    format: OutputFormat,
) -> Result<bool> {
    // No files: one document from stdin
    let sources: Vec<Option<&Path>> = if files.is_empty() {
        vec![None]
    } else {
        files.iter().map(|path| Some(path.as_path())).collect()
    };

    let mut reports = Vec::new();
    let mut all_ok = true;

    for (idx, source) in sources.into_iter().enumerate() {
        let case = idx + 1;
        let outcome =
            read_document(source).and_then(|json| reconstruct_document(case, &json, threshold));

        match outcome {
            Ok(report) => {
                if format == OutputFormat::Text {
                    println!("{}", report.to_line());
                }
                reports.push(report);
            }
            Err(err) => {
                eprintln!("Error: {err:#}");
                all_ok = false;
            }
        }
    }

    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?
        );
    }

    Ok(all_ok)
}

fn run_inspect(file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let lines = inspect_document(&read_document(file)?)?;

    match format {
        OutputFormat::Text => {
            for line in &lines {
                println!("{}", line.to_line());
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&lines).context("Failed to serialize share listing")?
        ),
    }

    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    match cli.command {
        Commands::Reconstruct {
            files,
            threshold,
            format,
        } => {
            if !run_reconstruct(&files, threshold, format)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Inspect { file, format } => {
            run_inspect(file.as_deref(), format)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
