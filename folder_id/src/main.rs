//! folder_id CLI - Extract Google Drive folder IDs from URLs.

use std::collections::HashSet;
use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use folder_id::scan::{expand_patterns, scan_file, scan_reader, STDIN_SOURCE};
use folder_id::{Extraction, FolderIdError, Occurrence};

/// CLI tool for extracting Google Drive folder IDs.
#[derive(Parser)]
#[command(name = "folder_id")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, env = "FOLDER_ID_FORMAT", default_value = "text", global = true)]
    format: OutputFormat,

    /// Log verbosity (RUST_LOG directives take precedence).
    #[arg(long, value_enum, env = "FOLDER_ID_LOG", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the folder ID from each URL.
    Extract {
        /// Folder URLs. Read from stdin, one per line, when omitted.
        urls: Vec<String>,

        /// Fail if any URL has no folder ID.
        #[arg(long)]
        strict: bool,
    },

    /// Find folder URLs in text files.
    Scan {
        /// File patterns to scan (supports glob patterns like *.txt, links_{a,b}.txt).
        /// Reads stdin when omitted.
        patterns: Vec<String>,

        /// Print each folder ID only once.
        #[arg(long, short = 'u')]
        unique: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from(cli.log_level).into())
                .from_env_lossy(),
        )
        .init();

    match cli.command {
        Commands::Extract { urls, strict } => {
            let inputs = if urls.is_empty() {
                read_stdin_lines()?
            } else {
                urls
            };

            let extractions: Vec<Extraction> =
                inputs.iter().map(|input| Extraction::of(input)).collect();

            for extraction in extractions.iter().filter(|e| !e.is_match()) {
                warn!(input = %extraction.input, "no folder ID found");
            }

            print_records(&extractions, cli.format)?;

            if strict {
                if let Some(miss) = extractions.iter().find(|e| !e.is_match()) {
                    return Err(FolderIdError::NoFolderId(miss.input.clone()))
                        .context("Strict mode requires a folder ID for every input");
                }
            }
        }

        Commands::Scan { patterns, unique } => {
            let mut occurrences: Vec<Occurrence> = Vec::new();

            if patterns.is_empty() {
                let stdin = io::stdin();
                occurrences = scan_reader(STDIN_SOURCE, stdin.lock())
                    .context("Failed to scan standard input")?;
            } else {
                let files = expand_patterns(&patterns)
                    .with_context(|| format!("Invalid file patterns: {}", patterns.join(" ")))?;

                info!("Scanning {} file(s)", files.len());

                for path in &files {
                    let found = scan_file(path)
                        .with_context(|| format!("Failed to scan {:?}", path))?;
                    occurrences.extend(found);
                }
            }

            if unique {
                let mut seen = HashSet::new();
                occurrences.retain(|o| seen.insert(o.folder_id.clone()));
            }

            debug!(count = occurrences.len(), "scan finished");
            print_records(&occurrences, cli.format)?;
        }
    }

    Ok(())
}

/// Read non-blank lines from stdin.
fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = Vec::new();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read standard input")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }

    Ok(lines)
}

fn print_records<T: Serialize + Display>(records: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for record in records {
                println!("{}", record);
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(records).context("Failed to serialize output")?;
            println!("{}", json);
        }
    }

    Ok(())
}
