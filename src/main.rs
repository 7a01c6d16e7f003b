//! # fx
//!
//! Command-line front end for `fx-lib`.
//!
//! ## Usage
//!
//! ```bash
//! # Format byte counts
//! fx size 1536 1048576 2.5GB
//!
//! # Measure directories in parallel
//! fx du ~/Downloads target --style binary
//!
//! # Print a file in groups of 5 lines
//! fx chunk -n 5 notes.txt
//!
//! # Normalise identifiers
//! cat names.txt | fx pipe -t trim -t snake
//! ```
//!
//! Defaults for every command can be set in `~/.config/fx-lib/config.toml`.

mod cli;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use colored::Colorize;
use fx_lib::config::{FileConfig, OutputOptions, SizeOptions};
use fx_lib::output::{
    JsonOutput, chunk_lines, path_entries, pipe_lines, size_entries, write_chunks,
    write_transformed,
};
use fx_lib::transform::Transform;
use fx_lib::utils::format_size_with;

/// Entry point for the fx application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err:#}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Loads the persistent configuration file (if present)
/// 3. Resolves per-command options (CLI > config file > defaults)
/// 4. Runs the selected command and prints its result
///
/// # Errors
///
/// This function can return errors from:
/// - Loading an explicitly requested configuration file
/// - Parsing sizes or chunk sizes
/// - Reading input files or standard input
/// - Thread pool configuration
/// - JSON serialization
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let file_config = match &args.config {
        Some(path) => FileConfig::load_from(path)?,
        None => match FileConfig::load() {
            Ok(config) => config,
            Err(e) => {
                if !args.json() {
                    eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
                }
                FileConfig::default()
            }
        },
    };

    let output = args.output_options(&file_config);

    match &args.command {
        Command::Size { sizes, style } => {
            let options = style.size_options(None, &file_config);
            run_size(sizes, &options, output)
        }
        Command::Du {
            paths,
            style,
            threads,
        } => {
            let options = style.size_options(*threads, &file_config);
            run_du(paths, &options, output)
        }
        Command::Chunk { size, file } => {
            let size = cli::chunk_size(*size, &file_config);
            let reader = open_input(file.as_deref())?;
            run_chunk(reader, size, output)
        }
        Command::Pipe { transforms, text } => {
            let transforms = cli::transforms(transforms, &file_config);
            let reader: Box<dyn BufRead> = match text {
                Some(text) => Box::new(Cursor::new(text.clone())),
                None => Box::new(io::stdin().lock()),
            };
            run_pipe(reader, transforms, output)
        }
    }
}

fn run_size(sizes: &[String], options: &SizeOptions, output: OutputOptions) -> Result<()> {
    let entries = size_entries(sizes, options.style)?;

    if output.json {
        return print_json(&JsonOutput::Size { entries });
    }

    for entry in &entries {
        println!("{}\t{}", entry.formatted.bold(), entry.input.dimmed());
    }

    Ok(())
}

fn run_du(paths: &[PathBuf], options: &SizeOptions, output: OutputOptions) -> Result<()> {
    if options.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(options.threads)
            .build_global()?;
    }
    output.debug(format!(
        "Measuring {} path(s) with {} thread(s)",
        paths.len(),
        rayon::current_num_threads()
    ));

    let entries = path_entries(paths, options.style)?;
    let total_bytes: u64 = entries.iter().map(|entry| entry.bytes).sum();
    let total = format_size_with(total_bytes, options.style)?;

    if output.json {
        return print_json(&JsonOutput::Du {
            entries,
            total_bytes,
            total,
        });
    }

    for entry in &entries {
        println!("{}\t{}", entry.formatted.bold(), entry.path.display());
    }
    if entries.len() > 1 {
        println!("{}\t{}", total.bold().green(), "total".green());
    }

    Ok(())
}

fn run_chunk(reader: Box<dyn BufRead>, size: usize, output: OutputOptions) -> Result<()> {
    if output.json {
        let chunks = chunk_lines(reader, size)?;
        return print_json(&JsonOutput::Chunk {
            chunk_size: size,
            chunks,
        });
    }

    let written = write_chunks(reader, size, &mut io::stdout().lock())?;
    output.debug(format!("Split input into {written} chunk(s) of up to {size} line(s)"));

    Ok(())
}

fn run_pipe(
    reader: Box<dyn BufRead>,
    transforms: Vec<Transform>,
    output: OutputOptions,
) -> Result<()> {
    output.debug(format!(
        "Applying {} transform(s): {transforms:?}",
        transforms.len()
    ));

    if output.json {
        let lines = pipe_lines(reader, &transforms)?;
        return print_json(&JsonOutput::Pipe { transforms, lines });
    }

    write_transformed(reader, &transforms, &mut io::stdout().lock())?;

    Ok(())
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn print_json(output: &JsonOutput) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}
