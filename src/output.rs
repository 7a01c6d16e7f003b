//! Structured results of the `fx` commands.
//!
//! Each command first builds one of these reports, then either prints it for
//! humans or serialises it as a single JSON document when `--json` is active.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::chunk::chunk_iter;
use crate::config::SizeStyle;
use crate::transform::{Transform, apply_transforms};
use crate::utils::{format_size_with, measure_paths, parse_size};

/// A formatted byte count.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SizeEntry {
    /// The value as given by the user
    pub input: String,
    pub bytes: u64,
    pub formatted: String,
}

/// A measured path.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub path: PathBuf,
    pub bytes: u64,
    pub formatted: String,
}

/// Top-level JSON document, tagged with the command that produced it.
#[derive(Serialize, Debug)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum JsonOutput {
    Size {
        entries: Vec<SizeEntry>,
    },
    Du {
        entries: Vec<PathEntry>,
        total_bytes: u64,
        total: String,
    },
    Chunk {
        chunk_size: usize,
        chunks: Vec<Vec<String>>,
    },
    Pipe {
        transforms: Vec<Transform>,
        lines: Vec<String>,
    },
}

/// Parse and format every input of the `size` command.
///
/// Inputs are raw byte counts (`"1536"`) or size strings (`"1.5KB"`).
///
/// # Errors
///
/// Fails on the first input that cannot be parsed or formatted.
pub fn size_entries(inputs: &[String], style: SizeStyle) -> Result<Vec<SizeEntry>> {
    inputs
        .iter()
        .map(|input| -> Result<SizeEntry> {
            let bytes = parse_size(input)?;
            let formatted = format_size_with(bytes, style)?;

            Ok(SizeEntry {
                input: input.clone(),
                bytes,
                formatted,
            })
        })
        .collect()
}

/// Measure and format every path of the `du` command.
///
/// # Errors
///
/// Fails if a path does not exist or a size cannot be formatted.
pub fn path_entries(paths: &[PathBuf], style: SizeStyle) -> Result<Vec<PathEntry>> {
    if let Some(missing) = paths.iter().find(|path| !path.exists()) {
        anyhow::bail!("Path does not exist: {}", missing.display());
    }

    paths
        .iter()
        .zip(measure_paths(paths))
        .map(|(path, bytes)| -> Result<PathEntry> {
            Ok(PathEntry {
                path: path.clone(),
                bytes,
                formatted: format_size_with(bytes, style)?,
            })
        })
        .collect()
}

/// Lazily group the lines of `reader` into chunks of `size` lines.
///
/// Lines are read only as chunks are requested. A read error surfaces as an
/// `Err` item after every complete chunk before it.
///
/// # Errors
///
/// Fails if `size` is zero.
pub fn line_chunks(
    reader: impl BufRead,
    size: usize,
) -> Result<impl Iterator<Item = Result<Vec<String>>>> {
    Ok(chunk_iter(reader.lines(), size)?.map(|chunk| {
        chunk
            .into_iter()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read input")
    }))
}

/// Read lines from `reader` and group them into chunks of `size` lines.
///
/// # Errors
///
/// Fails if `size` is zero or reading fails.
pub fn chunk_lines(reader: impl BufRead, size: usize) -> Result<Vec<Vec<String>>> {
    line_chunks(reader, size)?.collect()
}

/// Write each chunk of `reader` to `out` as soon as it is complete, with a
/// blank line between chunks. Returns the number of chunks written.
///
/// # Errors
///
/// Fails if `size` is zero, reading fails or writing fails. Chunks completed
/// before a read error have already been written.
pub fn write_chunks(reader: impl BufRead, size: usize, out: &mut impl Write) -> Result<usize> {
    let mut written = 0;

    for chunk in line_chunks(reader, size)? {
        let chunk = chunk?;
        if written > 0 {
            writeln!(out)?;
        }
        for line in &chunk {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        written += 1;
    }

    Ok(written)
}

/// Lazily run every line of `reader` through `transforms`.
pub fn transformed_lines(
    reader: impl BufRead,
    transforms: &[Transform],
) -> impl Iterator<Item = Result<String>> {
    reader.lines().map(|line| -> Result<String> {
        let line = line.context("Failed to read input")?;
        Ok(apply_transforms(line, transforms))
    })
}

/// Run every line of `reader` through `transforms`.
///
/// # Errors
///
/// Fails if reading fails.
pub fn pipe_lines(reader: impl BufRead, transforms: &[Transform]) -> Result<Vec<String>> {
    transformed_lines(reader, transforms).collect()
}

/// Write every transformed line of `reader` to `out` as soon as it is read.
/// Returns the number of lines written.
///
/// # Errors
///
/// Fails if reading or writing fails. Lines before a read error have already
/// been written.
pub fn write_transformed(
    reader: impl BufRead,
    transforms: &[Transform],
    out: &mut impl Write,
) -> Result<usize> {
    let mut written = 0;

    for line in transformed_lines(reader, transforms) {
        writeln!(out, "{}", line?)?;
        out.flush()?;
        written += 1;
    }

    Ok(written)
}
