//! Byte-size formatting, parsing and measurement.
//!
//! Sizes are expressed in binary units, each 1024 times the previous one:
//! `B, KB, MB, GB, TB, PB, EB, ZB, YB`.

use std::path::{Path, PathBuf};

use humansize::{BINARY, DECIMAL, format_size};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::SizeStyle;
use crate::error::{Error, Result};

/// Unit suffixes, indexed by power of 1024.
pub const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Fractional digits kept by the parser; enough for sub-byte precision at
/// every unit.
const MAX_FRACTION_DIGITS: usize = 19;

/// Format a byte count as a compact human-readable string such as `"1.5KB"`.
///
/// The unit is the largest one not exceeding the count. The scaled value is
/// rounded to two decimal places (ties go to the even digit) and always
/// printed with at least one fractional digit: `1024` gives `"1.0KB"`, `1100`
/// gives `"1.07KB"`. Zero is the literal `"0B"`.
///
/// # Errors
///
/// - [`Error::NegativeSize`] if `size` is below zero
/// - [`Error::SizeTooLarge`] if `size` is `1024^9` or more. A `u128` beyond
///   `i128::MAX` is reported as `SizeTooLarge(i128::MAX)`.
///
/// # Examples
///
/// ```
/// # use fx_lib::convert_size;
/// assert_eq!(convert_size(1536_u32)?, "1.5KB");
/// # Ok::<(), fx_lib::Error>(())
/// ```
pub fn convert_size<N: TryInto<i128>>(size: N) -> Result<String> {
    let size: i128 = size
        .try_into()
        .map_err(|_| Error::SizeTooLarge(i128::MAX))?;

    if size < 0 {
        return Err(Error::NegativeSize(size));
    }
    if size == 0 {
        return Ok("0B".to_string());
    }

    let bytes = size.unsigned_abs();
    let (index, divisor) = unit_for(bytes).ok_or(Error::SizeTooLarge(size))?;
    let hundredths = div_round_half_even(bytes * 100, divisor);

    Ok(format!("{}{}", render_hundredths(hundredths), UNITS[index]))
}

/// Format a byte count using one of the supported [`SizeStyle`]s.
///
/// `Compact` is [`convert_size`]; `Decimal` and `Binary` use `humansize`
/// (`1536` gives `"1.54 kB"` and `"1.50 KiB"`).
///
/// # Errors
///
/// Only the compact style can fail, see [`convert_size`].
pub fn format_size_with(bytes: u64, style: SizeStyle) -> Result<String> {
    match style {
        SizeStyle::Compact => convert_size(bytes),
        SizeStyle::Decimal => Ok(format_size(bytes, DECIMAL)),
        SizeStyle::Binary => Ok(format_size(bytes, BINARY)),
    }
}

/// Parse a size string such as `"100MB"`, `"1.5 kb"` or `"512"` into bytes.
///
/// The unit is optional (bytes by default), case-insensitive and may be
/// separated from the number by whitespace. Fractional values are truncated
/// to whole bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] if the string is empty, the number is not a
/// plain non-negative decimal, the unit is unknown, or the result does not fit
/// in a `u64`.
pub fn parse_size(input: &str) -> Result<u64> {
    let invalid = || Error::InvalidSize(input.to_string());
    let trimmed = input.trim();

    let split = trimmed
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);
    let number = number.trim_end();

    let unit = unit.to_ascii_uppercase();
    let multiplier = if unit.is_empty() {
        1
    } else {
        let index = UNITS
            .iter()
            .position(|candidate| *candidate == unit)
            .ok_or_else(invalid)?;
        1024_u128.pow(u32::try_from(index).map_err(|_| invalid())?)
    };

    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(invalid());
    }

    let whole_value: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let mut bytes = whole_value.checked_mul(multiplier).ok_or_else(invalid)?;

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if !fraction.is_empty() {
        let digits: u128 = fraction.parse().map_err(|_| invalid())?;
        let scale = 10_u128.pow(u32::try_from(fraction.len()).map_err(|_| invalid())?);
        let fractional = digits.checked_mul(multiplier).ok_or_else(invalid)? / scale;
        bytes = bytes.checked_add(fractional).ok_or_else(invalid)?;
    }

    u64::try_from(bytes).map_err(|_| invalid())
}

/// Total size in bytes of every regular file under `path`.
///
/// A path naming a regular file measures as that file. Symlinks are not
/// followed and unreadable entries are skipped, so a missing path measures
/// as zero.
#[must_use]
pub fn calculate_dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}

/// Measure several paths in parallel, returning sizes in input order.
#[must_use]
pub fn measure_paths(paths: &[PathBuf]) -> Vec<u64> {
    paths
        .par_iter()
        .map(|path| calculate_dir_size(path))
        .collect()
}

/// Index of the unit to render `bytes` with, and that unit's size in bytes.
fn unit_for(bytes: u128) -> Option<(usize, u128)> {
    let mut divisor = 1_u128;

    for index in 0..UNITS.len() {
        let next = divisor * 1024;
        if bytes < next {
            return Some((index, divisor));
        }
        divisor = next;
    }

    None
}

fn div_round_half_even(numerator: u128, denominator: u128) -> u128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    match (remainder * 2).cmp(&denominator) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + (quotient & 1),
    }
}

/// Render a value given in hundredths with one or two fractional digits.
fn render_hundredths(hundredths: u128) -> String {
    let whole = hundredths / 100;
    let fraction = hundredths % 100;

    if fraction % 10 == 0 {
        format!("{whole}.{}", fraction / 10)
    } else {
        format!("{whole}.{fraction:02}")
    }
}
