//! Size rendering configuration.
//!
//! This module defines how byte counts are rendered and how on-disk
//! measurement is parallelised.

use clap::ValueEnum;
use serde::Deserialize;

/// Enumeration of supported size rendering styles.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeStyle {
    /// Binary units without a space, e.g. `1.5KB`
    #[default]
    Compact,

    /// SI units (powers of 1000), e.g. `1.54 kB`
    Decimal,

    /// IEC units (powers of 1024), e.g. `1.50 KiB`
    Binary,
}

/// Configuration for the `size` and `du` commands.
#[derive(Clone, Debug)]
pub struct SizeOptions {
    /// How byte counts are rendered
    pub style: SizeStyle,

    /// Number of threads used to measure paths (0 = rayon default)
    pub threads: usize,
}
