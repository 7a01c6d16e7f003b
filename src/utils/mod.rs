//! Utility functions and helpers.
//!
//! This module contains the byte-size helpers: compact formatting, parsing and
//! on-disk size measurement.

pub mod size;

pub use size::{calculate_dir_size, convert_size, format_size_with, measure_paths, parse_size};
