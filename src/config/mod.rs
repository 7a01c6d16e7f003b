//! Configuration types and options for the application.
//!
//! This module contains the configuration structures shared by the library and
//! the `fx` binary: size rendering styles, output options and the persistent
//! configuration file.

pub mod file;
pub mod format;
pub mod output;

pub use file::FileConfig;
pub use format::{SizeOptions, SizeStyle};
pub use output::OutputOptions;
