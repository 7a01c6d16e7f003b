//! # fx-lib
//!
//! Small, independent utilities that keep showing up in scripts and tools:
//!
//! - [`pipe`], [`try_pipe`], [`pipe!`](crate::pipe!) and [`Pipeline`]: thread a value through
//!   an ordered list of functions
//! - [`convert_size`]: render a byte count as `"1.5KB"`
//! - [`chunks`] and [`chunk_iter`]: lazily split a sequence into fixed-size
//!   chunks
//!
//! The `fx` binary exposes each utility from the command line.

pub mod chunk;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod transform;
pub mod utils;

pub use chunk::{ChunkIter, Chunks, chunk_iter, chunks};
pub use error::{Error, Result};
pub use pipeline::{Pipeline, pipe, try_pipe};
pub use utils::{convert_size, parse_size};
