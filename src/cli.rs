use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fx_lib::config::{FileConfig, OutputOptions, SizeOptions, SizeStyle};
use fx_lib::transform::Transform;

/// Lines per chunk when neither the CLI nor the config file sets one.
pub(crate) const DEFAULT_CHUNK_SIZE: usize = 10;

#[derive(Args)]
struct OutputArgs {
    /// Emit a single JSON document instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    /// Print diagnostic messages to stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Args)]
pub(crate) struct StyleArgs {
    /// How sizes are rendered
    #[arg(short = 's', long, value_enum)]
    style: Option<SizeStyle>,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Format byte counts (e.g. `1536` or `1.5KB`) as human-readable sizes
    Size {
        /// Byte counts, optionally with a unit suffix
        #[arg(required = true)]
        sizes: Vec<String>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Measure files and directories on disk
    Du {
        /// Paths to measure
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,

        /// The number of threads to use for measuring
        #[arg(short = 't', long)]
        threads: Option<usize>,
    },

    /// Split input lines into groups of a fixed size
    Chunk {
        /// Number of lines per group
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// File to read; standard input when omitted
        file: Option<PathBuf>,
    },

    /// Thread each input line through a sequence of transforms
    Pipe {
        /// Transform to apply, in order; may be repeated
        #[arg(short = 't', long = "transform", value_enum, action = clap::ArgAction::Append)]
        transforms: Vec<Transform>,

        /// Text to transform; lines of standard input when omitted
        text: Option<String>,
    },
}

#[derive(Parser)]
#[command(name = "fx")]
#[command(about = "Format byte sizes, chunk lines and pipe text through transforms")]
pub(crate) struct Cli {
    /// Output options
    #[command(flatten)]
    output: OutputArgs,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

impl Cli {
    pub(crate) fn output_options(&self, file_config: &FileConfig) -> OutputOptions {
        OutputOptions {
            json: self.output.json || file_config.json.unwrap_or(false),
            verbose: self.output.verbose || file_config.verbose.unwrap_or(false),
        }
    }

    /// Whether `--json` was passed, before any config file is read.
    pub(crate) fn json(&self) -> bool {
        self.output.json
    }
}

impl StyleArgs {
    pub(crate) fn size_options(
        &self,
        threads: Option<usize>,
        file_config: &FileConfig,
    ) -> SizeOptions {
        SizeOptions {
            style: self
                .style
                .or(file_config.size.style)
                .unwrap_or_default(),
            threads: threads.or(file_config.size.threads).unwrap_or(0),
        }
    }
}

pub(crate) fn chunk_size(size: Option<usize>, file_config: &FileConfig) -> usize {
    size.or(file_config.chunk.size)
        .unwrap_or(DEFAULT_CHUNK_SIZE)
}

pub(crate) fn transforms(cli: &[Transform], file_config: &FileConfig) -> Vec<Transform> {
    if cli.is_empty() {
        file_config.pipe.transforms.clone().unwrap_or_default()
    } else {
        cli.to_vec()
    }
}
