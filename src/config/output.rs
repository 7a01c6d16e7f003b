//! Output configuration shared by every command.

/// Controls how results and diagnostics are reported.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputOptions {
    /// Emit a single JSON document on stdout instead of human-readable output
    pub json: bool,

    /// Print diagnostic messages to stderr
    pub verbose: bool,
}

impl OutputOptions {
    /// Print a diagnostic line to stderr when verbose output is enabled.
    pub fn debug(&self, message: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{}", message.as_ref());
        }
    }
}
