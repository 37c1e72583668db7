//! Command-line surface: argument parsing and logging initialization.

use clap::Parser;

/// Run a Universal Machine program image.
#[derive(Debug, Parser)]
#[command(name = "um", version, about)]
pub struct Cli {
    /// Path to the UM program file to execute.
    pub program: std::path::PathBuf,

    /// Raise logging verbosity. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Trace every dispatched instruction at the `trace` log level.
    #[arg(long, env = "UM_TRACE_INSTRUCTIONS")]
    pub trace_instructions: bool,
}

impl Cli {
    /// Filter directive implied by `-v` repetition, least to most verbose.
    fn verbosity_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Installs a `tracing-subscriber` writing to stderr, honoring both
    /// `-v` and `RUST_LOG` (the latter takes precedence when set).
    pub fn init_logging(&self) {
        let default_directive = if self.trace_instructions { "trace" } else { self.verbosity_directive() };

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }
}
