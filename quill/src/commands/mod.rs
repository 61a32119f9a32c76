mod check;
mod emit;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use emit::EmitCommand;
use eyre::Result;
use tracing_subscriber::EnvFilter;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crate::manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "quill")]
#[command(version)]
#[command(about = "Write generated model files from a quill.toml manifest")]
pub(crate) struct Cli {
    /// Log emission details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Emit(cmd) => cmd.run().await,
            Commands::Check(cmd) => cmd.run(),
        }
    }

    /// Install the log subscriber. Warnings are printed by the reports, so
    /// logging stays quiet unless asked for.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_filter()));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Log filter used when `RUST_LOG` is unset.
    fn default_filter(&self) -> &'static str {
        if self.verbose {
            "quill=debug,quill_emit=debug,quill_format=debug"
        } else {
            "error"
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and write files for every model in quill.toml
    Emit(EmitCommand),

    /// Validate quill.toml and show where each file would be written
    Check(CheckCommand),
}
