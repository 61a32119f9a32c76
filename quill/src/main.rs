// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod commands;
mod manifest;
mod reports;
mod template;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    cli.init_tracing();
    cli.run().await
}
