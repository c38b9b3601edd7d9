mod cli;
mod clock;
mod error;
mod output;
mod runner;
mod runtime;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting sgprobe - ScriptGuard diagnostic probe");
    cli.execute()?;

    Ok(())
}
