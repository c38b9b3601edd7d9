use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::runner::DiagnosticRunner;

#[derive(Parser, Debug)]
#[command(name = "sgprobe")]
#[command(
    author,
    version,
    about = "ScriptGuard diagnostic probe",
    long_about = "Prints a banner, the current Beijing time (UTC+8), runtime version and path, \
                  then runs a five-step paced progress loop. Takes no options."
)]
pub struct Cli {}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        info!("Running diagnostic with default configuration");

        let runner = DiagnosticRunner::default();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        runner.run(&mut out).context("diagnostic run failed")?;

        Ok(())
    }
}
