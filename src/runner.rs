use std::io::Write;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::clock::{format_timestamp, to_beijing};
use crate::error::Result;
use crate::output::{bright, bright_green, dim, render_banner, render_field};
use crate::runtime::RuntimeInfo;

/// Fixed parameters of a diagnostic run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Character repeated to frame the banner
    pub separator: char,

    /// Number of separator characters per framing line
    pub banner_width: usize,

    pub title: String,

    /// Number of simulated processing steps
    pub steps: u32,

    /// Blocking pause before each progress line
    pub step_delay: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            banner_width: default_banner_width(),
            title: default_title(),
            steps: default_steps(),
            step_delay: default_step_delay(),
        }
    }
}

fn default_separator() -> char {
    '='
}

fn default_banner_width() -> usize {
    50
}

fn default_title() -> String {
    "ScriptGuard diagnostic script".to_string()
}

fn default_steps() -> u32 {
    5
}

fn default_step_delay() -> Duration {
    Duration::from_secs(1)
}

/// Percentage reported after completing step `index` (zero-based) of `steps`.
pub fn progress_percent(index: u32, steps: u32) -> u32 {
    (index + 1) * 100 / steps.max(1)
}

/// Prints the diagnostic sequence: banner, Beijing time, runtime info,
/// a paced progress loop and a success line.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticRunner {
    config: RunnerConfig,
}

impl DiagnosticRunner {
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        self.run_at(out, Utc::now())
    }

    /// Same as [`run`](Self::run) with the clock reading supplied by the caller.
    pub fn run_at(&self, out: &mut impl Write, now: DateTime<Utc>) -> Result<()> {
        info!("Starting diagnostic run ({} steps)", self.config.steps);

        writeln!(
            out,
            "{}",
            render_banner(
                &self.config.title,
                self.config.separator,
                self.config.banner_width
            )
        )?;

        let beijing = to_beijing(now);
        debug!("Resolved Beijing time {beijing} from UTC {now}");
        writeln!(
            out,
            "\n{} {}",
            render_field("Execution time", format_timestamp(&beijing)),
            dim("(Beijing time)")
        )?;

        let runtime = RuntimeInfo::detect()?;
        debug!("Detected runtime: {runtime}");
        writeln!(out, "{}", render_field("Runtime version", &runtime.version))?;
        writeln!(
            out,
            "{}",
            render_field("Runtime path", runtime.executable.display())
        )?;

        writeln!(out, "\n{}", bright("Starting processing..."))?;
        out.flush()?;

        for index in 0..self.config.steps {
            debug!(
                "Step {}/{}: sleeping {:?}",
                index + 1,
                self.config.steps,
                self.config.step_delay
            );
            std::thread::sleep(self.config.step_delay);

            let percent = progress_percent(index, self.config.steps);
            writeln!(out, "{}", render_field("Progress", format!("{percent}%")))?;
            out.flush()?;
        }

        writeln!(
            out,
            "\n{}",
            bright_green("✅ Diagnostic script completed successfully!")
        )?;
        out.flush()?;

        info!("Diagnostic run finished");
        Ok(())
    }
}
