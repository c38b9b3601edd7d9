use std::fmt;
use std::path::PathBuf;

use crate::error::{ProbeError, Result};

/// Identifies the program hosting the probe: what is running and from where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub version: String,
    pub executable: PathBuf,
}

impl RuntimeInfo {
    pub fn detect() -> Result<Self> {
        let executable = std::env::current_exe().map_err(ProbeError::Environment)?;

        Ok(Self {
            version: version_string(),
            executable,
        })
    }
}

impl fmt::Display for RuntimeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.version, self.executable.display())
    }
}

/// e.g. `sgprobe 0.1.0 (linux/x86_64)`
pub fn version_string() -> String {
    format!(
        "{} {} ({}/{})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
