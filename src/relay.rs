//! Relays the analyzer's output back through the launcher.

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

/// How the analyzer's stdout/stderr reach the launcher's own streams.
#[derive(Clone, Copy)]
pub enum Strategy {
    /// Collect the output after completion, decode it as UTF-8 with lossy
    /// substitution, and re-emit it.
    Captured,

    /// Let the analyzer inherit the launcher's streams directly.
    Passthrough,
}

/// Strategies in the order they are attempted; the first one that completes
/// wins.
pub const STRATEGIES: [Strategy; 2] = [Strategy::Captured, Strategy::Passthrough];

impl Strategy {
    fn run(self, command: &mut Command) -> std::io::Result<ExitStatus> {
        match self {
            Self::Captured => {
                // `output()` would otherwise close the child's stdin.
                let output = command
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()?;

                let mut stdout = std::io::stdout().lock();
                stdout.write_all(String::from_utf8_lossy(&output.stdout).as_bytes())?;
                stdout.flush()?;

                let mut stderr = std::io::stderr().lock();
                stderr.write_all(String::from_utf8_lossy(&output.stderr).as_bytes())?;
                stderr.flush()?;

                Ok(output.status)
            }
            Self::Passthrough => command
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status(),
        }
    }
}

/// Runs `command`, trying each strategy of [`STRATEGIES`] in order and
/// returning the exit status of the first attempt that completes.
pub fn run(command: &mut Command) -> std::io::Result<ExitStatus> {
    let mut last_error = None;
    for strategy in STRATEGIES {
        match strategy.run(command) {
            Ok(status) => return Ok(status),
            Err(e) => last_error = Some(e),
        }
    }

    Err(last_error.unwrap_or_else(|| std::io::Error::other("no relay strategy attempted")))
}
