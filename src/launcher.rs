//! A single invocation of the bundled analyzer.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use anyhow::Context;

use crate::env;
use crate::relay;
use crate::target;

/// Everything needed to invoke the analyzer, resolved once per run.
pub struct Launcher {
    /// Directory containing both the launcher and the analyzer.
    dir: PathBuf,

    /// Resolved path of the analyzer executable.
    analyzer: PathBuf,

    /// Arguments forwarded verbatim, in order.
    args: Vec<OsString>,

    /// Full environment the analyzer runs with.
    env: BTreeMap<OsString, OsString>,
}

impl Launcher {
    /// Resolves an invocation from the launcher's own location and command
    /// line.
    pub fn from_env() -> anyhow::Result<Self> {
        let dir = target::launcher_dir()?;
        let analyzer = target::locate(&dir)?;
        let args = std::env::args_os().skip(1).collect();

        Ok(Self {
            dir,
            analyzer,
            args,
            env: env::child_env(),
        })
    }

    /// Runs the analyzer and relays its output, returning its exit status.
    pub fn run(&self) -> anyhow::Result<ExitStatus> {
        let mut command = Command::new(&self.analyzer);
        command
            .args(&self.args)
            .current_dir(&self.dir)
            .env_clear()
            .envs(&self.env);

        relay::run(&mut command)
            .with_context(|| format!("Failed to run `{}`", self.analyzer.display()))
    }
}
