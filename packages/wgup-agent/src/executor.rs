use crate::{error::AgentError, AgentResult};
use std::{
    io,
    process::Command,
    sync::Arc,
};

/// Process-spawning capability. Injected into the [`Executor`] so tests can
/// substitute a recording fake.
pub trait CommandRunner: Send + Sync {
    /// Runs `command` through a shell, returning captured stdout.
    /// A non-zero exit is an `Err`.
    fn run(&self, command: &str) -> io::Result<String>;
}

/// Production runner: `/usr/bin/env sh -c <command>`.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> io::Result<String> {
        let output = Command::new("/usr/bin/env")
            .arg("sh")
            .arg("-c")
            .arg(command)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(io::Error::other(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Single chokepoint between the agent and the operating environment.
/// Every command is echoed to stdout before anything else happens; in
/// dry-run mode that echo is the only effect.
#[derive(Clone)]
pub struct Executor {
    runner: Arc<dyn CommandRunner>,
    dry_run: bool,
}

impl Executor {
    pub fn new(runner: Arc<dyn CommandRunner>, dry_run: bool) -> Self {
        Self { runner, dry_run }
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn execute(&self, command: &str) -> AgentResult<String> {
        println!("{command}");

        if self.dry_run {
            return Ok(String::new());
        }

        let stdout = self
            .runner
            .run(command)
            .map_err(|source| AgentError::CommandFailed {
                command: command.to_string(),
                source,
            })?;

        println!("{stdout}");

        Ok(stdout)
    }
}
