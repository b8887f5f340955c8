//! External process execution
//!
//! Every package-manager call, bootstrap script and build-driver step goes
//! through [`CommandRunner`], so the decision logic can be driven by a
//! scripted fake instead of real installers.

use std::fmt;
use std::io;
use std::process::Command;

/// A program and its argument vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Exit status of a finished process
///
/// `code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    pub code: Option<i32>,
}

impl CommandOutcome {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Runs external commands to completion
pub trait CommandRunner {
    /// Runs `command` and waits for it to exit
    ///
    /// # Returns
    /// * `Ok(outcome)` once the process has exited, whatever its status
    /// * `Err(io::Error)` if the process could not be started
    fn run(&mut self, command: &CommandLine) -> io::Result<CommandOutcome>;
}

/// Runs commands on the host, inheriting stdio so installer output stays visible
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &CommandLine) -> io::Result<CommandOutcome> {
        log::debug!("Running: {}", command);

        let status = Command::new(&command.program)
            .args(&command.args)
            .status()?;

        log::debug!("{} finished with {:?}", command.program, status.code());
        Ok(CommandOutcome {
            code: status.code(),
        })
    }
}

/// Logs commands instead of running them; every command reports success
#[derive(Debug, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&mut self, command: &CommandLine) -> io::Result<CommandOutcome> {
        log::info!("[DRY RUN] {}", command);
        Ok(CommandOutcome::from_code(0))
    }
}
