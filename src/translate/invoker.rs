//! Hands the rendered command line to the platform command interpreter.
use std::{
    ffi::{OsStr, OsString},
    io::{self, Write},
    process::{Command, ExitStatus},
};

use tracing::debug;

use super::{
    command_line::{CommandLine, Platform},
    table::translate_args,
};
use crate::{
    lib::{errors::DelegationError, telemetry},
    resolver::ResolvedTarget,
};

/// Synchronous "run this command line" facility.
pub trait Shell {
    fn platform(&self) -> Platform;
    fn run(&self, line: &OsStr) -> Result<ExitStatus, DelegationError>;
}

/// `/bin/sh -c` on Unix, `cmd.exe /C` on Windows. Standard streams are inherited.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

#[cfg(unix)]
impl Shell for SystemShell {
    fn platform(&self) -> Platform {
        Platform::current()
    }

    fn run(&self, line: &OsStr) -> Result<ExitStatus, DelegationError> {
        const SHELL: &str = "/bin/sh";
        Command::new(SHELL)
            .arg("-c")
            .arg(line)
            .status()
            .map_err(|source| DelegationError::Spawn {
                shell: SHELL,
                source,
            })
    }
}

#[cfg(windows)]
impl Shell for SystemShell {
    fn platform(&self) -> Platform {
        Platform::current()
    }

    fn run(&self, line: &OsStr) -> Result<ExitStatus, DelegationError> {
        use std::os::windows::process::CommandExt;

        const SHELL: &str = "cmd.exe";
        // raw_arg keeps the line exactly as rendered; cmd does its own parsing.
        Command::new(SHELL)
            .raw_arg("/C")
            .raw_arg(line)
            .status()
            .map_err(|source| DelegationError::Spawn {
                shell: SHELL,
                source,
            })
    }
}

/// How the launcher's own exit code relates to the delegated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitPolicy {
    /// Exit 0 whatever the encoder did.
    AlwaysSuccess,
    /// Exit with the encoder's code; 1 when it has none or could not be launched.
    Propagate,
}

impl ExitPolicy {
    /// Policy selected by the `propagate-exit-status` feature.
    pub const fn from_build() -> Self {
        if cfg!(feature = "propagate-exit-status") {
            ExitPolicy::Propagate
        } else {
            ExitPolicy::AlwaysSuccess
        }
    }

    pub fn exit_code(&self, outcome: &Result<ExitStatus, DelegationError>) -> u8 {
        match (self, outcome) {
            (ExitPolicy::AlwaysSuccess, _) => 0,
            (ExitPolicy::Propagate, Ok(status)) => status
                .code()
                .and_then(|code| u8::try_from(code).ok())
                .unwrap_or(1),
            (ExitPolicy::Propagate, Err(_)) => 1,
        }
    }
}

/// Translate `args`, render the command line for `shell`, and run it to completion.
pub fn translate_and_invoke(
    target: &ResolvedTarget,
    args: &[OsString],
    shell: &impl Shell,
) -> Result<ExitStatus, DelegationError> {
    let command = CommandLine::new(target.path(), translate_args(args));
    telemetry::emit_translated(args, &command);

    let line = command.render(shell.platform());
    if cfg!(debug_assertions) {
        eprintln!("{}", line.to_string_lossy());
    }

    flush_std_streams();
    let status = shell.run(&line)?;
    telemetry::emit_child_finished(&status);
    Ok(status)
}

// Keeps our buffered output ahead of the child's.
fn flush_std_streams() {
    if let Err(err) = io::stdout().flush() {
        debug!(target: "svt_rav1e_shim::invoke", error = %err, "stdout flush failed");
    }
    if let Err(err) = io::stderr().flush() {
        debug!(target: "svt_rav1e_shim::invoke", error = %err, "stderr flush failed");
    }
}
