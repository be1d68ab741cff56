use std::{ffi::OsString, process::ExitCode};

use anyhow::Error;
use tracing::debug;

use crate::{
    resolver::{self, PathProvider},
    translate::{translate_and_invoke, ExitPolicy, Shell},
};

/// Bundles a launcher error message with the exit code to terminate with.
#[derive(Debug)]
pub struct LaunchExit {
    message: String,
    exit_code: u8,
}

impl LaunchExit {
    pub fn new(message: impl Into<String>, exit_code: u8) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self::new(format!("{err:#}"), 1)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    /// Print `<program>: <message>` to stderr and hand back the exit code.
    pub fn report(self, program: &str) -> ExitCode {
        eprintln!("{program}: {}", self.message);
        ExitCode::from(self.exit_code)
    }
}

/// Resolve the target encoder, then translate and run `args` through `shell`.
///
/// Configuration problems always fail. What happens after the target is known
/// is decided by `policy`.
pub fn run(
    provider: &impl PathProvider,
    shell: &impl Shell,
    policy: ExitPolicy,
    args: &[OsString],
) -> Result<u8, LaunchExit> {
    let target = resolver::resolve(provider).map_err(LaunchExit::from_error)?;

    let outcome = translate_and_invoke(&target, args, shell);
    let code = policy.exit_code(&outcome);
    if let Err(err) = outcome {
        if policy == ExitPolicy::Propagate {
            return Err(LaunchExit::new(format!("{err:#}"), code));
        }
        debug!(
            target: "svt_rav1e_shim::invoke",
            error = %err,
            "Delegation failed; exiting with success"
        );
    }
    Ok(code)
}
