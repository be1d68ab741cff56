//! Tracing initialization and launch event helpers.

use std::{ffi::OsString, path::Path, process::ExitStatus};

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use crate::translate::CommandLine;

/// Default filter; keeps the launcher silent so the encoder owns stderr.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` on stderr, honouring `RUST_LOG`.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

pub fn emit_target_resolved(launcher: &Path, config_path: &Path, target: &Path) {
    debug!(
        target: "svt_rav1e_shim::resolver",
        launcher = %launcher.display(),
        config_path = %config_path.display(),
        target = %target.display(),
        "Resolved redirect target"
    );
}

pub fn emit_translated(original: &[OsString], command: &CommandLine) {
    debug!(
        target: "svt_rav1e_shim::translate",
        program = %command.program().display(),
        original = ?original,
        translated = ?command.args(),
        "Translated argument vector"
    );
}

pub fn emit_child_finished(status: &ExitStatus) {
    debug!(
        target: "svt_rav1e_shim::invoke",
        exit_code = status.code(),
        success = status.success(),
        "Delegated command finished"
    );
}
