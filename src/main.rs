//! Entry point for the `rav1e` compatibility launcher.
use std::{env, ffi::OsString, process::ExitCode};

use svt_rav1e_shim::{
    lib::telemetry,
    resolver::CurrentExe,
    runtime::{self, LaunchExit},
    translate::{ExitPolicy, SystemShell},
};

fn main() -> ExitCode {
    let mut args = env::args_os();
    let program = args
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string());
    let args: Vec<OsString> = args.collect();

    match bootstrap(&args) {
        Ok(code) => ExitCode::from(code),
        Err(exit) => exit.report(&program),
    }
}

fn bootstrap(args: &[OsString]) -> Result<u8, LaunchExit> {
    telemetry::init_tracing().map_err(LaunchExit::from_error)?;
    runtime::run(&CurrentExe, &SystemShell, ExitPolicy::from_build(), args)
}
