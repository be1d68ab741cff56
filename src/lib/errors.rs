use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while locating or reading the redirect configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The operating environment could not report the running binary.
    #[error("Can't determine the launcher's own location")]
    CurrentExe {
        #[source]
        source: io::Error,
    },
    /// The reported launcher location is not absolute.
    #[error("Launcher location {path} is not an absolute path")]
    RelativeLauncher { path: PathBuf },
    /// The sidecar file is missing or could not be opened.
    #[error("Can't open config file: \"{path}\"")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The sidecar file was opened but reading its first line failed.
    #[error("Can't read config file: \"{path}\"")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The sidecar file exists but names no target.
    #[error("Config file \"{path}\" does not name a target executable on its first line")]
    EmptyTarget { path: PathBuf },
}

impl ConfigError {
    /// Path of the configuration file involved, when one was derived.
    pub fn config_path(&self) -> Option<&PathBuf> {
        match self {
            ConfigError::Open { path, .. }
            | ConfigError::Read { path, .. }
            | ConfigError::EmptyTarget { path } => Some(path),
            ConfigError::CurrentExe { .. } | ConfigError::RelativeLauncher { .. } => None,
        }
    }
}

/// Failure of the platform's command execution facility itself.
#[derive(Debug, Error)]
pub enum DelegationError {
    #[error("Failed to launch command interpreter `{shell}`: {source}")]
    Spawn {
        shell: &'static str,
        #[source]
        source: io::Error,
    },
}
