//! Locates the real encoder from the launcher's own location and its sidecar file.
use std::{
    env, io,
    path::{Path, PathBuf},
};

use crate::lib::{
    errors::ConfigError,
    paths::{is_nonempty_absolute, redirect_config_path},
    telemetry,
};

pub mod config;

pub use config::RedirectConfig;

/// Source of the running launcher's location.
pub trait PathProvider {
    fn launcher_path(&self) -> io::Result<PathBuf>;
}

/// Asks the operating system for the running executable. Never consults argv[0].
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentExe;

impl PathProvider for CurrentExe {
    fn launcher_path(&self) -> io::Result<PathBuf> {
        env::current_exe()
    }
}

/// Fixed location, for callers that already know where the launcher lives.
#[derive(Debug, Clone)]
pub struct FixedPath(pub PathBuf);

impl PathProvider for FixedPath {
    fn launcher_path(&self) -> io::Result<PathBuf> {
        Ok(self.0.clone())
    }
}

/// Absolute path of the running launcher binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherLocation(PathBuf);

impl LauncherLocation {
    pub fn detect(provider: &impl PathProvider) -> Result<Self, ConfigError> {
        let path = provider
            .launcher_path()
            .map_err(|source| ConfigError::CurrentExe { source })?;
        if !is_nonempty_absolute(&path) {
            return Err(ConfigError::RelativeLauncher { path });
        }
        Ok(Self(path))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Directory holding the launcher; relative targets are joined onto it.
    pub fn directory(&self) -> &Path {
        self.0.parent().unwrap_or(&self.0)
    }

    pub fn config_path(&self) -> PathBuf {
        redirect_config_path(&self.0)
    }
}

/// Absolute path of the encoder to invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget(PathBuf);

impl ResolvedTarget {
    /// Use `target` verbatim when absolute, otherwise join it to the launcher's directory.
    pub fn from_config(location: &LauncherLocation, target: &Path) -> Self {
        if target.is_absolute() {
            Self(target.to_path_buf())
        } else {
            Self(location.directory().join(target))
        }
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Resolve the target encoder for the launcher reported by `provider`.
pub fn resolve(provider: &impl PathProvider) -> Result<ResolvedTarget, ConfigError> {
    let location = LauncherLocation::detect(provider)?;
    let config = RedirectConfig::load_from_path(&location.config_path())?;
    let target = ResolvedTarget::from_config(&location, &config.target_path);
    telemetry::emit_target_resolved(location.path(), &config.source_path, target.path());
    Ok(target)
}
