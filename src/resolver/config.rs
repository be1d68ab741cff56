//! Sidecar redirect file loading.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::lib::errors::ConfigError;

/// Contents of a `<launcher>.path.txt` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectConfig {
    /// First line of the file, line terminator removed. Absolute or relative to the launcher.
    pub target_path: PathBuf,
    /// File the target was read from.
    pub source_path: PathBuf,
}

impl RedirectConfig {
    /// Read the first line of `path`. Anything after it is ignored.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut line = String::new();
        BufReader::new(file)
            .read_line(&mut line)
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let target = strip_line_terminator(&line);
        if target.is_empty() {
            return Err(ConfigError::EmptyTarget {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            target_path: PathBuf::from(target),
            source_path: path.to_path_buf(),
        })
    }
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
