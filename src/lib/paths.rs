//! Shared path helpers for the sidecar redirect file.

use std::path::{Path, PathBuf};

/// Extension that replaces the launcher's own extension to name its redirect file.
pub const REDIRECT_EXTENSION: &str = "path.txt";

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Sidecar config path for a launcher binary: same directory and stem, `.path.txt` extension.
///
/// `rav1e` and `rav1e.exe` both map to `rav1e.path.txt`.
pub fn redirect_config_path(launcher: &Path) -> PathBuf {
    launcher.with_extension(REDIRECT_EXTENSION)
}
