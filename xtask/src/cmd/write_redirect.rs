use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use svt_rav1e_shim::lib::paths::redirect_config_path;

/// Write `<launcher-stem>.path.txt` beside `launcher`, naming `target` on its only line.
pub fn run(launcher: &Path, target: &str, force: bool) -> Result<()> {
    if target.trim().is_empty() {
        bail!("target must not be empty");
    }
    if target.contains(['\n', '\r']) {
        bail!("target must be a single line");
    }

    let config_path = redirect_config_path(launcher);
    if config_path.exists() && !force {
        bail!(
            "{} already exists; re-run with --force to overwrite",
            config_path.display()
        );
    }

    fs::write(&config_path, format!("{target}\n"))
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    println!("{} -> {target}", config_path.display());
    Ok(())
}
