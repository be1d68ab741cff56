use std::env;
use std::path::{Path, PathBuf};

/// Nearest ancestor of the working directory that holds the workspace manifest.
pub fn repo_root() -> anyhow::Result<PathBuf> {
    let mut dir = env::current_dir()?;
    loop {
        if is_workspace_root(&dir) {
            return Ok(dir);
        }
        if !dir.pop() {
            anyhow::bail!("failed to find workspace root (no Cargo.toml with [workspace] found)");
        }
    }
}

fn is_workspace_root(dir: &Path) -> bool {
    std::fs::read_to_string(dir.join("Cargo.toml"))
        .map(|manifest| manifest.contains("[workspace]"))
        .unwrap_or(false)
}
