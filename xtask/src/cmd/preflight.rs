use crate::repo;
use anyhow::Result;
use std::process::{Command, Stdio};

pub fn run() -> Result<()> {
    let root = repo::repo_root()?;
    run_step(&root, "cargo check --workspace", &["check", "--workspace"])?;
    run_step(&root, "cargo test --workspace", &["test", "--workspace"])?;
    run_step(
        &root,
        "cargo test --features propagate-exit-status",
        &["test", "--features", "propagate-exit-status"],
    )?;
    run_step(&root, "cargo fmt --all -- --check", &["fmt", "--all", "--", "--check"])?;
    run_step(
        &root,
        "cargo clippy --workspace -- -D warnings",
        &["clippy", "--workspace", "--", "-D", "warnings"],
    )?;
    run_step(&root, "cargo build --release", &["build", "--release"])?;
    Ok(())
}

fn run_step(root: &std::path::Path, label: &str, args: &[&str]) -> Result<()> {
    eprintln!("==> {label}");
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("{label} failed (status {status})");
    }
    Ok(())
}
