mod cmd;
mod repo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (check/test/fmt/clippy/build).
    Preflight,
    /// Write the `.path.txt` redirect file next to a launcher binary.
    WriteRedirect {
        /// Launcher binary the redirect file belongs to (e.g. target/release/rav1e)
        #[arg(value_name = "LAUNCHER")]
        launcher: std::path::PathBuf,
        /// Encoder to run, absolute or relative to the launcher's directory
        #[arg(value_name = "TARGET")]
        target: String,
        /// Overwrite an existing redirect file
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight => {
            cmd::preflight::run()?;
        }
        Command::WriteRedirect {
            launcher,
            target,
            force,
        } => {
            cmd::write_redirect::run(&launcher, &target, force)?;
        }
    }
    Ok(())
}
