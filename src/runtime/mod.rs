//! Launcher startup: resolve, translate, delegate.
mod startup;

pub use startup::{run, LaunchExit};
