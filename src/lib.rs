//! Library crate root for the rav1e-to-SVT-AV1 compatibility launcher.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod resolver;
pub mod runtime;
pub mod translate;
