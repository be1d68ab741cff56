//! Argument translation and delegated invocation.
pub mod command_line;
pub mod invoker;
pub mod table;

pub use command_line::{CommandLine, Platform};
pub use invoker::{translate_and_invoke, ExitPolicy, Shell, SystemShell};
pub use table::{lookup, translate_args, Action, TRANSLATION_TABLE};
