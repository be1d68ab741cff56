//! Token-level rewrite rules from the rav1e command line to the SVT-AV1 one.
use std::ffi::{OsStr, OsString};

/// What to emit in place of a matched token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Emit these tokens, each as its own argument.
    Replace(&'static [&'static str]),
    /// Emit nothing.
    Suppress,
}

/// Exact-match rules; first match wins. Value arguments that follow a renamed
/// flag are not rules of their own and pass through on the next token.
pub const TRANSLATION_TABLE: &[(&str, Action)] = &[
    // stdin marker becomes an explicit input flag
    ("-", Action::Replace(&["-i", "-"])),
    ("--output", Action::Replace(&["-b"])),
    ("--photon-noise-table", Action::Replace(&["--fgs-table"])),
    // overwrite confirmation; SVT-AV1 has no equivalent
    ("-y", Action::Suppress),
];

/// Rule for a whole token, if any. No prefix matching: `--output=x` is passed through.
pub fn lookup(token: &OsStr) -> Option<Action> {
    TRANSLATION_TABLE
        .iter()
        .find(|(original, _)| token == OsStr::new(original))
        .map(|(_, action)| *action)
}

/// Rewrite an argument vector (program name excluded) in order.
pub fn translate_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut out = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        match lookup(arg) {
            Some(Action::Replace(tokens)) => out.extend(tokens.iter().map(OsString::from)),
            Some(Action::Suppress) => {}
            None => out.push(arg.to_os_string()),
        }
    }
    out
}
