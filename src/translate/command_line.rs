//! Flattening of the structured argument list into one shell command line.
use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

/// Platform family of the command interpreter that re-parses the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Program plus translated arguments, kept structured until rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: PathBuf,
    args: Vec<OsString>,
}

impl CommandLine {
    pub fn new(program: &Path, args: Vec<OsString>) -> Self {
        Self {
            program: program.to_path_buf(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Quote the program and every argument, join with single spaces.
    ///
    /// `cmd /C` strips one pair of outer quotes from the line, so Windows gets an extra pair.
    pub fn render(&self, platform: Platform) -> OsString {
        let mut line = OsString::new();
        if platform == Platform::Windows {
            line.push("\"");
        }
        push_quoted(&mut line, self.program.as_os_str());
        for arg in &self.args {
            line.push(" ");
            push_quoted(&mut line, arg);
        }
        if platform == Platform::Windows {
            line.push("\"");
        }
        line
    }
}

// No escaping: the token lands between the quotes byte-identical.
fn push_quoted(line: &mut OsString, token: &OsStr) {
    line.push("\"");
    line.push(token);
    line.push("\"");
}
