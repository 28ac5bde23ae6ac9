use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Converts a `Path` to an `OsString` for use in command-line arguments.
pub fn path_to_os_string(p: &Path) -> OsString {
    p.as_os_str().to_owned()
}

/// Renders a command line for logs. Not meant to be pasted into a shell.
pub fn display_command<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut line = program.to_owned();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.as_ref().to_string_lossy());
    }
    line
}
