use crate::error::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to
/// stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic.
///
/// Each variant produces a block with what happened and how to fix it.
/// Designed to be readable by both humans and LLM agents.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::DuplicateModule { name, first, second } => format!("\
# Error: Duplicate Module Name

Two module files derive the same name `{name}`:

- {}
- {}

Module names come from file base names and must be unique within one
scan, otherwise their provided dependencies would silently merge.

## Fix

Rename one of the files, or exclude one path in `.daggermap.toml`.
", first.display(), second.display()),

        Error::FileRead { path, source } => format!("\
# Error: File Read Failed

Could not read `{}`: {source}

The run aborts on the first unreadable file; no partial graph is
reported.
", path.display()),

        Error::RootNotFound { path } => format!("\
# Error: Scan Root Not Found

`{}` does not exist or is not a directory.
", path.display()),

        Error::TomlDe(e) => format!("\
# Error: Invalid Config

`.daggermap.toml` is malformed: {e}
"),

        Error::Walk(e) => format!("\
# Error: Walk Failed

Could not traverse the source tree: {e}
"),

        Error::WatcherSetup { reason } => format!("\
# Error: Watcher Setup

{reason}
"),

        Error::Io(e) => format!("\
# Error: I/O

{e}
"),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn duplicate_module_diagnostic_names_both_files() {
        let e = Error::DuplicateModule {
            name: "AppModule".to_string(),
            first: PathBuf::from("a/AppModule.java"),
            second: PathBuf::from("b/AppModule.kt"),
        };

        let md = render_error(&e);
        assert!(md.contains("Duplicate Module Name"));
        assert!(md.contains("a/AppModule.java"));
        assert!(md.contains("b/AppModule.kt"));
    }
}
