/// Crate-level error types for daggermap diagnostics.
use std::path::PathBuf;

/// All errors carry enough context to produce a useful diagnostic
/// without a debugger. Each variant names the file or reason for
/// failure. Extraction never errors on its own: a file that matches a
/// discovery token but no extraction pattern simply yields an empty
/// entity.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two module files share the same derived base name, which would
    /// silently merge two distinct providers in the graph.
    #[error(
        "duplicate module name `{name}`: {} and {}",
        first.display(),
        second.display()
    )]
    DuplicateModule {
        /// The shared derived module name.
        name: String,
        /// The file that claimed the name first.
        first: PathBuf,
        /// The file that collided with it.
        second: PathBuf,
    },

    /// A candidate source file could not be read or decoded.
    #[error("cannot read {}: {source}", path.display())]
    FileRead {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// The scan root does not exist or is not a directory.
    #[error("scan root not found: {}", path.display())]
    RootNotFound {
        /// The missing root path.
        path: PathBuf,
    },

    /// TOML deserialization of the config file failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),

    /// Walking the source tree failed (e.g. permission denied).
    #[error("walk: {0}")]
    Walk(
        /// The wrapped directory-walk error.
        #[from]
        walkdir::Error,
    ),

    /// The filesystem watcher could not be created.
    #[error("watcher setup failed: {reason}")]
    WatcherSetup {
        /// Description of the watcher failure.
        reason: String,
    },
}
