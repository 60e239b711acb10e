//! File discovery: walk the source tree and emit the candidate files
//! whose contents mention a given annotation token. Extraction re-reads
//! matched files itself, so this layer deals only in paths.

use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::Error;

/// Maximum directory depth below the scan root.
const MAX_DEPTH: usize = 20;

/// Which annotation token a discovery pass searches for.
#[derive(Clone, Copy, Debug)]
pub enum AnnotationToken {
    /// `@Module`: provider declarations.
    Module,
    /// `@Inject`, case-insensitive: field injection sites.
    Inject,
    /// `@Component` or `@Subcomponent`: consumer declarations.
    Component,
}

impl AnnotationToken {
    /// The content pattern for this token.
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded token regex is invalid (compile-time
    /// invariant).
    fn pattern(self) -> Regex {
        let source = match self {
            AnnotationToken::Module => "@Module",
            AnnotationToken::Inject => "(?i)@Inject",
            AnnotationToken::Component => "@Component|@Subcomponent",
        };
        Regex::new(source).expect("valid token regex")
    }
}

/// Walk `root` and return every source file whose contents match the
/// token, in deterministic (file-name sorted) walk order.
///
/// Hidden entries and directories named in the config's exclude list
/// are pruned from the walk; only files with a configured source
/// extension that pass the include/exclude prefix filters are read.
///
/// # Errors
///
/// Returns `Error::Walk` if the directory walk fails, or
/// `Error::FileRead` if a candidate file cannot be read. Both abort
/// discovery; there is no partial candidate set.
pub fn find_annotated_files(
    root: &Path,
    config: &Config,
    token: AnnotationToken,
) -> Result<Vec<PathBuf>, Error> {
    let pattern = token.pattern();
    let mut matched = Vec::new();

    let walker = WalkDir::new(root)
        .max_depth(MAX_DEPTH)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| keep_entry(e, config));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !has_source_extension(path, config) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if !config.should_scan(&relative.to_string_lossy()) {
            continue;
        }

        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        if pattern.is_match(&content) {
            matched.push(path.to_path_buf());
        }
    }

    Ok(matched)
}

/// Walk predicate: prune hidden entries and excluded directory names.
/// The root itself (depth 0) is always kept, even when the scan root is
/// spelled `.`.
fn keep_entry(entry: &DirEntry, config: &Config) -> bool {
    if entry.depth() == 0 {
        return true;
    }

    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') {
        return false;
    }

    if entry.file_type().is_dir() && config.is_excluded_dir(&name) {
        return false;
    }

    true
}

fn has_source_extension(path: &Path, config: &Config) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| config.is_source_extension(ext))
}
