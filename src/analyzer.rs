//! Pipeline orchestration: providers, then the corpus-wide injection
//! index, then linking, then components. Each stage fully completes
//! before the next starts, and any discovery or read failure aborts
//! the whole run; there is no partial-result mode.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::components;
use crate::config::Config;
use crate::discovery::{self, AnnotationToken};
use crate::error::Error;
use crate::injections::{self, InjectionIndex};
use crate::linker;
use crate::modules;
use crate::types::{Component, Module};

/// The finished wiring model for one scanned tree. Components carry
/// their matched modules, so the graph is reachable from either side.
#[derive(Debug, Serialize)]
pub struct Analysis {
    /// Every module built from a provider file, linked.
    pub modules: Vec<Module>,
    /// Every component built from a consumer file.
    pub components: Vec<Component>,
}

/// Run the full pipeline over the tree rooted at `root`.
///
/// # Errors
///
/// Returns `Error::RootNotFound` if the root does not exist, or any
/// discovery, read, or duplicate-module error from the stages.
pub fn analyze(root: &Path, config: &Config) -> Result<Analysis, Error> {
    let root = resolve_root(root)?;
    let built = build_linked_modules(&root, config)?;

    let component_files =
        discovery::find_annotated_files(&root, config, AnnotationToken::Component)?;
    let mut components = Vec::with_capacity(component_files.len());
    for path in &component_files {
        components.push(components::from_file(path, &built)?);
    }

    Ok(Analysis { modules: built, components })
}

/// Run only the provider stages: build every module and link it
/// against the corpus-wide injection index.
///
/// # Errors
///
/// Returns `Error::RootNotFound` if the root does not exist, or any
/// discovery, read, or duplicate-module error.
pub fn analyze_modules(root: &Path, config: &Config) -> Result<Vec<Module>, Error> {
    let root = resolve_root(root)?;
    build_linked_modules(&root, config)
}

/// Provider stages: build modules, build the injection index, link.
fn build_linked_modules(root: &Path, config: &Config) -> Result<Vec<Module>, Error> {
    let provider_files = discovery::find_annotated_files(root, config, AnnotationToken::Module)?;

    let mut claimed: HashMap<String, PathBuf> = HashMap::new();
    let mut built = Vec::with_capacity(provider_files.len());
    for path in &provider_files {
        let module = modules::from_file(path)?;
        if let Some(first) = claimed.insert(module.name.clone(), path.clone()) {
            return Err(Error::DuplicateModule {
                name: module.name,
                first,
                second: path.clone(),
            });
        }
        built.push(module);
    }

    let index = build_injection_index(root, config)?;
    linker::link(&index, &mut built);

    Ok(built)
}

/// Stage 2: one injection index across every file bearing the inject
/// token, whether it is a provider, a consumer, or any other source.
fn build_injection_index(root: &Path, config: &Config) -> Result<InjectionIndex, Error> {
    let injection_files = discovery::find_annotated_files(root, config, AnnotationToken::Inject)?;

    let mut index = InjectionIndex::new();
    for path in &injection_files {
        let text = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.clone(),
            source: e,
        })?;
        for reference in injections::extract(&text) {
            index.record(reference, path);
        }
    }

    Ok(index)
}

/// Canonicalize the scan root so every emitted path is absolute.
fn resolve_root(root: &Path) -> Result<PathBuf, Error> {
    std::fs::canonicalize(root).map_err(|_| Error::RootNotFound { path: root.to_path_buf() })
}
