//! Core CLI commands for daggermap: graph, modules, unused.

use std::path::Path;
use std::process::ExitCode;

use crate::analyzer;
use crate::config;
use crate::error;
use crate::report;

/// Run the full pipeline and print the component wiring graph.
///
/// # Errors
///
/// Returns errors from config loading or analysis.
pub fn graph(root: &Path, json: bool) -> Result<ExitCode, error::Error> {
    let config = config::Config::load(root)?;
    let analysis = analyzer::analyze(root, &config)?;

    if json {
        println!("{}", report::render_json(&analysis));
    } else {
        print!("{}", report::render_graph(&analysis));
    }
    return Ok(ExitCode::SUCCESS);
}

/// Build and link the modules only, then print them.
///
/// # Errors
///
/// Returns errors from config loading or analysis.
pub fn modules(root: &Path, json: bool) -> Result<ExitCode, error::Error> {
    let config = config::Config::load(root)?;
    let built = analyzer::analyze_modules(root, &config)?;

    if json {
        println!("{}", report::render_json(&built));
    } else {
        print!("{}", report::render_modules(&built));
    }
    return Ok(ExitCode::SUCCESS);
}

/// Report every provided dependency with no injection site.
///
/// # Errors
///
/// Returns errors from config loading or analysis.
pub fn unused(root: &Path, json: bool) -> Result<ExitCode, error::Error> {
    let config = config::Config::load(root)?;
    let built = analyzer::analyze_modules(root, &config)?;
    let unused = report::collect_unused(&built);

    if json {
        println!("{}", report::render_json(&unused));
    } else {
        print!("{}", report::render_unused(&unused));
    }

    // Exit code priority: findings (1) > clean (0).
    if unused.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }
    return Ok(ExitCode::from(1));
}
