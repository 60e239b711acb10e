//! File watcher: prints the graph on startup, then re-runs on source
//! changes beneath the scan root.

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use notify::{RecursiveMode, Watcher as _};

use crate::commands;
use crate::error;

/// Debounce delay between filesystem events and re-analysis.
const DEBOUNCE_MS: u64 = 100;

/// Create a filesystem watcher that sends events on the given channel.
///
/// # Errors
///
/// Returns an error if the watcher cannot be created.
fn create_watcher(
    tx: crossbeam_channel::Sender<()>,
) -> Result<notify::RecommendedWatcher, error::Error> {
    return notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
        if let Ok(event) = res
            && matches!(
                event.kind,
                notify::EventKind::Create(_)
                    | notify::EventKind::Modify(_)
                    | notify::EventKind::Remove(_)
            )
        {
            let _ = tx.send(());
        }
    })
    .map_err(|e| {
        return error::Error::WatcherSetup {
            reason: format!("watcher creation failed: {e}"),
        };
    });
}

/// Entry point for the watch command.
///
/// Prints an initial graph, then watches the scan root recursively and
/// re-analyzes on changes.
///
/// # Errors
///
/// Returns errors from watcher setup.
pub fn run(root: &Path) -> Result<ExitCode, error::Error> {
    eprintln!("watch: initial graph");
    let mut last_code = run_graph(root);

    let (tx, rx) = crossbeam_channel::unbounded();
    let mut watcher = create_watcher(tx)?;
    watcher
        .watch(root, RecursiveMode::Recursive)
        .map_err(|e| error::Error::WatcherSetup {
            reason: format!("cannot watch {}: {e}", root.display()),
        })?;

    eprintln!("watch: monitoring {}, press Ctrl+C to stop", root.display());

    while rx.recv().is_ok() {
        let debounce = Duration::from_millis(DEBOUNCE_MS);
        while rx.recv_timeout(debounce).is_ok() {}
        eprintln!("watch: change detected, re-analyzing...");
        last_code = run_graph(root);
    }

    return Ok(last_code);
}

/// Run the graph command once. Returns its exit code.
fn run_graph(root: &Path) -> ExitCode {
    return match commands::graph(root, false) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2_u8)
        },
    };
}
