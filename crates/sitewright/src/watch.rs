//! Debounced file watching for the preview server.
//!
//! A change to the project snapshot fans one reload signal out to every
//! connected preview client. The notify watcher runs on its own thread;
//! events are bridged to the async side over a tokio channel.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebouncedEventKind, Debouncer};
use tokio::sync::mpsc as tokio_mpsc;

use crate::state::AppState;

/// Starts watching the project snapshot, signaling `state` on changes.
///
/// Returns the debouncer; dropping it stops the watcher, so the caller
/// keeps it alive for the lifetime of the server.
pub fn spawn_watcher(
    state: AppState,
    path: &Path,
    debounce: Duration,
) -> Result<Debouncer<notify::RecommendedWatcher>> {
    let (sync_tx, sync_rx) = std::sync::mpsc::channel::<
        std::result::Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>,
    >();
    let (async_tx, mut async_rx) = tokio_mpsc::channel::<()>(1);

    // Bridge sync notify events to the async tokio channel.
    std::thread::spawn(move || {
        while let Ok(result) = sync_rx.recv() {
            if let Ok(events) = result {
                let has_changes = events
                    .iter()
                    .any(|e| matches!(e.kind, DebouncedEventKind::Any));
                if has_changes {
                    let _ = async_tx.blocking_send(());
                }
            }
        }
    });

    let mut debouncer = new_debouncer(debounce, sync_tx)?;
    debouncer
        .watcher()
        .watch(path, RecursiveMode::NonRecursive)?;

    tracing::info!(path = %path.display(), "watching project snapshot");

    tokio::spawn(async move {
        while async_rx.recv().await.is_some() {
            tracing::info!("project snapshot changed, reloading previews");
            state.signal_reload();
        }
    });

    Ok(debouncer)
}
