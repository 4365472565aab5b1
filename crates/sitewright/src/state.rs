//! Shared application state for the preview server.
//!
//! The broadcast channels model the set of currently-connected preview
//! clients: a reload signal fans out to every subscriber, fire-and-forget
//! (no acknowledgment, no backpressure; a client that missed a signal
//! reconnects on its own).

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::broadcast;

use sitewright_core::ExportOptions;

/// Shared application state, cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Project snapshot on disk; `None` serves the built-in demo project.
    pub project_path: Option<Arc<PathBuf>>,
    /// Export options used for every preview render.
    pub export_options: Arc<ExportOptions>,
    /// Reload signal sender for connected preview clients.
    pub reload_tx: broadcast::Sender<()>,
    /// Shutdown signal sender for SSE connections.
    pub shutdown_tx: broadcast::Sender<()>,
}

impl AppState {
    /// Creates state for a preview session.
    pub fn new(project_path: Option<PathBuf>, export_options: ExportOptions) -> Self {
        let (reload_tx, _) = broadcast::channel(16);
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            project_path: project_path.map(Arc::new),
            export_options: Arc::new(export_options),
            reload_tx,
            shutdown_tx,
        }
    }

    /// Subscribe to reload signals.
    pub fn subscribe_reload(&self) -> broadcast::Receiver<()> {
        self.reload_tx.subscribe()
    }

    /// Fan a reload signal out to all connected preview clients.
    pub fn signal_reload(&self) {
        // Send fails only when no client is connected; that is fine.
        let receivers = self.reload_tx.send(()).unwrap_or(0);
        tracing::debug!(receivers, "reload signal sent");
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe_shutdown(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Signal SSE handlers to close their connections.
    pub fn signal_shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None, ExportOptions::preview())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reload_fans_out_to_all_subscribers() {
        let state = AppState::default();
        let mut first = state.subscribe_reload();
        let mut second = state.subscribe_reload();

        state.signal_reload();

        assert!(first.recv().await.is_ok());
        assert!(second.recv().await.is_ok());
    }

    #[test]
    fn test_signal_without_subscribers_is_fine() {
        let state = AppState::default();
        state.signal_reload();
        state.signal_shutdown();
    }
}
