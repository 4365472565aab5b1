mod app;
mod config;
mod demo_data;
mod handlers;
mod project;
mod state;
mod watch;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sitewright_core::{export_site, ExportOptions};

use crate::{app::create_app, config::Config, project::load_project, state::AppState};

/// Sitewright - generate and preview marketing websites for tradespeople
#[derive(Parser, Debug)]
#[command(name = "sitewright")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the development preview server with live reload
    Serve {
        /// Host address to bind the server to
        #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
        host: String,

        /// Port to listen on
        #[arg(long, short, default_value = "3000", env = "PORT")]
        port: u16,

        /// Project snapshot (JSON); omit to preview the built-in demo
        #[arg(long, env = "SITEWRIGHT_PROJECT")]
        project: Option<PathBuf>,

        /// Disable the scroll/parallax enhancement pass
        #[arg(long)]
        no_parallax: bool,
    },
    /// Export a project to a static site directory
    Export {
        /// Project snapshot (JSON); omit to export the built-in demo
        #[arg(long, env = "SITEWRIGHT_PROJECT")]
        project: Option<PathBuf>,

        /// Output directory
        #[arg(long, short, default_value = "dist", env = "SITEWRIGHT_OUT")]
        out: PathBuf,

        /// Disable the scroll/parallax enhancement pass
        #[arg(long)]
        no_parallax: bool,

        /// Skip the placeholder admin shell
        #[arg(long)]
        no_admin: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitewright=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Command::Serve {
            host,
            port,
            project,
            no_parallax,
        } => serve(host, port, project, no_parallax).await,
        Command::Export {
            project,
            out,
            no_parallax,
            no_admin,
        } => export(project, out, no_parallax, no_admin),
    }
}

async fn serve(host: String, port: u16, project: Option<PathBuf>, no_parallax: bool) -> Result<()> {
    let config = Config::from_env();

    let options = ExportOptions {
        parallax: !no_parallax,
        ..ExportOptions::preview()
    };
    let state = AppState::new(project.clone(), options);

    // The watcher lives as long as the server; dropping it would stop
    // change notifications.
    let _watcher = match &project {
        Some(path) => Some(watch::spawn_watcher(
            state.clone(),
            path,
            config.watch_debounce(),
        )?),
        None => None,
    };

    let app = create_app(state.clone(), &config);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{host}:{port}");
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("preview server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn export(project: Option<PathBuf>, out: PathBuf, no_parallax: bool, no_admin: bool) -> Result<()> {
    let project = load_project(project.as_deref())?;
    let options = ExportOptions {
        parallax: !no_parallax,
        include_admin_shell: !no_admin,
        ..ExportOptions::default()
    };

    let artifact = export_site(&project, &options)?;

    std::fs::create_dir_all(&out)?;
    let index_path = out.join("index.html");
    std::fs::write(&index_path, &artifact.html)?;
    tracing::info!(path = %index_path.display(), bytes = artifact.html.len(), "wrote main document");

    for file in &artifact.additional_files {
        let path = out.join(&file.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &file.content)?;
        tracing::info!(path = %path.display(), bytes = file.content.len(), "wrote additional file");
    }

    tracing::info!(
        files = artifact.additional_files.len() + 1,
        out = %out.display(),
        "export complete"
    );
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM) and notify SSE handlers.
async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }

    // Signal SSE handlers to close their connections
    state.signal_shutdown();
}
