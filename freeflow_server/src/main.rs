//! # freeflow_server
//!
//! Serves the FreeFlow landing site over HTTP, or renders single pages to
//! static HTML.
//!
//! ## Usage
//!
//! ```bash
//! # Serve on 127.0.0.1:3000 (the default command)
//! freeflow_server
//!
//! # Serve behind an auth proxy that sets x-forwarded-user
//! freeflow_server serve --bind 0.0.0.0:8080 --identity-header x-forwarded-user
//!
//! # Render the landing page to a file
//! freeflow_server render --path / --output dist/index.html
//! ```
//!
//! The dashboard reads the signed-in user's id from a request header. When
//! the header is missing, or a page is rendered offline, it shows the
//! signed-out placeholder.

mod config;
mod identity;
mod routes;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use freeflow_site::{DetachedIdentity, Route, render_route};
use tracing::info;

use crate::config::{ServeArgs, ServerConfig};
use crate::routes::AppState;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "freeflow_server")]
#[command(about = "HTTP server and static renderer for the FreeFlow landing site")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the site over HTTP (default)
    Serve(ServeArgs),
    /// Render one page to stdout or a file
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Route to render, e.g. / or /page/dashboard
    #[arg(long, default_value = "/")]
    path: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

// ============================================================================
// Commands
// ============================================================================

async fn serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig::from_env(&args).context("invalid server configuration")?;
    let bind_addr = config.bind_addr;
    info!(
        identity_header = %config.identity_header,
        "identity taken from request header"
    );

    let app = routes::router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(addr = %bind_addr, "FreeFlow server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("FreeFlow server stopped");
    Ok(())
}

/// Render `path` without a request; the dashboard shows the signed-out state.
fn render_page(path: &str) -> Result<String> {
    let route = Route::from_path(path).ok_or_else(|| {
        let known: Vec<_> = Route::ALL.iter().map(|r| r.path()).collect();
        anyhow!("unknown route `{path}` (expected one of: {})", known.join(", "))
    })?;
    Ok(render_route(route, &DetachedIdentity))
}

fn render(args: RenderArgs) -> Result<()> {
    let html = render_page(&args.path)?;
    match args.output {
        Some(output) => write_output(&output, &html)?,
        None => std::io::stdout()
            .write_all(html.as_bytes())
            .context("failed to write to stdout")?,
    }
    Ok(())
}

fn write_output(output: &Path, html: &str) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(output, html).with_context(|| format!("failed to write {}", output.display()))?;
    info!(path = %output.display(), bytes = html.len(), "page written");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries rendered pages, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match args.command {
        None => {
            info!("Starting freeflow_server v{}", env!("CARGO_PKG_VERSION"));
            serve(ServeArgs::default()).await
        }
        Some(Command::Serve(serve_args)) => {
            info!("Starting freeflow_server v{}", env!("CARGO_PKG_VERSION"));
            serve(serve_args).await
        }
        Some(Command::Render(render_args)) => render(render_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use freeflow_site::identity::ABSENT_PLACEHOLDER;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn bare_invocation_serves() {
        let args = Args::try_parse_from(["freeflow_server"]).unwrap();

        assert!(args.command.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn serve_flags_parse() {
        let args = Args::try_parse_from([
            "freeflow_server",
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--identity-header",
            "x-forwarded-user",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let Some(Command::Serve(serve)) = args.command else {
            panic!("expected serve command");
        };
        assert_eq!(serve.bind.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(serve.identity_header.as_deref(), Some("x-forwarded-user"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn render_dashboard_offline_shows_placeholder() {
        let html = render_page("/page/dashboard").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Welcome to your Dashboard"));
        assert!(html.contains(ABSENT_PLACEHOLDER));
    }

    #[test]
    fn render_unknown_route_fails() {
        let err = render_page("/nope").unwrap_err();

        assert!(err.to_string().contains("unknown route `/nope`"));
    }

    #[test]
    fn render_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("dist").join("index.html");

        render(RenderArgs {
            path: "/".into(),
            output: Some(output.clone()),
        })
        .unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains(r#"data-page="landing""#));
    }
}
