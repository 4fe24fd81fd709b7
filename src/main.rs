use anyhow::{Context, Result};
use clap::Parser;
use meeting_scheduler::{create_router, AppState, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "meeting-scheduler", about = "Web form for scheduling Zoom meetings")]
struct Args {
    /// Config file, with or without extension
    #[arg(long, default_value = "config/meeting-scheduler")]
    config: String,

    /// Backend URL the proxy route forwards to
    #[arg(long)]
    backend_url: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let args = Args::parse();

    let mut cfg = Config::load(&args.config)?;
    if let Some(url) = args.backend_url {
        cfg.backend.url = url;
    }
    if let Some(port) = args.port {
        cfg.service.http.port = port;
    }

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(&cfg)?;
    let app = create_router(state);

    let addr = cfg.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
