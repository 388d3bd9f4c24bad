use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use franchise_site::config::{Config, LoggingConfig};
use franchise_site::{AppState, build_router};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Land of Franchise site server
#[derive(Debug, Parser)]
#[command(name = "franchise-site", version, about)]
struct Args {
    /// Path to config.toml (defaults to conf/config.toml or config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Override server.host
    #[arg(long)]
    host: Option<String>,

    /// Override server.port
    #[arg(short, long)]
    port: Option<u16>,
}

fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|e| {
        eprintln!("Invalid log level '{}': {}, falling back to info", config.level, e);
        EnvFilter::new("info")
    });

    let Some(file) = config.file.as_deref() else {
        tracing_subscriber::registry().with(filter).with(fmt::layer()).init();
        return None;
    };

    let path = Path::new(file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "franchise-site.log".to_string());

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, file_name));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Some(guard)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    let _log_guard = init_logging(&config.logging);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!(
        "Locale routing: default={}, cookie={}, max_age={}d",
        config.locale.default_locale,
        config.locale.cookie_name,
        config.locale.cookie_max_age
    );

    let state = Arc::new(AppState::new(config)?);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Franchise site listening on http://{}", addr);
    tracing::info!("API docs available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}
