use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use career_ml_service::artifacts::ArtifactStore;
use career_ml_service::config::Config;
use career_ml_service::http::{self, AppState};
use career_ml_service::recommender::Recommender;

#[derive(Parser, Debug)]
#[command(name = "career-ml-service")]
#[command(about = "ML service for the Career Skills platform - recommendations, career predictions, and skill gaps")]
struct Args {
    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Models directory override
    #[arg(short, long)]
    models_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Starting Career ML Service v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(models_dir) = args.models_dir {
        config.models.models_dir = models_dir;
    }
    info!("Configuration loaded");

    // Prepare the models directory
    let store = ArtifactStore::new(&config.models.models_dir);
    store
        .ensure_models_dir()
        .context("Failed to prepare models directory")?;

    let recommender = Recommender::new(store.clone(), &config.recommend);
    let app = http::router(AppState { recommender, store });

    let addr = format!("{}:{}", config.server.host, config.server.http_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Starting HTTP server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Career ML Service shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received terminate signal, shutting down...");
        }
    }
}
