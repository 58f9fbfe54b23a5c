use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tokio::spawn;
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use transit_kiosk::config::Config;
use transit_kiosk::web::{AppState, build_router};

/// Transit information kiosk server
#[derive(Debug, Parser)]
struct Args {
    /// Do not launch the kiosk browser after startup
    #[arg(long)]
    no_open: bool,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    _ = dotenv();
    let args = Args::parse();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let appender = tracing_appender::rolling::daily("./logs", "transit_kiosk.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);

    // A layer that logs events to rolling files.
    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_appender)
        .with_ansi(false)
        .pretty();

    let console_log = tracing_subscriber::fmt::layer();

    Registry::default()
        .with(file_log)
        .with(console_log)
        .with(env_filter)
        .init();

    let config = Config::from_env()?;

    // Lazy pool: a dead database must not stop the kiosk from serving, the
    // affected requests answer 500 instead. One connection carries the whole
    // kiosk pair.
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy_with(config.db.connect_options());

    let probe_pool = pool.clone();
    spawn(async move {
        match sqlx::query("SELECT 1").execute(&probe_pool).await {
            Ok(_) => info!("connected to the database"),
            Err(e) => error!("error connecting to the database: {e}"),
        }
    });

    let state = AppState {
        pool,
        session_key: config.session_key(),
    };

    let router = build_router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    let url = format!("http://localhost:{}", config.port);
    info!("server listening on {url}");

    if !args.no_open {
        if let Err(e) = open::that_detached(&url) {
            warn!("could not open the kiosk browser: {e}");
        }
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("error listening for the shutdown signal: {e}");
    }
}
