use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mysite::adapters::http::{app_router, with_http_layers, AdminAuth, PollsAppState};
use mysite::adapters::postgres::{self, PostgresChoiceRepository, PostgresQuestionRepository};
use mysite::adapters::SystemClock;
use mysite::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.server);
    config.validate().context("invalid configuration")?;

    let addr = config
        .server
        .socket_addr()
        .context("invalid bind address")?;

    info!(database = %config.database.redacted_url(), "connecting to PostgreSQL");
    let pool = postgres::connect(&config.database)
        .await
        .context("failed to connect to PostgreSQL")?;

    if config.database.run_migrations {
        postgres::run_migrations(&pool)
            .await
            .context("failed to run migrations")?;
        info!("database migrations applied");
    }

    let state = PollsAppState::new(
        Arc::new(PostgresQuestionRepository::new(pool.clone())),
        Arc::new(PostgresChoiceRepository::new(pool)),
        Arc::new(SystemClock),
    );
    let app = with_http_layers(
        app_router(state, AdminAuth::new(config.admin.token)),
        &config.server,
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(
        bind_addr = %addr,
        environment = ?config.server.environment,
        "mysite started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("mysite stopped");
    Ok(())
}

/// `RUST_LOG` wins over `server.log_level`; production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install ctrl+c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install sigterm handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
