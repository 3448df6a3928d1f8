//! Employee service entry point: loads settings, prepares the store and
//! serves the REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employee_backend::inbound::http::health::HealthState;
use employee_backend::outbound::persistence::{DbPool, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server};

fn init_tracing() {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }
}

async fn migrate(database_url: String) -> Result<()> {
    tokio::task::spawn_blocking(move || run_pending_migrations(&database_url))
        .await
        .wrap_err("migration task panicked")?
        .wrap_err("failed to migrate employee schema")
}

async fn build_config(settings: &ServerSettings) -> Result<ServerConfig> {
    let bind_addr = settings
        .bind_addr()
        .wrap_err("invalid EMPLOYEES_BIND_ADDR")?;
    let config = ServerConfig::new(bind_addr);
    let Some(pool_config) = settings.pool_config() else {
        info!("no database URL configured; employees are kept in memory");
        return Ok(config);
    };

    if settings.skip_migrations {
        info!("skipping schema migrations");
    } else {
        migrate(pool_config.database_url().to_owned()).await?;
    }
    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to build database pool")?;
    Ok(config.with_db_pool(pool))
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load server settings: {err}"))?;
    let config = build_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to start server")?;
    server.await.wrap_err("server terminated with an error")
}
