//! Backend entry-point: loads settings, opens the document store, and serves
//! the shareholder REST API until shutdown.

mod server;

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig as _;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use shareholders::inbound::http::health::HealthState;
use shareholders::outbound::persistence::MongoStore;
use shareholders::settings::AppSettings;

use server::{ServerConfig, create_server};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;

    let store = match settings.store_config() {
        Some(store_config) => Some(
            MongoStore::connect(store_config)
                .await
                .wrap_err("failed to open document store")?,
        ),
        None => None,
    };

    let mut config = ServerConfig::new(settings.bind_addr());
    if let Some(store) = store.clone() {
        config = config.with_store(store);
    }
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(server::build_prometheus()?));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let outcome = server.await;

    info!("HTTP server stopped; releasing resources");
    health_state.mark_unhealthy();
    if let Some(store) = store {
        store.close().await;
    }

    outcome.wrap_err("HTTP server failed")
}
