//! Backend entry-point: loads settings, seeds the store and runs the server.

mod server;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use shopping_list::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let config = ServerConfig::from_settings(&settings).map_err(std::io::Error::other)?;
    let bind_addr = config.bind_addr();
    let server = create_server(config)?;
    info!(%bind_addr, mode = settings.mode.as_deref(), "shopping list server listening");
    server.await
}
