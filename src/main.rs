use actix_web::HttpServer;
use anyhow::{Context, Result};
use log::{info, warn};

use mensagens::app;
use mensagens::config::Config;
use mensagens::databases;

fn log_addresses(config: &Config) {
    info!("Serving the admin panel on http://{}:{}", config.host, config.port);

    if config.host == "0.0.0.0" {
        match local_ip_address::local_ip() {
            Ok(ip) => info!("Reachable on the local network at http://{}:{}", ip, config.port),
            Err(e) => warn!("Could not determine the local network address: {}", e),
        }
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    let pool = databases::connect(&config.database_url).await?;
    databases::setup_database(&pool).await?;

    log_addresses(&config);

    let server_config = config.clone();
    HttpServer::new(move || {
        app::build(
            pool.clone(),
            &server_config.static_dir,
            server_config.allowed_origin.as_deref(),
        )
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .run()
    .await
    .context("Server stopped with an error")
}
