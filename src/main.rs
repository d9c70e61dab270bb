use divvy::app;
use divvy::config::AppConfig;
use divvy::container::Container;
use divvy::telemetry;

use actix_web::HttpServer;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootError {
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Telemetry(#[from] telemetry::TelemetryError),
}

async fn run() -> Result<(), BootError> {
    let config = AppConfig::load()?;

    let provider = telemetry::configure(&config.service, &config.logging)?;

    let container = Arc::new(Container::from_config(&config.remote));

    HttpServer::new(move || app::create(Arc::clone(&container)))
        .bind((config.http.host.as_str(), config.http.port))?
        .run()
        .await?;

    telemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}
