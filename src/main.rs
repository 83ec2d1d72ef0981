use std::sync::Arc;

use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use swap_rs::{
    components::{catalog::TokenCatalog, prices::PriceService},
    config::ServerConfig,
    server::run_server,
};

#[tokio::main]
async fn main() {
    SimpleLogger::new()
        .with_colors(true)
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("configuration: {}", err);
            std::process::exit(1);
        }
    };

    let prices = match PriceService::new(&config.price_api_url, &config.price_api_key) {
        Ok(service) => Arc::new(service),
        Err(err) => {
            error!("price client: {}", err);
            std::process::exit(1);
        }
    };

    let catalog = Arc::new(TokenCatalog::new());
    for token in catalog.list() {
        info!("serving {}", token);
    }

    if let Err(err) = run_server(catalog, prices, config.port).await {
        error!("server: {}", err);
        std::process::exit(1);
    }
}
