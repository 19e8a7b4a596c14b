use std::time::Duration;

use actix_web::{web, HttpServer};
use rh_api::create_app;
use rh_core::AuthCore;
use rh_shared::{init_tracing, AppConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging)?;

    tracing::info!(environment = %config.environment, "starting RecipeHub API server");

    let auth = web::Data::new(AuthCore::from_jwt_config(&config.auth.jwt)?);
    let cors = config.cors.clone();
    let bind_address = config.server.bind_address();

    let mut server = HttpServer::new(move || create_app(auth.clone(), &cors))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    tracing::info!(address = %bind_address, "server binding");
    server.bind(&bind_address)?.run().await?;

    Ok(())
}
