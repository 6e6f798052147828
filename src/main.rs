use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

mod handlers;
mod models;
mod services;
mod utils;

use handlers::AppState;
use services::memory::MemoryStore;
use services::store::DocumentStore;
use utils::config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let store: Arc<dyn DocumentStore> = match &config.store_file {
        Some(path) => {
            info!("Loading document store from {}", path);
            Arc::new(MemoryStore::open(path)?)
        }
        None => {
            info!("No STORE_FILE set, documents are kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    let app_state = web::Data::new(AppState::new(store));

    let bind_addr = config.bind_addr();
    info!("Starting server on {}", bind_addr);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(handlers::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
