use axum::http::{header, Method};
use axum::middleware;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use backend::routes::configure_routes;
use backend::shared::config;
use backend::shared::data::db;
use backend::shared::state::AppState;
use backend::system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;

    let db_path = config::get_database_path(&config);
    let conn = db::initialize_database(&db_path, config.database.reset_on_startup)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    // Классификация: один раз, при пустой таблице департаментов
    let seed_path = config::get_seed_path(&config);
    if let Err(e) = system::initialization::ensure_catalog_seeded(&conn, seed_path.as_deref()).await
    {
        tracing::error!("Seed load failed, aborting startup: {:#}", e);
        return Err(e);
    }

    let state = AppState::new(conn, config::get_export_dir(&config));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = configure_routes(state)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let addr: SocketAddr = config.server.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
