use axum::http::{
    header::{ACCEPT, CONTENT_TYPE},
    HeaderName, HeaderValue, Method,
};
use axum_login::AuthManagerLayerBuilder;
use log::*;
use std::error::Error as StdError;
use time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

pub use self::error::{Error, Result};
pub use service::AppState;

mod controller;
mod error;
mod extractors;
mod middleware;
mod params;
mod response;
mod router;

pub async fn init_server(app_state: AppState) -> std::result::Result<(), Box<dyn StdError>> {
    // Sessions are backed by the same Postgres instance as the platform data
    // so that a restart does not log everyone out.
    let session_pool = app_state
        .db_conn_ref()
        .get_postgres_connection_pool()
        .clone();
    let session_store = PostgresStore::new(session_pool);
    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(app_state.config.is_production())
        .with_expiry(Expiry::OnInactivity(Duration::days(1)));

    let backend = domain::user::Backend::new(&app_state.database_connection);
    let auth_layer = AuthManagerLayerBuilder::new(backend, session_layer).build();

    let allowed_origins: Vec<HeaderValue> = app_state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            ACCEPT,
            CONTENT_TYPE,
            HeaderName::from_static("x-version"),
        ])
        .allow_credentials(true)
        .allow_origin(allowed_origins);

    let listen_addr = format!("{}:{}", app_state.config.interface, app_state.config.port);
    info!("Server starting... listening for connections on http://{listen_addr}");

    let router = router::define_routes(app_state)
        .layer(auth_layer)
        .layer(cors_layer);

    let listener = TcpListener::bind(listen_addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
