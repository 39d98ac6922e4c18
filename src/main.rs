mod config;
mod db;
mod entities;
mod error;
mod models;
mod repository;
mod routes;
mod service;

use std::sync::Arc;

use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    repository::SeaOrmMovieRepository,
    service::{MovieService, MovieServiceImpl},
};

pub struct AppState {
    pub movies: Arc<dyn MovieService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,movies=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url, config.database_max_connections).await?;
    let movies = MovieServiceImpl::new(SeaOrmMovieRepository::new(db));

    let state = Arc::new(AppState { movies: Arc::new(movies) });

    let app = routes::router(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
