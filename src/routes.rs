use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{delete, get},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{MovieRequest, MovieResponse},
};

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    id: i64,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies/all", get(all_movies))
        .route("/movies", get(movie_by_id).post(add_movie).delete(delete_movie))
        // older clients send DELETE /movies/?id=..
        .route("/movies/", delete(delete_movie))
        .with_state(state)
}

pub async fn all_movies(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<MovieResponse>>> {
    let movies = state.movies.get_all_movies().await?;
    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

pub async fn movie_by_id(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
) -> AppResult<Json<MovieResponse>> {
    let movie = state.movies.get_movie_by_id(q.id).await?.ok_or(AppError::MovieNotFound(q.id))?;
    Ok(Json(movie.into()))
}

pub async fn add_movie(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MovieRequest>,
) -> AppResult<Json<MovieResponse>> {
    let saved = state.movies.save(req.into()).await?;
    Ok(Json(saved.into()))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
) -> AppResult<StatusCode> {
    state.movies.delete_by_id(q.id).await?;
    Ok(StatusCode::OK)
}
