use serde::{Deserialize, Serialize};

use crate::entities::movie;

/// A movie record. `id` stays `None` until the store assigns one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Movie {
    pub id: Option<i64>,
    pub name: String,
    pub year: i32,
}

impl Movie {
    pub fn new(name: impl Into<String>, year: i32) -> Self {
        Self { id: None, name: name.into(), year }
    }
}

impl From<movie::Model> for Movie {
    fn from(model: movie::Model) -> Self {
        Self { id: Some(model.id), name: model.name, year: model.year }
    }
}

/// Body accepted by `POST /movies`. A present `id` targets an existing movie.
#[derive(Debug, Deserialize)]
pub struct MovieRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub year: i32,
}

impl From<MovieRequest> for Movie {
    fn from(req: MovieRequest) -> Self {
        Self { id: req.id, ..Movie::new(req.name, req.year) }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct MovieResponse {
    pub id: Option<i64>,
    pub name: String,
    pub year: i32,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self { id: movie.id, name: movie.name, year: movie.year }
    }
}
