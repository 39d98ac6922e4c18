use crate::{error::AppResult, models::Movie, repository::MovieRepository};

/// Domain operations on movies, independent of transport.
#[async_trait::async_trait]
pub trait MovieService: Send + Sync {
    async fn get_all_movies(&self) -> AppResult<Vec<Movie>>;
    async fn get_movie_by_id(&self, id: i64) -> AppResult<Option<Movie>>;
    async fn save(&self, movie: Movie) -> AppResult<Movie>;
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

pub struct MovieServiceImpl<R> {
    repo: R,
}

impl<R: MovieRepository> MovieServiceImpl<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait::async_trait]
impl<R: MovieRepository> MovieService for MovieServiceImpl<R> {
    async fn get_all_movies(&self) -> AppResult<Vec<Movie>> {
        self.repo.find_all().await
    }

    async fn get_movie_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        self.repo.find_by_id(id).await
    }

    async fn save(&self, movie: Movie) -> AppResult<Movie> {
        let updating = movie.id.is_some();
        let saved = self.repo.save(movie).await?;
        tracing::info!(id = ?saved.id, updating, "movie saved");
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.repo.delete_by_id(id).await?;
        tracing::info!(id, "movie deleted");
        Ok(())
    }
}
