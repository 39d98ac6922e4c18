use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set, Unchanged},
    DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::{
    entities::movie,
    error::AppResult,
    models::Movie,
};

/// Storage operations the service layer relies on.
#[async_trait::async_trait]
pub trait MovieRepository: Send + Sync {
    /// All movies in insertion order.
    async fn find_all(&self) -> AppResult<Vec<Movie>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>>;

    /// Inserts when `movie.id` is `None`, otherwise updates the existing row.
    /// An id with no row is stored as a new movie under a store-assigned id.
    async fn save(&self, movie: Movie) -> AppResult<Movie>;

    /// Removing an id with no row is a no-op.
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

#[derive(Clone)]
pub struct SeaOrmMovieRepository {
    db: DatabaseConnection,
}

impl SeaOrmMovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl MovieRepository for SeaOrmMovieRepository {
    async fn find_all(&self) -> AppResult<Vec<Movie>> {
        let rows = movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        let row = movie::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Movie::from))
    }

    async fn save(&self, movie: Movie) -> AppResult<Movie> {
        let Movie { id, name, year } = movie;
        let fresh = |name: String, year: i32| movie::ActiveModel {
            id: NotSet,
            name: Set(name),
            year: Set(year),
        };

        let saved = match id {
            None => fresh(name, year).insert(&self.db).await?,
            Some(id) => {
                let existing = movie::ActiveModel {
                    id: Unchanged(id),
                    name: Set(name.clone()),
                    year: Set(year),
                };
                match existing.update(&self.db).await {
                    Ok(saved) => saved,
                    // no row under that id; the store hands out a new one
                    Err(DbErr::RecordNotUpdated) => {
                        tracing::debug!(id, "no movie to update, inserting");
                        fresh(name, year).insert(&self.db).await?
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        };

        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        tracing::debug!(id, rows = res.rows_affected, "delete_by_id");
        Ok(())
    }
}
