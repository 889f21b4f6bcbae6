//! Genre Service - Genre catalog and movie/genre associations

use marquee_domain::{Genre, GenreId, GenreSet, MovieId};
use serde::Deserialize;

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

const GENRE_PATH: &str = "/genre";

/// Body of `GET /genre/{movie_id}`
#[derive(Debug, Deserialize)]
struct MovieGenresResponse {
    #[serde(default)]
    genres: Vec<Genre>,
}

/// Genre service: reads the catalog and links genres to movies
#[derive(Clone)]
pub struct GenreService<A: ApiPort> {
    api: A,
}

fn failed(operation: &'static str, error: impl Into<ServiceError>) -> ServiceError {
    let error = error.into();
    tracing::warn!(operation, error = %error, "Genre request failed");
    error
}

impl<A: ApiPort> GenreService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// The global genre catalog
    pub async fn list_genres(&self) -> Result<Vec<Genre>, ServiceError> {
        tracing::debug!("Fetching genre catalog");
        self.api
            .get(GENRE_PATH)
            .await
            .map_err(|e| failed("list_genres", e))
    }

    /// Genres currently associated with a movie, duplicates collapsed
    pub async fn get_genres_for_movie(&self, movie_id: MovieId) -> Result<GenreSet, ServiceError> {
        tracing::debug!(movie_id = %movie_id, "Fetching movie genres");
        let response: MovieGenresResponse = self
            .api
            .get(&format!("{GENRE_PATH}/{movie_id}"))
            .await
            .map_err(|e| failed("get_genres_for_movie", e))?;
        Ok(response.genres.into())
    }

    /// Link a genre to a movie
    ///
    /// Not idempotent on the server side: repeating a pair may store it twice.
    pub async fn associate_genre(
        &self,
        movie_id: MovieId,
        genre_id: GenreId,
    ) -> Result<(), ServiceError> {
        self.api
            .post_empty(&format!("{GENRE_PATH}/genremovie/{movie_id}/{genre_id}"))
            .await
            .map_err(|e| failed("associate_genre", e))?;
        tracing::info!(movie_id = %movie_id, genre_id = %genre_id, "Genre associated");
        Ok(())
    }
}
