//! Movie Service - CRUD against the catalog's `/movie` resource

use marquee_domain::{Movie, MovieFields, MovieId, UserId};

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

const MOVIE_PATH: &str = "/movie";

/// Movie service for managing catalog entries
///
/// Every call goes to the network; nothing is cached or retried.
#[derive(Clone)]
pub struct MovieService<A: ApiPort> {
    api: A,
}

fn failed(operation: &'static str, error: impl Into<ServiceError>) -> ServiceError {
    let error = error.into();
    tracing::warn!(operation, error = %error, "Movie request failed");
    error
}

impl<A: ApiPort> MovieService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// List the full collection in server order
    pub async fn list_movies(&self) -> Result<Vec<Movie>, ServiceError> {
        tracing::debug!("Fetching movie list");
        self.api
            .get(MOVIE_PATH)
            .await
            .map_err(|e| failed("list_movies", e))
    }

    /// Get a single movie by ID
    ///
    /// A 404 or an empty body is reported as [`ServiceError::NotFound`].
    pub async fn get_movie(&self, id: MovieId) -> Result<Movie, ServiceError> {
        tracing::debug!(movie_id = %id, "Fetching movie");
        match self
            .api
            .get_optional::<Movie>(&format!("{MOVIE_PATH}/{id}"))
            .await
        {
            Ok(Some(movie)) => Ok(movie),
            Ok(None) => Err(failed("get_movie", ServiceError::not_found("movie", id))),
            Err(e) => Err(failed("get_movie", e)),
        }
    }

    /// Create a movie owned by `owner`
    pub async fn create_movie(
        &self,
        owner: UserId,
        fields: &MovieFields,
    ) -> Result<Movie, ServiceError> {
        let movie: Movie = self
            .api
            .post(&format!("{MOVIE_PATH}/{owner}"), fields)
            .await
            .map_err(|e| failed("create_movie", e))?;
        tracing::info!(movie_id = %movie.id, owner = %owner, "Movie created");
        Ok(movie)
    }

    /// Replace name, poster and score of an existing movie
    pub async fn update_movie(
        &self,
        id: MovieId,
        fields: &MovieFields,
    ) -> Result<Movie, ServiceError> {
        let movie: Movie = self
            .api
            .patch(&format!("{MOVIE_PATH}/{id}"), fields)
            .await
            .map_err(|e| failed("update_movie", e))?;
        tracing::info!(movie_id = %id, "Movie updated");
        Ok(movie)
    }

    /// Delete a movie; the acknowledgement body is ignored
    pub async fn delete_movie(&self, id: MovieId) -> Result<(), ServiceError> {
        self.api
            .delete(&format!("{MOVIE_PATH}/{id}"))
            .await
            .map_err(|e| failed("delete_movie", e))?;
        tracing::info!(movie_id = %id, "Movie deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures::{catalog_api, dune_fields, fields};
    use crate::infrastructure::testing::FailureMode;

    #[tokio::test]
    async fn created_movie_reads_back_with_stable_id() {
        let (backend, api) = catalog_api();
        let svc = MovieService::new(api);

        let created = svc.create_movie(UserId::new(4), &dune_fields()).await.unwrap();
        let fetched = svc.get_movie(created.id).await.unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Dune");
        assert_eq!(fetched.poster_image, "https://x/p.jpg");
        assert_eq!(fetched.score, 9.0);
        assert_eq!(fetched.owner, Some(UserId::new(4)));

        let again = svc.get_movie(created.id).await.unwrap();
        assert_eq!(again.id, created.id);
        assert_eq!(backend.requests_matching("POST", "/movie/4"), 1);
    }

    #[tokio::test]
    async fn update_keeps_id_and_owner() {
        let (_backend, api) = catalog_api();
        let svc = MovieService::new(api);
        let created = svc.create_movie(UserId::new(4), &dune_fields()).await.unwrap();

        let updated = svc
            .update_movie(created.id, &fields("Dune: Part Two", "https://x/p2.jpg", 8.5))
            .await
            .unwrap();
        let fetched = svc.get_movie(created.id).await.unwrap();

        assert_eq!(updated, fetched);
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.owner, created.owner);
        assert_eq!(fetched.name, "Dune: Part Two");
        assert_eq!(fetched.score, 8.5);
    }

    #[tokio::test]
    async fn deleted_movie_is_not_found() {
        let (_backend, api) = catalog_api();
        let svc = MovieService::new(api);
        let created = svc.create_movie(UserId::new(4), &dune_fields()).await.unwrap();

        svc.delete_movie(created.id).await.unwrap();
        let err = svc.get_movie(created.id).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err, ServiceError::not_found("movie", created.id));
    }

    #[tokio::test]
    async fn list_preserves_server_order() {
        let (backend, api) = catalog_api();
        backend.seed_movie("Zodiac", "https://x/z.jpg", 7.0, UserId::new(1));
        backend.seed_movie("Alien", "https://x/a.jpg", 9.0, UserId::new(1));
        let svc = MovieService::new(api);

        let names: Vec<_> = svc
            .list_movies()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Zodiac", "Alien"]);
    }

    #[tokio::test]
    async fn transport_failures_surface_as_errors() {
        let (backend, api) = catalog_api();
        backend.set_failure(Some(FailureMode::Offline));
        let svc = MovieService::new(api);

        assert!(matches!(
            svc.list_movies().await,
            Err(ServiceError::Transport(_))
        ));
        assert!(matches!(
            svc.create_movie(UserId::new(4), &dune_fields()).await,
            Err(ServiceError::Transport(_))
        ));
        // Offline is not confused with a missing record
        assert!(!svc.get_movie(MovieId::new(1)).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn server_errors_keep_status() {
        let (backend, api) = catalog_api();
        backend.set_failure(Some(FailureMode::ServerError));
        let svc = MovieService::new(api);

        let err = svc
            .update_movie(MovieId::new(1), &dune_fields())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Server { status: 500, .. }));
    }

    #[tokio::test]
    async fn updating_missing_movie_fails() {
        let (_backend, api) = catalog_api();
        let svc = MovieService::new(api);

        let err = svc
            .update_movie(MovieId::new(99), &dune_fields())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
