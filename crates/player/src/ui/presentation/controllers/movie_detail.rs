//! Detail/edit screen controller

use std::sync::Arc;

use futures_util::future::join3;
use marquee_domain::{Genre, GenreId, GenreSet, Movie, MovieId, UserId};

use super::send_submit;
use crate::application::services::{GenreService, MovieService};
use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;
use crate::presentation::state::{MovieDetailState, SubmitRequest};

/// Results of loading every resource on the detail screen
#[derive(Debug)]
pub struct DetailFetch {
    pub movie: Result<Movie, ServiceError>,
    pub genres: Result<GenreSet, ServiceError>,
    pub catalog: Result<Vec<Genre>, ServiceError>,
}

impl DetailFetch {
    /// Replace all three resources in one transition
    pub fn apply_to(self, state: &mut MovieDetailState) {
        state.apply_movie(self.movie);
        state.apply_genres(self.genres);
        state.apply_catalog(self.catalog);
    }
}

pub struct MovieDetailController<A: ApiPort> {
    movies: Arc<MovieService<A>>,
    genres: Arc<GenreService<A>>,
    owner: UserId,
}

impl<A: ApiPort> Clone for MovieDetailController<A> {
    fn clone(&self) -> Self {
        Self {
            movies: self.movies.clone(),
            genres: self.genres.clone(),
            owner: self.owner,
        }
    }
}

impl<A: ApiPort> MovieDetailController<A> {
    pub fn new(movies: Arc<MovieService<A>>, genres: Arc<GenreService<A>>, owner: UserId) -> Self {
        Self {
            movies,
            genres,
            owner,
        }
    }

    /// Owner given to movies created from this screen
    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub async fn fetch_movie(&self, id: MovieId) -> Result<Movie, ServiceError> {
        self.movies.get_movie(id).await
    }

    pub async fn fetch_genres(&self, id: MovieId) -> Result<GenreSet, ServiceError> {
        self.genres.get_genres_for_movie(id).await
    }

    pub async fn fetch_catalog(&self) -> Result<Vec<Genre>, ServiceError> {
        self.genres.list_genres().await
    }

    /// Fetch movie, its genres and the catalog concurrently
    pub async fn fetch_all(&self, id: MovieId) -> DetailFetch {
        let (movie, genres, catalog) = join3(
            self.fetch_movie(id),
            self.fetch_genres(id),
            self.fetch_catalog(),
        )
        .await;
        DetailFetch {
            movie,
            genres,
            catalog,
        }
    }

    pub async fn submit(&self, request: SubmitRequest) -> Result<Movie, ServiceError> {
        send_submit(&self.movies, request).await
    }

    /// Delete the movie. Failures are logged only; the caller leaves the
    /// screen either way.
    pub async fn delete(&self, id: MovieId) {
        if let Err(e) = self.movies.delete_movie(id).await {
            tracing::error!(movie_id = %id, error = %e, "Movie delete failed, leaving detail view anyway");
        }
    }

    pub async fn associate(&self, movie: MovieId, genre: GenreId) -> Result<(), ServiceError> {
        self.genres.associate_genre(movie, genre).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Api;
    use crate::infrastructure::testing::fixtures::catalog_api;
    use crate::infrastructure::testing::FailureMode;
    use crate::ports::outbound::MockRawApiPort;
    use marquee_domain::DraftField;

    const OWNER: UserId = UserId::new(4);

    fn controller(api: Api) -> MovieDetailController<Api> {
        MovieDetailController::new(
            Arc::new(MovieService::new(api.clone())),
            Arc::new(GenreService::new(api)),
            OWNER,
        )
    }

    async fn mounted(ctrl: &MovieDetailController<Api>, id: MovieId) -> MovieDetailState {
        let mut state = MovieDetailState::new(id);
        ctrl.fetch_all(id).await.apply_to(&mut state);
        state
    }

    #[tokio::test]
    async fn mount_loads_movie_genres_and_catalog() {
        let (backend, api) = catalog_api();
        let id = backend.seed_movie("Dune", "https://x/p.jpg", 9.0, OWNER);
        let scifi = backend.seed_genre("Sci-Fi");
        backend.seed_genre("Drama");
        let ctrl = controller(api);
        ctrl.associate(id, scifi).await.unwrap();

        let state = mounted(&ctrl, id).await;

        assert_eq!(state.movie().ready().map(|m| m.name.as_str()), Some("Dune"));
        assert!(state.genres().ready().is_some_and(|g| g.contains(scifi)));
        assert_eq!(state.catalog().ready().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn unknown_movie_is_missing() {
        let (_backend, api) = catalog_api();
        let ctrl = controller(api);

        let state = mounted(&ctrl, MovieId::new(404)).await;

        assert!(state.movie().is_missing());
        assert!(state.catalog().ready().is_some());
    }

    #[tokio::test]
    async fn edit_submit_and_reload_shows_new_values() {
        let (backend, api) = catalog_api();
        let id = backend.seed_movie("Dune", "https://x/p.jpg", 9.0, OWNER);
        let ctrl = controller(api);
        let mut state = mounted(&ctrl, id).await;

        state.open_dialog();
        state.edit(DraftField::Name, "Dune: Part Two");
        state.edit(DraftField::Score, "8.5");
        let request = state.begin_submit(ctrl.owner()).unwrap();
        let result = ctrl.submit(request).await;
        assert!(state.finish_submit(result));
        ctrl.fetch_all(state.movie_id()).await.apply_to(&mut state);

        let movie = state.movie().ready().unwrap();
        assert_eq!(movie.id, id);
        assert_eq!(movie.name, "Dune: Part Two");
        assert_eq!(movie.score, 8.5);
        assert_eq!(movie.owner, Some(OWNER));
        assert_eq!(backend.requests_matching("PATCH", &format!("/movie/{id}")), 1);
    }

    #[tokio::test]
    async fn submit_without_loaded_movie_creates_for_owner() {
        let (backend, api) = catalog_api();
        let ctrl = controller(api);
        let mut state = mounted(&ctrl, MovieId::new(404)).await;

        state.open_dialog();
        state.edit(DraftField::Name, "Dune");
        state.edit(DraftField::PosterImage, "https://x/p.jpg");
        state.edit(DraftField::Score, "9");
        let request = state.begin_submit(ctrl.owner()).unwrap();
        let result = ctrl.submit(request).await;

        assert!(state.finish_submit(result));
        assert_eq!(backend.requests_matching("POST", "/movie/4"), 1);
        let created = backend.movie(state.movie_id()).unwrap();
        assert_eq!(created.name, "Dune");
        assert_eq!(created.owner, Some(OWNER));
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_network() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().never();
        raw.expect_patch_json().never();
        let ctrl = controller(Api::new(Arc::new(raw)));
        let mut state = MovieDetailState::new(MovieId::new(1));

        state.open_dialog();
        state.edit(DraftField::Name, "D");
        state.edit(DraftField::PosterImage, "https://x/p.jpg");
        state.edit(DraftField::Score, "11");

        if let Some(request) = state.begin_submit(ctrl.owner()) {
            let _ = ctrl.submit(request).await;
        }
        let errors = state.dialog().errors().unwrap();
        assert!(errors.has(DraftField::Name));
        assert!(errors.has(DraftField::Score));
    }

    #[tokio::test]
    async fn failed_update_keeps_dialog_open() {
        let (backend, api) = catalog_api();
        let id = backend.seed_movie("Dune", "https://x/p.jpg", 9.0, OWNER);
        let ctrl = controller(api);
        let mut state = mounted(&ctrl, id).await;

        state.open_dialog();
        let request = state.begin_submit(ctrl.owner()).unwrap();
        backend.set_failure(Some(FailureMode::ServerError));
        let result = ctrl.submit(request).await;

        assert!(!state.finish_submit(result));
        assert_eq!(state.dialog().message(), Some("Failed to update movie"));
    }

    #[tokio::test]
    async fn associate_then_reload_shows_genre() {
        let (backend, api) = catalog_api();
        let id = backend.seed_movie("Dune", "https://x/p.jpg", 9.0, OWNER);
        let scifi = backend.seed_genre("Sci-Fi");
        let ctrl = controller(api);
        let mut state = mounted(&ctrl, id).await;
        assert!(state.genres().ready().is_some_and(GenreSet::is_empty));

        assert!(state.begin_associate(scifi));
        let result = ctrl.associate(id, scifi).await;
        assert!(state.finish_associate(result));
        ctrl.fetch_all(id).await.apply_to(&mut state);

        assert!(state.genres().ready().is_some_and(|g| g.contains(scifi)));
    }

    #[tokio::test]
    async fn failed_association_leaves_genres_alone() {
        let (backend, api) = catalog_api();
        let id = backend.seed_movie("Dune", "https://x/p.jpg", 9.0, OWNER);
        let ctrl = controller(api);
        let mut state = mounted(&ctrl, id).await;
        let before = state.genres().clone();

        assert!(state.begin_associate(GenreId::new(77)));
        let result = ctrl.associate(id, GenreId::new(77)).await;

        assert!(!state.finish_associate(result));
        assert_eq!(state.genres(), &before);
        assert_eq!(state.associating(), None);
    }

    #[tokio::test]
    async fn delete_failure_is_swallowed() {
        let (backend, api) = catalog_api();
        let id = backend.seed_movie("Dune", "https://x/p.jpg", 9.0, OWNER);
        let ctrl = controller(api);

        backend.set_failure(Some(FailureMode::Offline));
        ctrl.delete(id).await;
        backend.set_failure(None);

        assert!(backend.movie(id).is_some());
        ctrl.delete(id).await;
        assert!(backend.movie(id).is_none());
    }
}
