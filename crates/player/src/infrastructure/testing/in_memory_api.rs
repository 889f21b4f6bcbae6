//! In-memory catalog backend
//!
//! Serves the same paths as the real REST backend so services and
//! controllers can be exercised end to end without a network.

use std::sync::{Mutex, MutexGuard};

use marquee_domain::{Genre, GenreId, Movie, MovieFields, MovieId, SessionUser, UserId};
use serde_json::{json, Value};

use crate::ports::outbound::{ApiError, RawApiPort};

/// Failure injected into every request while set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// No response at all
    Offline,
    /// HTTP 500
    ServerError,
}

#[derive(Default)]
struct CatalogState {
    movies: Vec<Movie>,
    genres: Vec<Genre>,
    // Pairs are appended as posted; duplicates are kept.
    associations: Vec<(MovieId, GenreId)>,
    next_movie_id: i64,
    next_genre_id: i64,
    session_user: Option<SessionUser>,
    failure: Option<FailureMode>,
    requests: Vec<(String, String)>,
}

#[derive(Default)]
pub struct InMemoryCatalogApi {
    state: Mutex<CatalogState>,
}

fn not_found(what: &str) -> ApiError {
    ApiError::HttpError {
        status: 404,
        message: format!("{what} not found"),
    }
}

fn bad_request(message: impl Into<String>) -> ApiError {
    ApiError::HttpError {
        status: 400,
        message: message.into(),
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::SerializeError(e.to_string()))
}

fn segments(path: &str) -> Vec<&str> {
    path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect()
}

fn parse_id<T: std::str::FromStr>(segment: &str) -> Result<T, ApiError> {
    segment
        .parse()
        .map_err(|_| bad_request(format!("invalid id '{segment}'")))
}

impl InMemoryCatalogApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn seed_movie(&self, name: &str, poster_image: &str, score: f64, owner: UserId) -> MovieId {
        let mut state = self.state();
        state.next_movie_id += 1;
        let id = MovieId::new(state.next_movie_id);
        state.movies.push(Movie {
            id,
            name: name.to_string(),
            poster_image: poster_image.to_string(),
            score,
            owner: Some(owner),
        });
        id
    }

    pub fn seed_genre(&self, name: &str) -> GenreId {
        let mut state = self.state();
        state.next_genre_id += 1;
        let id = GenreId::new(state.next_genre_id);
        state.genres.push(Genre {
            id,
            name: name.to_string(),
        });
        id
    }

    pub fn sign_in(&self, user: SessionUser) {
        self.state().session_user = Some(user);
    }

    pub fn set_failure(&self, failure: Option<FailureMode>) {
        self.state().failure = failure;
    }

    pub fn movie(&self, id: MovieId) -> Option<Movie> {
        self.state().movies.iter().find(|m| m.id == id).cloned()
    }

    pub fn movie_count(&self) -> usize {
        self.state().movies.len()
    }

    pub fn association_count(&self, movie: MovieId, genre: GenreId) -> usize {
        self.state()
            .associations
            .iter()
            .filter(|(m, g)| *m == movie && *g == genre)
            .count()
    }

    /// Number of requests seen with this method and exact path
    pub fn requests_matching(&self, method: &str, path: &str) -> usize {
        self.state()
            .requests
            .iter()
            .filter(|(m, p)| m == method && p == path)
            .count()
    }

    /// Total number of requests seen, failed ones included
    pub fn request_count(&self) -> usize {
        self.state().requests.len()
    }

    fn handle(&self, method: &str, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let mut state = self.state();
        state.requests.push((method.to_string(), path.to_string()));

        match state.failure {
            Some(FailureMode::Offline) => {
                return Err(ApiError::RequestFailed("connection refused".into()))
            }
            Some(FailureMode::ServerError) => {
                return Err(ApiError::HttpError {
                    status: 500,
                    message: "internal server error".into(),
                })
            }
            None => {}
        }

        match (method, segments(path).as_slice()) {
            ("GET", ["movie"]) => to_value(&state.movies),
            ("GET", ["movie", id]) => {
                let id: MovieId = parse_id(id)?;
                let movie = state.movies.iter().find(|m| m.id == id);
                movie.map(to_value).unwrap_or_else(|| Err(not_found("movie")))
            }
            ("POST", ["movie", owner]) => {
                let owner: UserId = parse_id(owner)?;
                let fields = decode_fields(body)?;
                state.next_movie_id += 1;
                let movie = Movie {
                    id: MovieId::new(state.next_movie_id),
                    name: fields.name,
                    poster_image: fields.poster_image,
                    score: fields.score,
                    owner: Some(owner),
                };
                let value = to_value(&movie)?;
                state.movies.push(movie);
                Ok(value)
            }
            ("PATCH", ["movie", id]) => {
                let id: MovieId = parse_id(id)?;
                let fields = decode_fields(body)?;
                let movie = state
                    .movies
                    .iter_mut()
                    .find(|m| m.id == id)
                    .ok_or_else(|| not_found("movie"))?;
                movie.name = fields.name;
                movie.poster_image = fields.poster_image;
                movie.score = fields.score;
                to_value(&*movie)
            }
            ("DELETE", ["movie", id]) => {
                let id: MovieId = parse_id(id)?;
                let before = state.movies.len();
                state.movies.retain(|m| m.id != id);
                if state.movies.len() == before {
                    return Err(not_found("movie"));
                }
                state.associations.retain(|(m, _)| *m != id);
                Ok(Value::Null)
            }
            ("GET", ["genre"]) => to_value(&state.genres),
            ("GET", ["genre", movie_id]) => {
                let movie_id: MovieId = parse_id(movie_id)?;
                let genres: Vec<&Genre> = state
                    .associations
                    .iter()
                    .filter(|(m, _)| *m == movie_id)
                    .filter_map(|(_, g)| state.genres.iter().find(|genre| genre.id == *g))
                    .collect();
                Ok(json!({ "genres": to_value(&genres)? }))
            }
            ("POST", ["genre", "genremovie", movie_id, genre_id]) => {
                let movie_id: MovieId = parse_id(movie_id)?;
                let genre_id: GenreId = parse_id(genre_id)?;
                if !state.movies.iter().any(|m| m.id == movie_id) {
                    return Err(not_found("movie"));
                }
                if !state.genres.iter().any(|g| g.id == genre_id) {
                    return Err(not_found("genre"));
                }
                state.associations.push((movie_id, genre_id));
                Ok(Value::Null)
            }
            ("GET", ["api", "auth", "me"]) => match &state.session_user {
                Some(user) => to_value(user),
                None => Err(ApiError::HttpError {
                    status: 401,
                    message: "not signed in".into(),
                }),
            },
            _ => Err(not_found("route")),
        }
    }
}

fn decode_fields(body: Option<&Value>) -> Result<MovieFields, ApiError> {
    let body = body.ok_or_else(|| bad_request("missing body"))?;
    serde_json::from_value(body.clone()).map_err(|e| bad_request(e.to_string()))
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for InMemoryCatalogApi {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.handle("GET", path, None)
    }

    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        match self.handle("GET", path, None) {
            Ok(value) => Ok(Some(value)),
            Err(ApiError::HttpError { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.handle("POST", path, Some(body))
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.handle("POST", path, None).map(|_| ())
    }

    async fn patch_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.handle("PATCH", path, Some(body))
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.handle("DELETE", path, None).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_route_is_404() {
        let api = InMemoryCatalogApi::new();
        let err = api.get_json("/actors").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn genres_for_movie_keep_duplicates() {
        let api = InMemoryCatalogApi::new();
        let movie = api.seed_movie("Dune", "https://x/p.jpg", 9.0, UserId::new(4));
        let genre = api.seed_genre("Sci-Fi");
        let path = format!("/genre/genremovie/{movie}/{genre}");
        api.post_empty(&path).await.unwrap();
        api.post_empty(&path).await.unwrap();

        let body = api.get_json(&format!("/genre/{movie}")).await.unwrap();
        assert_eq!(body["genres"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn association_requires_both_records() {
        let api = InMemoryCatalogApi::new();
        let genre = api.seed_genre("Sci-Fi");
        let err = api
            .post_empty(&format!("/genre/genremovie/99/{genre}"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn deleting_movie_drops_its_associations() {
        let api = InMemoryCatalogApi::new();
        let movie = api.seed_movie("Dune", "https://x/p.jpg", 9.0, UserId::new(4));
        let genre = api.seed_genre("Sci-Fi");
        api.post_empty(&format!("/genre/genremovie/{movie}/{genre}"))
            .await
            .unwrap();

        api.delete(&format!("/movie/{movie}")).await.unwrap();
        assert_eq!(api.association_count(movie, genre), 0);
        assert_eq!(api.movie_count(), 0);
    }

    #[tokio::test]
    async fn failed_requests_are_still_recorded() {
        let api = InMemoryCatalogApi::new();
        api.set_failure(Some(FailureMode::Offline));
        assert!(api.get_json("/movie").await.is_err());
        assert_eq!(api.requests_matching("GET", "/movie"), 1);
    }

    #[tokio::test]
    async fn profile_requires_a_session() {
        let api = InMemoryCatalogApi::new();
        let err = api.get_json("/api/auth/me").await.unwrap_err();
        assert_eq!(err.status(), Some(401));

        api.sign_in(SessionUser {
            name: "Ada".into(),
            picture: None,
            email: None,
        });
        let body = api.get_json("/api/auth/me").await.unwrap();
        assert_eq!(body["name"], "Ada");
        assert_eq!(api.request_count(), 2);
    }
}
