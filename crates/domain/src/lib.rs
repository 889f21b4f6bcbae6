//! Marquee domain types.
//!
//! Entities mirror what the catalog backend stores; value objects hold the
//! client-side rules applied before anything is sent.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Genre, GenreSet, Movie, SessionUser};
pub use error::DomainError;
pub use ids::{GenreId, MovieId, UserId};
pub use value_objects::{
    DraftErrors, DraftField, MovieDraft, MovieFields, MAX_MOVIE_NAME_LENGTH,
    MAX_POSTER_IMAGE_LENGTH, MAX_SCORE, MIN_MOVIE_NAME_LENGTH, MIN_POSTER_IMAGE_LENGTH, MIN_SCORE,
};
