//! Value objects - Immutable objects defined by their attributes

mod movie_draft;

pub use movie_draft::{
    DraftErrors, DraftField, MovieDraft, MovieFields, MAX_MOVIE_NAME_LENGTH,
    MAX_POSTER_IMAGE_LENGTH, MAX_SCORE, MIN_MOVIE_NAME_LENGTH, MIN_POSTER_IMAGE_LENGTH, MIN_SCORE,
};
