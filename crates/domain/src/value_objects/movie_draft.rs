//! Movie form draft and its validation schema
//!
//! A [`MovieDraft`] is raw form input. [`MovieDraft::validate`] either yields
//! [`MovieFields`], which is what create and update requests carry, or a
//! [`DraftErrors`] listing every violated field. Nothing here touches the
//! network.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::Movie;

/// Minimum length (in characters) of a movie name
pub const MIN_MOVIE_NAME_LENGTH: u64 = 2;
/// Maximum length (in characters) of a movie name
pub const MAX_MOVIE_NAME_LENGTH: u64 = 50;
/// Minimum length of a poster image reference
pub const MIN_POSTER_IMAGE_LENGTH: u64 = 2;
/// Maximum length of a poster image reference
pub const MAX_POSTER_IMAGE_LENGTH: u64 = 300;
/// Lowest accepted score (inclusive)
pub const MIN_SCORE: f64 = 1.0;
/// Highest accepted score (inclusive)
pub const MAX_SCORE: f64 = 10.0;

const SCORE_NOT_A_NUMBER: &str = "Score must be a number";

/// Validated movie fields, as sent in create and update bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MovieFields {
    #[validate(length(
        min = MIN_MOVIE_NAME_LENGTH,
        max = MAX_MOVIE_NAME_LENGTH,
        message = "Name must be between 2 and 50 characters"
    ))]
    pub name: String,
    #[validate(length(
        min = MIN_POSTER_IMAGE_LENGTH,
        max = MAX_POSTER_IMAGE_LENGTH,
        message = "Image must be between 2 and 300 characters"
    ))]
    pub poster_image: String,
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE, message = "Score must be between 1 and 10"))]
    pub score: f64,
}

/// Form fields that can carry violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DraftField {
    Name,
    PosterImage,
    Score,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Name, DraftField::PosterImage, DraftField::Score];

    /// Wire/form key of the field
    pub fn key(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::PosterImage => "poster_image",
            DraftField::Score => "score",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Movie name",
            DraftField::PosterImage => "Image",
            DraftField::Score => "Score",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field-level violations found while validating a draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftErrors {
    fields: BTreeMap<DraftField, Vec<String>>,
}

impl DraftErrors {
    pub fn push(&mut self, field: DraftField, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn messages(&self, field: DraftField) -> &[String] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First message for a field, for inline display under the input
    pub fn first(&self, field: DraftField) -> Option<&str> {
        self.messages(field).first().map(String::as_str)
    }

    pub fn has(&self, field: DraftField) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn clear_field(&mut self, field: DraftField) {
        self.fields.remove(&field);
    }

    pub fn fields(&self) -> impl Iterator<Item = DraftField> + '_ {
        self.fields.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for DraftErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for DraftErrors {}

impl From<ValidationErrors> for DraftErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = DraftErrors::default();
        for (key, failures) in errors.field_errors() {
            let Some(field) = DraftField::from_key(&key) else {
                continue;
            };
            for failure in failures.iter() {
                let message = failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| failure.code.to_string());
                out.push(field, message);
            }
        }
        out
    }
}

/// In-progress form input for a movie.
///
/// `score` keeps the text the user typed; it is coerced to a number during
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    pub name: String,
    pub poster_image: String,
    pub score: String,
}

impl Default for MovieDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            poster_image: String::new(),
            score: "1".to_string(),
        }
    }
}

impl MovieDraft {
    /// Draft prepopulated from a loaded movie (edit dialog)
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            name: movie.name.clone(),
            poster_image: movie.poster_image.clone(),
            score: movie.score_label(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::PosterImage => &self.poster_image,
            DraftField::Score => &self.score,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::PosterImage => self.poster_image = value,
            DraftField::Score => self.score = value,
        }
    }

    /// Check every field and produce the request fields.
    ///
    /// All violations are collected in one pass.
    pub fn validate(&self) -> Result<MovieFields, DraftErrors> {
        let parsed_score = parse_score(&self.score);
        let fields = MovieFields {
            name: self.name.clone(),
            poster_image: self.poster_image.clone(),
            score: parsed_score.unwrap_or(MIN_SCORE),
        };

        let mut errors = match fields.validate() {
            Ok(()) => DraftErrors::default(),
            Err(e) => DraftErrors::from(e),
        };
        if parsed_score.is_none() {
            errors.clear_field(DraftField::Score);
            errors.push(DraftField::Score, SCORE_NOT_A_NUMBER);
        }

        if errors.is_empty() {
            Ok(fields)
        } else {
            Err(errors)
        }
    }
}

fn parse_score(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|s| s.is_finite())
}
