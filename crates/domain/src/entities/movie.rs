//! Movie entity - A catalog entry owned by a user

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::{MovieId, UserId};

/// A persisted movie.
///
/// The id is assigned by the backend and never changes; every other field can
/// be replaced through an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    pub poster_image: String,
    #[serde(deserialize_with = "score_from_number_or_string")]
    pub score: f64,
    #[serde(
        rename = "userid",
        alias = "user_id",
        alias = "userId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub owner: Option<UserId>,
}

impl Movie {
    /// Score as shown to users (`9` rather than `9.0`).
    pub fn score_label(&self) -> String {
        self.score.to_string()
    }
}

// Numeric columns sometimes come back as strings (e.g. Postgres NUMERIC).
fn score_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Number(f64),
        Text(String),
    }

    match RawScore::deserialize(deserializer)? {
        RawScore::Number(n) => Ok(n),
        RawScore::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid score '{}'", s))),
    }
}
