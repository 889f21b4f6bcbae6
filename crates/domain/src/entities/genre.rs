//! Genre entity and the per-movie genre set

use serde::{Deserialize, Serialize};

use crate::GenreId;

/// A catalog genre. The client never edits or deletes genres.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// Genres associated with one movie.
///
/// Duplicate ids collapse to their first occurrence; otherwise the server
/// order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreSet {
    genres: Vec<Genre>,
}

impl GenreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a genre unless its id is already present.
    ///
    /// Returns `true` if the genre was added.
    pub fn insert(&mut self, genre: Genre) -> bool {
        if self.contains(genre.id) {
            return false;
        }
        self.genres.push(genre);
        true
    }

    pub fn contains(&self, id: GenreId) -> bool {
        self.genres.iter().any(|g| g.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Genre> {
        self.genres.iter()
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }
}

impl FromIterator<Genre> for GenreSet {
    fn from_iter<I: IntoIterator<Item = Genre>>(iter: I) -> Self {
        let mut set = Self::new();
        for genre in iter {
            set.insert(genre);
        }
        set
    }
}

impl From<Vec<Genre>> for GenreSet {
    fn from(genres: Vec<Genre>) -> Self {
        genres.into_iter().collect()
    }
}
