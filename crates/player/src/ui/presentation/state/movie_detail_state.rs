//! Movie detail screen state
//!
//! One value holds everything the detail screen renders. Every transition is
//! a method here so the whole screen moves atomically from one state to the
//! next; network calls happen elsewhere and feed their results back in.

use marquee_domain::{
    DraftField, Genre, GenreId, GenreSet, Movie, MovieDraft, MovieFields, MovieId, UserId,
};

use super::{EditDialog, Remote, SubmitKind};
use crate::application::ServiceError;

/// What a validated form submission should do
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRequest {
    Create { owner: UserId, fields: MovieFields },
    Update { id: MovieId, fields: MovieFields },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetailState {
    movie_id: MovieId,
    movie: Remote<Movie>,
    genres: Remote<GenreSet>,
    catalog: Remote<Vec<Genre>>,
    dialog: EditDialog,
    associating: Option<GenreId>,
}

impl MovieDetailState {
    /// Fresh state for a mounted screen: every resource loading
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            movie_id,
            movie: Remote::Loading,
            genres: Remote::Loading,
            catalog: Remote::Loading,
            dialog: EditDialog::Closed,
            associating: None,
        }
    }

    /// Id the screen currently shows (changes after a create from this screen)
    pub fn movie_id(&self) -> MovieId {
        self.movie_id
    }

    pub fn movie(&self) -> &Remote<Movie> {
        &self.movie
    }

    pub fn genres(&self) -> &Remote<GenreSet> {
        &self.genres
    }

    pub fn catalog(&self) -> &Remote<Vec<Genre>> {
        &self.catalog
    }

    pub fn dialog(&self) -> &EditDialog {
        &self.dialog
    }

    pub fn associating(&self) -> Option<GenreId> {
        self.associating
    }

    pub fn apply_movie(&mut self, result: Result<Movie, ServiceError>) {
        self.movie = Remote::from_result(result);
    }

    pub fn apply_genres(&mut self, result: Result<GenreSet, ServiceError>) {
        self.genres = Remote::from_result(result);
    }

    pub fn apply_catalog(&mut self, result: Result<Vec<Genre>, ServiceError>) {
        self.catalog = Remote::from_result(result);
    }

    /// Open the edit dialog, prefilled from the loaded movie if there is one
    pub fn open_dialog(&mut self) {
        if self.dialog.is_open() {
            return;
        }
        let draft = self
            .movie
            .ready()
            .map(MovieDraft::from_movie)
            .unwrap_or_default();
        self.dialog = EditDialog::open(draft);
    }

    pub fn edit(&mut self, field: DraftField, value: impl Into<String>) {
        self.dialog.edit(field, value);
    }

    pub fn cancel_dialog(&mut self) -> bool {
        self.dialog.cancel()
    }

    /// Validate and, if the draft is clean, start submitting.
    ///
    /// Updates the loaded movie, or creates one for `owner` when none is
    /// loaded. Returns `None` when nothing should be sent.
    pub fn begin_submit(&mut self, owner: UserId) -> Option<SubmitRequest> {
        let loaded = self.movie.ready().map(|movie| movie.id);
        let kind = match loaded {
            Some(_) => SubmitKind::Update,
            None => SubmitKind::Create,
        };
        let fields = self.dialog.begin_submit(kind)?;
        Some(match loaded {
            Some(id) => SubmitRequest::Update { id, fields },
            None => SubmitRequest::Create { owner, fields },
        })
    }

    /// Apply the submission result. Returns true when the screen should reload.
    pub fn finish_submit(&mut self, result: Result<Movie, ServiceError>) -> bool {
        if !self.dialog.is_submitting() {
            return false;
        }
        match result {
            Ok(movie) => {
                self.movie_id = movie.id;
                self.movie = Remote::Ready(movie);
                self.dialog.finish_ok();
                true
            }
            Err(_) => {
                self.dialog.finish_err();
                false
            }
        }
    }

    /// Mark an association as in flight. Returns false if one already is.
    pub fn begin_associate(&mut self, genre: GenreId) -> bool {
        if self.associating.is_some() {
            return false;
        }
        self.associating = Some(genre);
        true
    }

    /// Clear the in-flight association. Returns true when the screen should
    /// reload; a failure leaves the genre display untouched.
    pub fn finish_associate(&mut self, result: Result<(), ServiceError>) -> bool {
        self.associating = None;
        result.is_ok()
    }
}
