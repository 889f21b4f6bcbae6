//! Movie list screen state: the collection, the create dialog and the
//! carousel position.

use marquee_domain::{DraftField, Movie, MovieDraft, UserId};

use super::{EditDialog, Remote, SubmitKind, SubmitRequest};
use crate::application::ServiceError;

/// Movies shown per carousel page
pub const CAROUSEL_PAGE_SIZE: usize = 1;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieListState {
    movies: Remote<Vec<Movie>>,
    dialog: EditDialog,
    page: usize,
}

impl MovieListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movies(&self) -> &Remote<Vec<Movie>> {
        &self.movies
    }

    pub fn dialog(&self) -> &EditDialog {
        &self.dialog
    }

    pub fn apply_movies(&mut self, result: Result<Vec<Movie>, ServiceError>) {
        self.movies = Remote::from_result(result);
        self.page = self.page.min(self.page_count().saturating_sub(1));
    }

    /// The create dialog always starts from the default draft
    pub fn open_dialog(&mut self) {
        if !self.dialog.is_open() {
            self.dialog = EditDialog::open(MovieDraft::default());
        }
    }

    pub fn edit(&mut self, field: DraftField, value: impl Into<String>) {
        self.dialog.edit(field, value);
    }

    pub fn cancel_dialog(&mut self) -> bool {
        self.dialog.cancel()
    }

    pub fn begin_submit(&mut self, owner: UserId) -> Option<SubmitRequest> {
        let fields = self.dialog.begin_submit(SubmitKind::Create)?;
        Some(SubmitRequest::Create { owner, fields })
    }

    /// Apply the create result. On success the new movie is appended right
    /// away and true is returned so the caller reloads the list.
    pub fn finish_submit(&mut self, result: Result<Movie, ServiceError>) -> bool {
        if !self.dialog.is_submitting() {
            return false;
        }
        match result {
            Ok(movie) => {
                match self.movies.ready_mut() {
                    Some(movies) => movies.push(movie),
                    None => self.movies = Remote::Ready(vec![movie]),
                }
                self.dialog.finish_ok();
                true
            }
            Err(_) => {
                self.dialog.finish_err();
                false
            }
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        let len = self.movies.ready().map_or(0, Vec::len);
        len.div_ceil(CAROUSEL_PAGE_SIZE)
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn previous_page(&mut self) {
        if self.can_go_previous() {
            self.page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.page += 1;
        }
    }

    /// Movies on the current carousel page
    pub fn visible(&self) -> &[Movie] {
        let Some(movies) = self.movies.ready() else {
            return &[];
        };
        let start = (self.page * CAROUSEL_PAGE_SIZE).min(movies.len());
        let end = (start + CAROUSEL_PAGE_SIZE).min(movies.len());
        &movies[start..end]
    }
}
