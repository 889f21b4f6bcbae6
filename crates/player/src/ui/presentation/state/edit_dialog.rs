//! Edit dialog state machine
//!
//! `Closed -> Open -> Submitting -> Closed`, with `Submitting -> Open` when the
//! request fails. While submitting the draft is frozen: edits, cancel and a
//! second submit are all ignored.

use marquee_domain::{DraftErrors, DraftField, MovieDraft, MovieFields};

pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update movie";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create movie";

/// Which request a submission sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    Create,
    Update,
}

impl SubmitKind {
    pub fn failure_message(self) -> &'static str {
        match self {
            SubmitKind::Create => CREATE_FAILED_MESSAGE,
            SubmitKind::Update => UPDATE_FAILED_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditDialog {
    #[default]
    Closed,
    Open {
        draft: MovieDraft,
        errors: DraftErrors,
        /// Request-level failure shown above the form
        message: Option<String>,
    },
    Submitting {
        draft: MovieDraft,
        kind: SubmitKind,
    },
}

impl EditDialog {
    pub fn open(draft: MovieDraft) -> Self {
        EditDialog::Open {
            draft,
            errors: DraftErrors::default(),
            message: None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditDialog::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, EditDialog::Submitting { .. })
    }

    pub fn submitting(&self) -> Option<SubmitKind> {
        match self {
            EditDialog::Submitting { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&MovieDraft> {
        match self {
            EditDialog::Closed => None,
            EditDialog::Open { draft, .. } | EditDialog::Submitting { draft, .. } => Some(draft),
        }
    }

    pub fn errors(&self) -> Option<&DraftErrors> {
        match self {
            EditDialog::Open { errors, .. } => Some(errors),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            EditDialog::Open { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Change one field of an open draft and drop that field's errors
    pub fn edit(&mut self, field: DraftField, value: impl Into<String>) {
        if let EditDialog::Open { draft, errors, .. } = self {
            draft.set(field, value);
            errors.clear_field(field);
        }
    }

    /// Discard the draft. Returns false while a submission is in flight.
    pub fn cancel(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = EditDialog::Closed;
        true
    }

    /// Validate the open draft.
    ///
    /// On success the dialog moves to `Submitting` as `kind` and the fields to
    /// send are returned. On violations it stays open with the field errors set.
    pub fn begin_submit(&mut self, kind: SubmitKind) -> Option<MovieFields> {
        let EditDialog::Open { draft, errors, message } = self else {
            return None;
        };
        match draft.validate() {
            Ok(fields) => {
                let draft = std::mem::take(draft);
                *self = EditDialog::Submitting { draft, kind };
                Some(fields)
            }
            Err(violations) => {
                *errors = violations;
                *message = None;
                None
            }
        }
    }

    /// Close after a successful submission
    pub fn finish_ok(&mut self) {
        if self.is_submitting() {
            *self = EditDialog::Closed;
        }
    }

    /// Reopen with the submitted draft intact and the failure message for
    /// the request that was sent
    pub fn finish_err(&mut self) {
        if let EditDialog::Submitting { draft, kind } = self {
            let message = kind.failure_message();
            let draft = std::mem::take(draft);
            *self = EditDialog::Open {
                draft,
                errors: DraftErrors::default(),
                message: Some(message.to_string()),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune_draft() -> MovieDraft {
        MovieDraft {
            name: "Dune".into(),
            poster_image: "https://x/p.jpg".into(),
            score: "9".into(),
        }
    }

    #[test]
    fn invalid_draft_stays_open_with_errors() {
        let mut dialog = EditDialog::open(MovieDraft {
            name: "D".into(),
            ..dune_draft()
        });

        assert!(dialog.begin_submit(SubmitKind::Create).is_none());
        assert!(!dialog.is_submitting());
        assert!(dialog.errors().is_some_and(|e| e.has(DraftField::Name)));
    }

    #[test]
    fn editing_a_field_clears_its_errors_only() {
        let mut dialog = EditDialog::open(MovieDraft {
            name: "D".into(),
            poster_image: "x".into(),
            score: "11".into(),
        });
        dialog.begin_submit(SubmitKind::Create);

        dialog.edit(DraftField::Name, "Dune");
        let errors = dialog.errors().unwrap();
        assert!(!errors.has(DraftField::Name));
        assert!(errors.has(DraftField::PosterImage));
        assert!(errors.has(DraftField::Score));
        assert_eq!(dialog.draft().unwrap().name, "Dune");
    }

    #[test]
    fn second_submit_while_submitting_is_ignored() {
        let mut dialog = EditDialog::open(dune_draft());

        assert!(dialog.begin_submit(SubmitKind::Create).is_some());
        assert!(dialog.is_submitting());
        assert!(dialog.begin_submit(SubmitKind::Create).is_none());
        assert!(!dialog.cancel());
        dialog.edit(DraftField::Name, "Changed");
        assert_eq!(dialog.draft().unwrap().name, "Dune");
    }

    #[test]
    fn failure_reopens_with_draft_and_message() {
        let mut dialog = EditDialog::open(dune_draft());
        dialog.begin_submit(SubmitKind::Create);

        dialog.finish_err();

        assert_eq!(dialog.draft(), Some(&dune_draft()));
        assert_eq!(dialog.message(), Some(CREATE_FAILED_MESSAGE));
        assert!(dialog.errors().is_some_and(|e| e.is_empty()));
    }

    #[test]
    fn failure_message_follows_the_request_sent() {
        let mut dialog = EditDialog::open(dune_draft());
        dialog.begin_submit(SubmitKind::Update);
        assert_eq!(dialog.submitting(), Some(SubmitKind::Update));

        dialog.finish_err();
        assert_eq!(dialog.message(), Some(UPDATE_FAILED_MESSAGE));
    }

    #[test]
    fn success_closes_and_discards_draft() {
        let mut dialog = EditDialog::open(dune_draft());
        dialog.begin_submit(SubmitKind::Create);
        dialog.finish_ok();
        assert_eq!(dialog, EditDialog::Closed);
        assert!(dialog.draft().is_none());
    }

    #[test]
    fn cancel_discards_open_draft() {
        let mut dialog = EditDialog::open(dune_draft());
        assert!(dialog.cancel());
        assert!(!dialog.is_open());
    }
}
