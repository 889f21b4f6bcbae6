//! Screen state machines
//!
//! Plain values with explicit transitions. Views keep one of these in a
//! `Signal` and write it once per transition.

mod edit_dialog;
mod identity_gate;
mod movie_detail_state;
mod movie_list_state;
mod remote;

pub use edit_dialog::{EditDialog, SubmitKind, CREATE_FAILED_MESSAGE, UPDATE_FAILED_MESSAGE};
pub use identity_gate::{gate, GateOutcome};
pub use movie_detail_state::{MovieDetailState, SubmitRequest};
pub use movie_list_state::{MovieListState, CAROUSEL_PAGE_SIZE};
pub use remote::Remote;
