//! View controllers - the network side of each screen
//!
//! Controllers call the services and hand results back; they never own view
//! state. The matching state machines in [`super::state`] decide what to send
//! and how results change the screen.

mod movie_detail;
mod movie_list;

pub use movie_detail::{DetailFetch, MovieDetailController};
pub use movie_list::MovieListController;

use marquee_domain::Movie;

use crate::application::services::MovieService;
use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;
use crate::presentation::state::SubmitRequest;

/// Send a validated submission to the backend
async fn send_submit<A: ApiPort>(
    movies: &MovieService<A>,
    request: SubmitRequest,
) -> Result<Movie, ServiceError> {
    match request {
        SubmitRequest::Create { owner, fields } => movies.create_movie(owner, &fields).await,
        SubmitRequest::Update { id, fields } => movies.update_movie(id, &fields).await,
    }
}
