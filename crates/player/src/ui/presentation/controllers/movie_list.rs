//! List screen controller

use std::sync::Arc;

use marquee_domain::{Movie, UserId};

use super::send_submit;
use crate::application::services::MovieService;
use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;
use crate::presentation::state::SubmitRequest;

pub struct MovieListController<A: ApiPort> {
    movies: Arc<MovieService<A>>,
    owner: UserId,
}

impl<A: ApiPort> Clone for MovieListController<A> {
    fn clone(&self) -> Self {
        Self {
            movies: self.movies.clone(),
            owner: self.owner,
        }
    }
}

impl<A: ApiPort> MovieListController<A> {
    pub fn new(movies: Arc<MovieService<A>>, owner: UserId) -> Self {
        Self { movies, owner }
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub async fn fetch_movies(&self) -> Result<Vec<Movie>, ServiceError> {
        self.movies.list_movies().await
    }

    pub async fn submit(&self, request: SubmitRequest) -> Result<Movie, ServiceError> {
        send_submit(&self.movies, request).await
    }
}
