//! Service providers for the presentation layer
//!
//! The composition root puts one [`Services`] bundle into Dioxus context.
//! Components reach services and controllers through the `use_*` hooks
//! below and never touch infrastructure adapter types.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{GenreService, IdentityService, MovieService};
use crate::application::{Api, ClientConfig};
use crate::ports::outbound::ApiPort;
use crate::presentation::controllers::{MovieDetailController, MovieListController};

/// Concrete service bundle type used by the UI.
pub type UiServices = Services<Api>;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services<A: ApiPort> {
    pub movie: Arc<MovieService<A>>,
    pub genre: Arc<GenreService<A>>,
    /// Talks to the identity provider rather than the catalog API
    pub identity: Arc<IdentityService<A>>,
    pub config: Arc<ClientConfig>,
}

impl<A: ApiPort + Clone> Services<A> {
    /// Create all services
    ///
    /// # Arguments
    /// * `api` - Port rooted at the catalog REST API
    /// * `auth_api` - Port rooted at the identity provider
    /// * `config` - Owner id and identity entry points
    pub fn new(api: A, auth_api: A, config: ClientConfig) -> Self {
        Self {
            movie: Arc::new(MovieService::new(api.clone())),
            genre: Arc::new(GenreService::new(api)),
            identity: Arc::new(IdentityService::new(auth_api)),
            config: Arc::new(config),
        }
    }

    pub fn movie_detail_controller(&self) -> MovieDetailController<A> {
        MovieDetailController::new(self.movie.clone(), self.genre.clone(), self.config.owner_id)
    }

    pub fn movie_list_controller(&self) -> MovieListController<A> {
        MovieListController::new(self.movie.clone(), self.config.owner_id)
    }
}

/// Hook to access the IdentityService from context
pub fn use_identity_service() -> Arc<IdentityService<Api>> {
    let services = use_context::<UiServices>();
    services.identity.clone()
}

/// Hook to access the client configuration from context
pub fn use_client_config() -> Arc<ClientConfig> {
    let services = use_context::<UiServices>();
    services.config.clone()
}

pub fn use_movie_detail_controller() -> MovieDetailController<Api> {
    use_context::<UiServices>().movie_detail_controller()
}

pub fn use_movie_list_controller() -> MovieListController<Api> {
    use_context::<UiServices>().movie_list_controller()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures::{catalog_api, dune_fields};
    use marquee_domain::UserId;

    #[tokio::test]
    async fn controllers_create_for_configured_owner() {
        let (backend, api) = catalog_api();
        let config = ClientConfig {
            owner_id: UserId::new(9),
            ..ClientConfig::default()
        };
        let services = Services::new(api.clone(), api, config);
        let ctrl = services.movie_list_controller();

        let request = crate::presentation::state::SubmitRequest::Create {
            owner: ctrl.owner(),
            fields: dune_fields(),
        };
        ctrl.submit(request).await.unwrap();

        assert_eq!(backend.requests_matching("POST", "/movie/9"), 1);
        assert_eq!(services.movie_detail_controller().owner(), UserId::new(9));
    }
}
