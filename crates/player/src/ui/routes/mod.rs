//! Client routes

use dioxus::prelude::*;
use marquee_domain::MovieId;

use crate::ports::outbound::PlatformPort;

mod home;
mod movie_detail;
mod movie_list;

pub use home::HomeRoute;
pub use movie_detail::MovieDetailRoute;
pub use movie_list::MovieListRoute;

const APP_TITLE: &str = "Marquee";

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    HomeRoute {},
    #[route("/movies")]
    MovieListRoute {},
    #[route("/movies/:movie_id")]
    MovieDetailRoute { movie_id: MovieId },
}

/// Set the page title, suffixed with the app name
pub(crate) fn set_screen_title(platform: &dyn PlatformPort, screen: Option<&str>) {
    match screen {
        Some(screen) => platform.set_page_title(&format!("{screen} | {APP_TITLE}")),
        None => platform.set_page_title(APP_TITLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockPlatformPort;

    #[test]
    fn screen_title_carries_app_name() {
        let mut platform = MockPlatformPort::new();
        platform
            .expect_set_page_title()
            .withf(|title| title == "Movies | Marquee")
            .times(1)
            .return_const(());

        set_screen_title(&platform, Some("Movies"));
    }

    #[test]
    fn landing_title_is_app_name() {
        let mut platform = MockPlatformPort::new();
        platform
            .expect_set_page_title()
            .withf(|title| title == "Marquee")
            .times(1)
            .return_const(());

        set_screen_title(&platform, None);
    }

    #[test]
    fn detail_route_parses_numeric_id() {
        let route: Route = "/movies/42".parse().unwrap();
        assert_eq!(
            route,
            Route::MovieDetailRoute {
                movie_id: MovieId::new(42)
            }
        );
        assert_eq!(route.to_string(), "/movies/42");
    }
}
