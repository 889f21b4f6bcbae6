//! Movie detail route handler

use dioxus::prelude::*;
use marquee_domain::MovieId;

use super::set_screen_title;
use crate::use_platform;

/// Movie detail route
///
/// The view is keyed by id so moving between movies remounts it with fresh
/// state instead of reusing the previous movie's.
#[component]
pub fn MovieDetailRoute(movie_id: MovieId) -> Element {
    let platform = use_platform();

    use_effect(use_reactive!(|movie_id| {
        set_screen_title(platform.as_ref(), Some(&format!("Movie {movie_id}")));
    }));

    rsx! {
        crate::presentation::views::movie_detail::MovieDetailView {
            key: "{movie_id}",
            movie_id,
        }
    }
}
