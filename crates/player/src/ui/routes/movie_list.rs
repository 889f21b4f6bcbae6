//! Movie collection route handler

use dioxus::prelude::*;

use super::set_screen_title;
use crate::use_platform;

#[component]
pub fn MovieListRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        set_screen_title(platform.as_ref(), Some("Movies"));
    });

    rsx! {
        crate::presentation::views::movie_list::MovieListView {}
    }
}
