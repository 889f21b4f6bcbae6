//! Landing route handler

use dioxus::prelude::*;

use super::set_screen_title;
use crate::use_platform;

/// Landing route: identity gate
#[component]
pub fn HomeRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        set_screen_title(platform.as_ref(), None);
    });

    rsx! {
        crate::presentation::views::home::HomeView {}
    }
}
