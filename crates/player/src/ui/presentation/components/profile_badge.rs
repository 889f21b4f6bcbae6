//! Profile Badge - signed-in user or a login link, for screen headers

use dioxus::prelude::*;

use crate::application::services::IdentitySnapshot;
use crate::presentation::services::use_client_config;
use crate::presentation::state::{gate, GateOutcome};

#[component]
pub fn ProfileBadge(snapshot: IdentitySnapshot) -> Element {
    let config = use_client_config();

    match gate(&snapshot, false, &config.login_url()) {
        GateOutcome::Loading | GateOutcome::RedirectToMovies => rsx! {},
        GateOutcome::Error(message) => rsx! {
            span { class: "text-red-500 text-sm", "{message}" }
        },
        GateOutcome::ShowProfile(user) => rsx! {
            div {
                class: "flex items-center gap-2",
                if let Some(picture) = user.picture.clone() {
                    img { class: "w-8 h-8 rounded-full", src: "{picture}", alt: "{user.name}" }
                }
                span { class: "text-white text-sm", "{user.name}" }
                a { class: "text-gray-400 text-sm", href: config.logout_url(), "Logout" }
            }
        },
        GateOutcome::Login { login_url } => rsx! {
            a { class: "text-blue-400 text-sm", href: login_url, "Login" }
        },
    }
}
