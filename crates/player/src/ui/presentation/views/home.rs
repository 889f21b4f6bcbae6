//! Landing View - identity gate in front of the catalog

use dioxus::prelude::*;

use crate::application::services::IdentitySnapshot;
use crate::presentation::lifetime::ViewLifetime;
use crate::presentation::services::{use_client_config, use_identity_service};
use crate::presentation::state::{gate, GateOutcome};
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let identity = use_identity_service();
    let config = use_client_config();
    let navigator = use_navigator();
    let lifetime = use_hook(ViewLifetime::new);
    let mut snapshot = use_signal(IdentitySnapshot::loading);

    {
        let lifetime = lifetime.clone();
        use_drop(move || lifetime.end());
    }

    use_effect(move || {
        let svc = identity.clone();
        let ticket = lifetime.view_ticket();
        spawn(async move {
            if let Some(next) = ticket.settle(svc.snapshot()).await {
                snapshot.set(next);
            }
        });
    });

    let login_url = config.login_url();
    let outcome = gate(&snapshot.read(), true, &login_url);

    {
        let login_url = login_url.clone();
        use_effect(move || {
            if gate(&snapshot.read(), true, &login_url) == GateOutcome::RedirectToMovies {
                navigator.replace(Route::MovieListRoute {});
            }
        });
    }

    rsx! {
        div {
            class: "h-full flex flex-col items-center justify-center gap-6 bg-dark-bg",
            h1 { class: "text-white text-3xl", "Marquee" }
            {
                match outcome {
                    GateOutcome::Loading | GateOutcome::RedirectToMovies => rsx! {
                        p { class: "text-gray-400", "Loading..." }
                    },
                    GateOutcome::Error(message) => rsx! {
                        p { class: "text-red-500", "{message}" }
                    },
                    GateOutcome::ShowProfile(user) => rsx! {
                        p { class: "text-white", "Signed in as {user.name}" }
                    },
                    GateOutcome::Login { login_url } => rsx! {
                        a {
                            class: "px-4 py-2 bg-blue-500 text-white rounded no-underline",
                            href: login_url,
                            "Login"
                        }
                    },
                }
            }
        }
    }
}
