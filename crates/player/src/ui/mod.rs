//! Dioxus UI: the app root, routes and the presentation layer

use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Platform port as stored in Dioxus context
pub type Platform = Arc<dyn PlatformPort>;

pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/output.css"),
        }
        main {
            class: "catalog-shell bg-dark-bg",
            Router::<routes::Route> {}
        }
    }
}
