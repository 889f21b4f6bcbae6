//! Genre Menu - pick a catalog genre to attach to a movie

use dioxus::prelude::*;
use marquee_domain::{Genre, GenreId};

use crate::presentation::state::Remote;

#[derive(Props, Clone, PartialEq)]
pub struct GenreMenuProps {
    pub catalog: Remote<Vec<Genre>>,
    /// Genre whose association is in flight
    pub pending: Option<GenreId>,
    pub on_pick: EventHandler<GenreId>,
}

/// Dropdown listing every catalog genre
#[component]
pub fn GenreMenu(props: GenreMenuProps) -> Element {
    let mut expanded = use_signal(|| false);
    let busy = props.pending.is_some();

    rsx! {
        div {
            class: "relative inline-block",
            button {
                class: "px-3 py-1 bg-gray-700 text-white rounded text-sm disabled:opacity-50",
                disabled: busy,
                onclick: move |_| {
                    let open = *expanded.read();
                    expanded.set(!open);
                },
                if busy { "Adding..." } else { "Add genre" }
            }
            if *expanded.read() {
                div {
                    class: "absolute mt-1 min-w-[160px] bg-dark-surface border border-gray-700 rounded shadow-lg z-10",
                    {
                        match &props.catalog {
                            Remote::Ready(genres) if genres.is_empty() => rsx! {
                                div { class: "p-2 text-gray-500 text-sm", "No genres" }
                            },
                            Remote::Ready(genres) => rsx! {
                                for genre in genres.iter().cloned() {
                                    button {
                                        key: "{genre.id}",
                                        class: "block w-full text-left p-2 text-white text-sm hover:bg-gray-700",
                                        disabled: busy,
                                        onclick: move |_| {
                                            expanded.set(false);
                                            props.on_pick.call(genre.id);
                                        },
                                        "{genre.name}"
                                    }
                                }
                            },
                            Remote::Loading => rsx! {
                                div { class: "p-2 text-gray-500 text-sm", "Loading..." }
                            },
                            Remote::Missing | Remote::Failed(_) => rsx! {
                                div { class: "p-2 text-gray-500 text-sm", "Genres unavailable" }
                            },
                        }
                    }
                }
            }
        }
    }
}
