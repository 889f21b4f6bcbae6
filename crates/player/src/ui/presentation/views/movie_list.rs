//! Movie List View - carousel of the whole collection plus a create dialog

use dioxus::prelude::*;
use marquee_domain::DraftField;

use crate::application::services::IdentitySnapshot;
use crate::application::Api;
use crate::presentation::components::{MovieCarousel, MovieFormModal, ProfileBadge};
use crate::presentation::controllers::MovieListController;
use crate::presentation::lifetime::ViewLifetime;
use crate::presentation::services::{use_identity_service, use_movie_list_controller};
use crate::presentation::state::{MovieListState, Remote};

fn reload_list(
    ctrl: MovieListController<Api>,
    lifetime: &ViewLifetime,
    mut state: Signal<MovieListState>,
) {
    let ticket = lifetime.next_epoch();
    spawn(async move {
        if let Some(result) = ticket.settle(ctrl.fetch_movies()).await {
            state.write().apply_movies(result);
        }
    });
}

#[component]
pub fn MovieListView() -> Element {
    let ctrl = use_movie_list_controller();
    let identity = use_identity_service();
    let lifetime = use_hook(ViewLifetime::new);
    let mut state = use_signal(MovieListState::new);
    let mut snapshot = use_signal(IdentitySnapshot::loading);

    {
        let lifetime = lifetime.clone();
        use_drop(move || lifetime.end());
    }

    // Mount
    {
        let ctrl = ctrl.clone();
        let lifetime = lifetime.clone();
        use_effect(move || {
            let ctrl = ctrl.clone();
            let ticket = lifetime.ticket();
            tracing::debug!("Loading movie list");
            spawn(async move {
                if let Some(result) = ticket.settle(ctrl.fetch_movies()).await {
                    state.write().apply_movies(result);
                }
            });

            let svc = identity.clone();
            let identity_ticket = lifetime.view_ticket();
            spawn(async move {
                if let Some(next) = identity_ticket.settle(svc.snapshot()).await {
                    snapshot.set(next);
                }
            });
        });
    }

    let on_submit = {
        let ctrl = ctrl.clone();
        let lifetime = lifetime.clone();
        move |_: ()| {
            let Some(request) = state.write().begin_submit(ctrl.owner()) else {
                return;
            };
            let ctrl = ctrl.clone();
            let lifetime = lifetime.clone();
            spawn(async move {
                let result = ctrl.submit(request).await;
                if lifetime.is_ended() {
                    return;
                }
                if state.write().finish_submit(result) {
                    reload_list(ctrl, &lifetime, state);
                }
            });
        }
    };

    let current = state.read().clone();

    rsx! {
        div {
            class: "h-full flex flex-col bg-dark-bg",
            header {
                class: "flex justify-between items-center p-4 border-b border-gray-700",
                h1 { class: "m-0 text-white text-2xl", "Movies" }
                div {
                    class: "flex items-center gap-4",
                    button {
                        class: "px-4 py-2 bg-blue-500 text-white rounded",
                        onclick: move |_| state.write().open_dialog(),
                        "Add movie"
                    }
                    ProfileBadge { snapshot: snapshot.read().clone() }
                }
            }

            div {
                class: "flex-1 flex flex-col items-center justify-center gap-4 p-6",
                {
                    match current.movies() {
                        Remote::Loading => rsx! {
                            p { class: "text-gray-400", "Loading movies..." }
                        },
                        Remote::Missing | Remote::Failed(_) => rsx! {
                            p { class: "text-red-500", "Could not load movies" }
                        },
                        Remote::Ready(_) => rsx! {
                            MovieCarousel {
                                movies: current.visible().to_vec(),
                                page: current.page(),
                                page_count: current.page_count(),
                                can_go_previous: current.can_go_previous(),
                                can_go_next: current.can_go_next(),
                                on_previous: move |_| state.write().previous_page(),
                                on_next: move |_| state.write().next_page(),
                            }
                        },
                    }
                }
            }

            MovieFormModal {
                title: "Add movie".to_string(),
                dialog: current.dialog().clone(),
                on_edit: move |(field, value): (DraftField, String)| state.write().edit(field, value),
                on_submit,
                on_cancel: move |_| {
                    state.write().cancel_dialog();
                },
            }
        }
    }
}
