//! Movie Detail View - one movie, its genres, and the edit/delete/associate
//! actions

use dioxus::prelude::*;
use marquee_domain::{DraftField, GenreId, MovieId};

use crate::application::Api;
use crate::presentation::components::{GenreMenu, MovieFormModal};
use crate::presentation::controllers::MovieDetailController;
use crate::presentation::lifetime::ViewLifetime;
use crate::presentation::services::use_movie_detail_controller;
use crate::presentation::state::{MovieDetailState, Remote};
use crate::routes::Route;

/// Re-fetch every resource on the screen and swap them in together
fn reload_detail(
    ctrl: MovieDetailController<Api>,
    lifetime: &ViewLifetime,
    mut state: Signal<MovieDetailState>,
) {
    let ticket = lifetime.next_epoch();
    let id = state.peek().movie_id();
    spawn(async move {
        if let Some(fetch) = ticket.settle(ctrl.fetch_all(id)).await {
            fetch.apply_to(&mut state.write());
        }
    });
}

#[component]
pub fn MovieDetailView(movie_id: MovieId) -> Element {
    let ctrl = use_movie_detail_controller();
    let navigator = use_navigator();
    let lifetime = use_hook(ViewLifetime::new);
    let mut state = use_signal(|| MovieDetailState::new(movie_id));

    {
        let lifetime = lifetime.clone();
        use_drop(move || lifetime.end());
    }

    // Mount: three independent fetches, applied as each one lands
    {
        let ctrl = ctrl.clone();
        let lifetime = lifetime.clone();
        use_effect(move || {
            tracing::debug!(movie_id = %movie_id, "Loading movie detail");
            let ticket = lifetime.ticket();

            let (c, t) = (ctrl.clone(), ticket.clone());
            spawn(async move {
                if let Some(result) = t.settle(c.fetch_movie(movie_id)).await {
                    state.write().apply_movie(result);
                }
            });
            let (c, t) = (ctrl.clone(), ticket.clone());
            spawn(async move {
                if let Some(result) = t.settle(c.fetch_genres(movie_id)).await {
                    state.write().apply_genres(result);
                }
            });
            let c = ctrl.clone();
            spawn(async move {
                if let Some(result) = ticket.settle(c.fetch_catalog()).await {
                    state.write().apply_catalog(result);
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
                    reload_detail(ctrl, &lifetime, state);
                }
            });
        }
    };

    let on_pick = {
        let ctrl = ctrl.clone();
        let lifetime = lifetime.clone();
        move |genre: GenreId| {
            if !state.write().begin_associate(genre) {
                return;
            }
            let ctrl = ctrl.clone();
            let lifetime = lifetime.clone();
            let id = state.peek().movie_id();
            spawn(async move {
                let result = ctrl.associate(id, genre).await;
                if lifetime.is_ended() {
                    return;
                }
                if state.write().finish_associate(result) {
                    reload_detail(ctrl, &lifetime, state);
                }
            });
        }
    };

    let on_delete = {
        let ctrl = ctrl.clone();
        move |_: MouseEvent| {
            let ctrl = ctrl.clone();
            let id = state.peek().movie_id();
            spawn(async move {
                ctrl.delete(id).await;
                navigator.push(Route::MovieListRoute {});
            });
        }
    };

    let current = state.read().clone();
    let dialog_title = if current.movie().ready().is_some() {
        "Edit movie"
    } else {
        "Add movie"
    };

    rsx! {
        div {
            class: "h-full flex flex-col bg-dark-bg",
            header {
                class: "flex items-center gap-4 p-4 border-b border-gray-700",
                Link {
                    to: Route::MovieListRoute {},
                    class: "text-gray-400 no-underline",
                    "← Movies"
                }
            }

            div {
                class: "flex-1 flex gap-8 p-6",
                {
                    match current.movie() {
                        Remote::Loading => rsx! {
                            p { class: "text-gray-400", "Loading..." }
                        },
                        Remote::Missing => rsx! {
                            div {
                                class: "flex flex-col gap-4",
                                p { class: "text-gray-400", "Movie not found" }
                                button {
                                    class: "px-4 py-2 bg-blue-500 text-white rounded",
                                    onclick: move |_| state.write().open_dialog(),
                                    "Add movie"
                                }
                            }
                        },
                        Remote::Failed(reason) => rsx! {
                            p { class: "text-red-500", "Could not load movie: {reason}" }
                        },
                        Remote::Ready(movie) => rsx! {
                            img {
                                class: "w-[300px] h-[450px] object-cover rounded",
                                src: "{movie.poster_image}",
                                alt: "{movie.name}",
                            }
                            div {
                                class: "flex flex-col gap-4",
                                h1 { class: "m-0 text-white text-3xl", "{movie.name}" }
                                p { class: "m-0 text-gray-400", "Score: {movie.score_label()}" }

                                div {
                                    class: "flex flex-wrap items-center gap-2",
                                    {
                                        match current.genres() {
                                            Remote::Ready(genres) => rsx! {
                                                for genre in genres.iter() {
                                                    span {
                                                        key: "{genre.id}",
                                                        class: "px-2 py-1 bg-gray-700 text-white rounded text-xs",
                                                        "{genre.name}"
                                                    }
                                                }
                                            },
                                            Remote::Loading => rsx! {},
                                            Remote::Missing | Remote::Failed(_) => rsx! {
                                                span { class: "text-gray-500 text-sm", "Genres unavailable" }
                                            },
                                        }
                                    }
                                    GenreMenu {
                                        catalog: current.catalog().clone(),
                                        pending: current.associating(),
                                        on_pick,
                                    }
                                }

                                div {
                                    class: "flex gap-2",
                                    button {
                                        class: "px-4 py-2 bg-blue-500 text-white rounded",
                                        onclick: move |_| state.write().open_dialog(),
                                        "Edit"
                                    }
                                    button {
                                        class: "px-4 py-2 bg-red-500 text-white rounded",
                                        onclick: on_delete,
                                        "Delete"
                                    }
                                }
                            }
                        },
                    }
                }
            }

            MovieFormModal {
                title: dialog_title.to_string(),
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
