//! Movie Carousel - one page of movies with previous/next controls

use dioxus::prelude::*;
use marquee_domain::Movie;

use crate::routes::Route;

#[derive(Props, Clone, PartialEq)]
pub struct MovieCarouselProps {
    /// Movies on the current page
    pub movies: Vec<Movie>,
    pub page: usize,
    pub page_count: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub on_previous: EventHandler<()>,
    pub on_next: EventHandler<()>,
}

#[component]
pub fn MovieCarousel(props: MovieCarouselProps) -> Element {
    if props.page_count == 0 {
        return rsx! {
            p { class: "text-gray-500 text-center", "No movies yet" }
        };
    }
    let position = format!("{} / {}", props.page + 1, props.page_count);

    rsx! {
        div {
            class: "flex items-center gap-4",
            button {
                class: "px-3 py-2 bg-gray-700 text-white rounded disabled:opacity-30",
                disabled: !props.can_go_previous,
                onclick: move |_| props.on_previous.call(()),
                "‹"
            }
            div {
                class: "flex-1 flex justify-center gap-4",
                for movie in props.movies.iter() {
                    Link {
                        key: "{movie.id}",
                        to: Route::MovieDetailRoute { movie_id: movie.id },
                        class: "flex flex-col items-center gap-2 no-underline",
                        img {
                            class: "w-[240px] h-[360px] object-cover rounded",
                            src: "{movie.poster_image}",
                            alt: "{movie.name}",
                        }
                        span { class: "text-white text-lg", "{movie.name}" }
                        span { class: "text-gray-400 text-sm", "Score: {movie.score_label()}" }
                    }
                }
            }
            button {
                class: "px-3 py-2 bg-gray-700 text-white rounded disabled:opacity-30",
                disabled: !props.can_go_next,
                onclick: move |_| props.on_next.call(()),
                "›"
            }
        }
        p { class: "text-gray-500 text-center text-sm", "{position}" }
    }
}
