//! Reusable UI components for the catalog screens.

pub mod genre_menu;
pub mod movie_carousel;
pub mod movie_form_modal;
pub mod profile_badge;

pub use genre_menu::GenreMenu;
pub use movie_carousel::MovieCarousel;
pub use movie_form_modal::MovieFormModal;
pub use profile_badge::ProfileBadge;
