//! Application services
//!
//! Services implement the catalog use cases on top of the typed `ApiPort`.
//! They depend on the port, not on a concrete HTTP client.

pub mod genre_service;
pub mod identity_service;
pub mod movie_service;

pub use genre_service::GenreService;
pub use identity_service::{IdentityService, IdentitySnapshot};
pub use movie_service::MovieService;
