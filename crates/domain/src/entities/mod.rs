//! Domain entities - Catalog records as the backend stores them

mod genre;
mod movie;
mod session_user;

pub use genre::{Genre, GenreSet};
pub use movie::Movie;
pub use session_user::SessionUser;
