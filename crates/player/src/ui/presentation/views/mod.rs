//! Screen views - one per route

pub mod home;
pub mod movie_detail;
pub mod movie_list;
