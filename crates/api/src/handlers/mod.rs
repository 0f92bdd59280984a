pub mod actors;
pub mod auth;
pub mod cinema_halls;
pub mod genres;
pub mod movie_sessions;
pub mod movies;
pub mod orders;
