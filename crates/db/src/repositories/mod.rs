//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. List queries take an
//! explicit filter struct built once by the caller; no deferred query
//! chaining happens here.

pub mod actor_repo;
pub mod auth_session_repo;
pub mod cinema_hall_repo;
pub mod genre_repo;
pub mod movie_repo;
pub mod movie_session_repo;
pub mod order_repo;
pub mod user_repo;

pub use actor_repo::ActorRepo;
pub use auth_session_repo::AuthSessionRepo;
pub use cinema_hall_repo::CinemaHallRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
pub use movie_session_repo::MovieSessionRepo;
pub use order_repo::OrderRepo;
pub use user_repo::UserRepo;
