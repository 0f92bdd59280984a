//! MovieSession entity models, representation shapes, and the list filter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use kino_core::types::{DbId, Timestamp};

use super::cinema_hall::CinemaHall;
use super::movie::MovieListItem;

/// Write representation: a row from the `movie_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieSession {
    pub id: DbId,
    pub show_time: Timestamp,
    pub movie_id: DbId,
    pub cinema_hall_id: DbId,
}

/// List representation, annotated with seat availability.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieSessionListItem {
    pub id: DbId,
    pub show_time: Timestamp,
    pub movie_title: String,
    pub cinema_hall_name: String,
    pub cinema_hall_capacity: i32,
    /// `hall capacity - booked tickets` for this session.
    pub tickets_available: i64,
}

/// Detail representation with the nested movie and hall, plus the seats
/// already taken.
#[derive(Debug, Serialize)]
pub struct MovieSessionDetail {
    pub id: DbId,
    pub show_time: Timestamp,
    pub movie: MovieListItem,
    pub cinema_hall: CinemaHall,
    pub taken_places: Vec<SeatRef>,
}

/// A booked seat within a session.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeatRef {
    pub row: i32,
    pub seat: i32,
}

/// DTO for `POST /movie-sessions` and full `PUT` replacement.
#[derive(Debug, Deserialize)]
pub struct CreateMovieSession {
    pub show_time: Timestamp,
    pub movie_id: DbId,
    pub cinema_hall_id: DbId,
}

/// DTO for `PATCH /movie-sessions/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateMovieSession {
    pub show_time: Option<Timestamp>,
    pub movie_id: Option<DbId>,
    pub cinema_hall_id: Option<DbId>,
}

/// Eagerly-built filter spec for the session list query.
#[derive(Debug, Default)]
pub struct MovieSessionFilter {
    pub movie_ids: Option<Vec<DbId>>,
    /// Match sessions whose `show_time` falls on this calendar date (UTC).
    pub date: Option<NaiveDate>,
}

/// Row/seat bounds of the hall a session plays in, for ticket validation.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct HallBounds {
    pub rows: i32,
    pub seats_in_row: i32,
}
