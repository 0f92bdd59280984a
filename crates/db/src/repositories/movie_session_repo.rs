//! Repository for the `movie_sessions` table.
//!
//! The list projection annotates each session with `tickets_available`:
//! hall capacity minus the tickets already booked for that session.

use chrono::{Duration, NaiveTime};
use sqlx::PgPool;

use kino_core::types::DbId;

use crate::models::cinema_hall::CinemaHall;
use crate::models::movie_session::{
    CreateMovieSession, HallBounds, MovieSession, MovieSessionDetail, MovieSessionFilter,
    MovieSessionListItem, SeatRef, UpdateMovieSession,
};
use crate::repositories::{CinemaHallRepo, MovieRepo};

/// Column list for write-shape `movie_sessions` queries.
const COLUMNS: &str = "id, show_time, movie_id, cinema_hall_id";

/// Provides CRUD and filtered, availability-annotated listing for sessions.
pub struct MovieSessionRepo;

impl MovieSessionRepo {
    /// List sessions matching the given filter, annotated with availability.
    ///
    /// `date` matches the calendar date (UTC) of `show_time`; predicates
    /// AND-combine. Each session appears exactly once.
    pub async fn list(
        pool: &PgPool,
        filter: &MovieSessionFilter,
    ) -> Result<Vec<MovieSessionListItem>, sqlx::Error> {
        let mut clauses: Vec<String> = Vec::new();
        let mut idx = 1u32;

        if filter.movie_ids.is_some() {
            clauses.push(format!("ms.movie_id = ANY(${idx})"));
            idx += 1;
        }
        if filter.date.is_some() {
            clauses.push(format!("ms.show_time >= ${idx} AND ms.show_time < ${}", idx + 1));
        }

        let where_clause = if clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", clauses.join(" AND "))
        };

        let query = format!(
            "SELECT ms.id, ms.show_time, m.title AS movie_title, \
                    ch.name AS cinema_hall_name, \
                    ch.rows * ch.seats_in_row AS cinema_hall_capacity, \
                    (ch.rows * ch.seats_in_row)::BIGINT - COUNT(t.id) AS tickets_available \
             FROM movie_sessions ms \
             JOIN movies m ON m.id = ms.movie_id \
             JOIN cinema_halls ch ON ch.id = ms.cinema_hall_id \
             LEFT JOIN tickets t ON t.movie_session_id = ms.id \
             {where_clause} \
             GROUP BY ms.id, m.title, ch.name, ch.rows, ch.seats_in_row \
             ORDER BY ms.show_time, ms.id"
        );

        let mut q = sqlx::query_as::<_, MovieSessionListItem>(&query);
        if let Some(ids) = &filter.movie_ids {
            q = q.bind(ids.as_slice());
        }
        if let Some(date) = filter.date {
            let start = date.and_time(NaiveTime::MIN).and_utc();
            let end = start + Duration::days(1);
            q = q.bind(start).bind(end);
        }
        q.fetch_all(pool).await
    }

    /// Fetch a single session in the availability-annotated list shape.
    pub async fn list_item(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieSessionListItem>, sqlx::Error> {
        sqlx::query_as::<_, MovieSessionListItem>(
            "SELECT ms.id, ms.show_time, m.title AS movie_title, \
                    ch.name AS cinema_hall_name, \
                    ch.rows * ch.seats_in_row AS cinema_hall_capacity, \
                    (ch.rows * ch.seats_in_row)::BIGINT - COUNT(t.id) AS tickets_available \
             FROM movie_sessions ms \
             JOIN movies m ON m.id = ms.movie_id \
             JOIN cinema_halls ch ON ch.id = ms.cinema_hall_id \
             LEFT JOIN tickets t ON t.movie_session_id = ms.id \
             WHERE ms.id = $1 \
             GROUP BY ms.id, m.title, ch.name, ch.rows, ch.seats_in_row",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Fetch a single session in the write shape.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MovieSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie_sessions WHERE id = $1");
        sqlx::query_as::<_, MovieSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a single session in the detail shape: nested movie and hall,
    /// plus the seats already taken.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieSessionDetail>, sqlx::Error> {
        let Some(session) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let movie = MovieRepo::list_item(pool, session.movie_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        let cinema_hall: CinemaHall = CinemaHallRepo::find_by_id(pool, session.cinema_hall_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        let taken_places = sqlx::query_as::<_, SeatRef>(
            "SELECT \"row\", seat FROM tickets \
             WHERE movie_session_id = $1 ORDER BY \"row\", seat",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(MovieSessionDetail {
            id: session.id,
            show_time: session.show_time,
            movie,
            cinema_hall,
            taken_places,
        }))
    }

    /// Fetch the row/seat bounds of the hall a session plays in.
    /// Returns `None` if the session does not exist.
    pub async fn hall_bounds(pool: &PgPool, id: DbId) -> Result<Option<HallBounds>, sqlx::Error> {
        sqlx::query_as::<_, HallBounds>(
            "SELECT ch.rows, ch.seats_in_row \
             FROM movie_sessions ms \
             JOIN cinema_halls ch ON ch.id = ms.cinema_hall_id \
             WHERE ms.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateMovieSession,
    ) -> Result<MovieSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_sessions (show_time, movie_id, cinema_hall_id) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieSession>(&query)
            .bind(input.show_time)
            .bind(input.movie_id)
            .bind(input.cinema_hall_id)
            .fetch_one(pool)
            .await
    }

    /// Update a session; absent fields keep their current value.
    /// Returns `None` if the session does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovieSession,
    ) -> Result<Option<MovieSession>, sqlx::Error> {
        let query = format!(
            "UPDATE movie_sessions \
             SET show_time = COALESCE($2, show_time), \
                 movie_id = COALESCE($3, movie_id), \
                 cinema_hall_id = COALESCE($4, cinema_hall_id) \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieSession>(&query)
            .bind(id)
            .bind(input.show_time)
            .bind(input.movie_id)
            .bind(input.cinema_hall_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a session. Returns `false` if the session did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie_sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
