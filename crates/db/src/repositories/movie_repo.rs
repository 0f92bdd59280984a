//! Repository for the `movies` table and its genre/actor associations.
//!
//! Association filters are expressed as `EXISTS` subqueries over the join
//! tables, so a movie matching several listed ids still appears exactly
//! once in the result.

use sqlx::{PgPool, Postgres, Transaction};

use kino_core::types::DbId;

use crate::models::actor::Actor;
use crate::models::genre::Genre;
use crate::models::movie::{CreateMovie, Movie, MovieDetail, MovieFilter, MovieListItem, UpdateMovie};

/// SELECT list for the write shape: id-array associations.
const WRITE_COLUMNS: &str = "\
    m.id, m.title, m.description, m.duration, \
    COALESCE(ARRAY_AGG(DISTINCT mg.genre_id) FILTER (WHERE mg.genre_id IS NOT NULL), '{}') AS genres, \
    COALESCE(ARRAY_AGG(DISTINCT ma.actor_id) FILTER (WHERE ma.actor_id IS NOT NULL), '{}') AS actors";

/// SELECT list for the list shape: name-array associations.
const LIST_COLUMNS: &str = "\
    m.id, m.title, m.description, m.duration, \
    COALESCE(ARRAY_AGG(DISTINCT g.name) FILTER (WHERE g.name IS NOT NULL), '{}') AS genres, \
    COALESCE(ARRAY_AGG(DISTINCT a.first_name || ' ' || a.last_name) \
        FILTER (WHERE a.id IS NOT NULL), '{}') AS actors";

/// Joins backing [`LIST_COLUMNS`].
const LIST_JOINS: &str = "\
    LEFT JOIN movie_genres mg ON mg.movie_id = m.id \
    LEFT JOIN genres g ON g.id = mg.genre_id \
    LEFT JOIN movie_actors ma ON ma.movie_id = m.id \
    LEFT JOIN actors a ON a.id = ma.actor_id";

/// Provides CRUD and filtered listing for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List movies matching the given filter, in the compact list shape.
    ///
    /// Predicates AND-combine; an empty filter matches every movie.
    pub async fn list(
        pool: &PgPool,
        filter: &MovieFilter,
    ) -> Result<Vec<MovieListItem>, sqlx::Error> {
        let (where_clause, _) = build_movie_filter(filter, 1);

        let query = format!(
            "SELECT {LIST_COLUMNS} FROM movies m {LIST_JOINS} \
             {where_clause} \
             GROUP BY m.id \
             ORDER BY m.id"
        );

        let mut q = sqlx::query_as::<_, MovieListItem>(&query);
        if let Some(title) = &filter.title {
            q = q.bind(format!("%{}%", escape_like(title)));
        }
        if let Some(ids) = &filter.actor_ids {
            q = q.bind(ids.as_slice());
        }
        if let Some(ids) = &filter.genre_ids {
            q = q.bind(ids.as_slice());
        }
        q.fetch_all(pool).await
    }

    /// Fetch a single movie in the compact list shape.
    pub async fn list_item(pool: &PgPool, id: DbId) -> Result<Option<MovieListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {LIST_COLUMNS} FROM movies m {LIST_JOINS} \
             WHERE m.id = $1 GROUP BY m.id"
        );
        sqlx::query_as::<_, MovieListItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a single movie in the write shape (id-array associations).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {WRITE_COLUMNS} FROM movies m \
             LEFT JOIN movie_genres mg ON mg.movie_id = m.id \
             LEFT JOIN movie_actors ma ON ma.movie_id = m.id \
             WHERE m.id = $1 GROUP BY m.id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a single movie in the detail shape (nested associations).
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<MovieDetail>, sqlx::Error> {
        #[derive(sqlx::FromRow)]
        struct MovieRow {
            id: DbId,
            title: String,
            description: String,
            duration: i32,
        }

        let Some(movie) = sqlx::query_as::<_, MovieRow>(
            "SELECT id, title, description, duration FROM movies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        else {
            return Ok(None);
        };

        let genres = sqlx::query_as::<_, Genre>(
            "SELECT g.id, g.name FROM genres g \
             JOIN movie_genres mg ON mg.genre_id = g.id \
             WHERE mg.movie_id = $1 ORDER BY g.id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let actors = sqlx::query_as::<_, Actor>(
            "SELECT a.id, a.first_name, a.last_name, \
                    a.first_name || ' ' || a.last_name AS full_name \
             FROM actors a \
             JOIN movie_actors ma ON ma.actor_id = a.id \
             WHERE ma.movie_id = $1 ORDER BY a.id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(MovieDetail {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            duration: movie.duration,
            genres,
            actors,
        }))
    }

    /// Create a movie with its genre/actor links in a single transaction.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let movie_id: DbId = sqlx::query_scalar(
            "INSERT INTO movies (title, description, duration) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.duration)
        .fetch_one(&mut *tx)
        .await?;

        link_genres(&mut tx, movie_id, &input.genres).await?;
        link_actors(&mut tx, movie_id, &input.actors).await?;

        tx.commit().await?;

        // The row was just inserted inside a committed transaction.
        Ok(Self::find_by_id(pool, movie_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?)
    }

    /// Update a movie; absent fields (including association lists) keep
    /// their current value. Returns `None` if the movie does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE movies \
             SET title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 duration = COALESCE($4, duration) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.duration)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }

        if let Some(genre_ids) = &input.genres {
            sqlx::query("DELETE FROM movie_genres WHERE movie_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            link_genres(&mut tx, id, genre_ids).await?;
        }
        if let Some(actor_ids) = &input.actors {
            sqlx::query("DELETE FROM movie_actors WHERE movie_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            link_actors(&mut tx, id, actor_ids).await?;
        }

        tx.commit().await?;

        Self::find_by_id(pool, id).await
    }

    /// Delete a movie. Returns `false` if the movie did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape LIKE metacharacters so a title filter matches them literally.
///
/// `%` and `_` in user input would otherwise act as wildcards inside the
/// `%...%` pattern; backslash is the default LIKE escape character.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build the WHERE clause for a movie filter.
///
/// Returns the clause text and the next free bind index. Bind order is
/// title, actor ids, genre ids; callers must bind in the same order.
fn build_movie_filter(filter: &MovieFilter, first_idx: u32) -> (String, u32) {
    let mut clauses: Vec<String> = Vec::new();
    let mut idx = first_idx;

    if filter.title.is_some() {
        clauses.push(format!("m.title ILIKE ${idx}"));
        idx += 1;
    }
    if filter.actor_ids.is_some() {
        clauses.push(format!(
            "EXISTS (SELECT 1 FROM movie_actors fa \
             WHERE fa.movie_id = m.id AND fa.actor_id = ANY(${idx}))"
        ));
        idx += 1;
    }
    if filter.genre_ids.is_some() {
        clauses.push(format!(
            "EXISTS (SELECT 1 FROM movie_genres fg \
             WHERE fg.movie_id = m.id AND fg.genre_id = ANY(${idx}))"
        ));
        idx += 1;
    }

    if clauses.is_empty() {
        (String::new(), idx)
    } else {
        (format!("WHERE {}", clauses.join(" AND ")), idx)
    }
}

async fn link_genres(
    tx: &mut Transaction<'_, Postgres>,
    movie_id: DbId,
    genre_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    if genre_ids.is_empty() {
        return Ok(());
    }
    sqlx::query(
        "INSERT INTO movie_genres (movie_id, genre_id) SELECT $1, UNNEST($2::BIGINT[])",
    )
    .bind(movie_id)
    .bind(genre_ids)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn link_actors(
    tx: &mut Transaction<'_, Postgres>,
    movie_id: DbId,
    actor_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    if actor_ids.is_empty() {
        return Ok(());
    }
    sqlx::query(
        "INSERT INTO movie_actors (movie_id, actor_id) SELECT $1, UNNEST($2::BIGINT[])",
    )
    .bind(movie_id)
    .bind(actor_ids)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_builds_no_where_clause() {
        let (clause, idx) = build_movie_filter(&MovieFilter::default(), 1);
        assert!(clause.is_empty());
        assert_eq!(idx, 1);
    }

    #[test]
    fn test_all_predicates_and_combine_in_bind_order() {
        let filter = MovieFilter {
            title: Some("inception".into()),
            actor_ids: Some(vec![1, 2]),
            genre_ids: Some(vec![3]),
        };
        let (clause, idx) = build_movie_filter(&filter, 1);
        assert_eq!(idx, 4);
        assert!(clause.starts_with("WHERE "));
        assert!(clause.contains("m.title ILIKE $1"));
        assert!(clause.contains("fa.actor_id = ANY($2)"));
        assert!(clause.contains("fg.genre_id = ANY($3)"));
        // Two top-level joins; the EXISTS bodies carry their own ANDs.
        assert_eq!(clause.matches(" AND EXISTS (").count(), 2);
    }

    #[test]
    fn test_like_metacharacters_are_escaped() {
        assert_eq!(escape_like("100%W"), "100\\%W");
        assert_eq!(escape_like("under_score"), "under\\_score");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain title"), "plain title");
    }

    #[test]
    fn test_single_predicate_gets_first_index() {
        let filter = MovieFilter {
            genre_ids: Some(vec![7]),
            ..MovieFilter::default()
        };
        let (clause, idx) = build_movie_filter(&filter, 1);
        assert_eq!(idx, 2);
        assert!(clause.contains("fg.genre_id = ANY($1)"));
        assert!(!clause.contains("ILIKE"));
    }
}
