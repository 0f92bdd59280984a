//! Repository for the `orders` and `tickets` tables.
//!
//! Every read is scoped to an owning user; an order id belonging to someone
//! else behaves exactly like a missing id. Ticket rows are loaded with
//! their session context in one query and grouped in memory.

use std::collections::HashMap;

use sqlx::PgPool;

use kino_core::types::DbId;

use crate::models::order::{CreateOrder, Order, OrderDetail, OrderPage, OrderTicket, TicketSeat};

/// Default page size for order listing.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Maximum page size for order listing; larger requests are clamped.
pub const MAX_PAGE_SIZE: i64 = 10;

/// Clamp a requested page size to `1..=MAX_PAGE_SIZE`.
pub fn clamp_page_size(requested: Option<i64>) -> i64 {
    requested.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// SELECT list for ticket rows joined with session context.
const TICKET_COLUMNS: &str = "\
    t.id, t.order_id, t.\"row\", t.seat, \
    ms.id AS movie_session_id, ms.show_time, \
    m.title AS movie_title, ch.name AS cinema_hall_name";

/// Joins backing [`TICKET_COLUMNS`].
const TICKET_JOINS: &str = "\
    JOIN movie_sessions ms ON ms.id = t.movie_session_id \
    JOIN movies m ON m.id = ms.movie_id \
    JOIN cinema_halls ch ON ch.id = ms.cinema_hall_id";

/// Provides CRUD operations for orders, always scoped to an owning user.
pub struct OrderRepo;

impl OrderRepo {
    /// List one page of a user's orders, newest first, with nested tickets.
    ///
    /// `page` is 1-based; `page_size` must already be clamped by the caller
    /// via [`clamp_page_size`].
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        page: i64,
        page_size: i64,
    ) -> Result<OrderPage, sqlx::Error> {
        let offset = (page.max(1) - 1) * page_size;

        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, user_id, created_at FROM orders \
             WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page_size)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*)::BIGINT FROM orders WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        let order_ids: Vec<DbId> = orders.iter().map(|o| o.id).collect();
        let mut tickets_by_order = load_tickets(pool, &order_ids).await?;

        let orders = orders
            .into_iter()
            .map(|order| OrderDetail {
                id: order.id,
                created_at: order.created_at,
                tickets: tickets_by_order.remove(&order.id).unwrap_or_default(),
            })
            .collect();

        Ok(OrderPage { orders, total })
    }

    /// Fetch one of the user's orders with nested tickets.
    /// Returns `None` if the order does not exist or belongs to another user.
    pub async fn find_for_user(
        pool: &PgPool,
        user_id: DbId,
        order_id: DbId,
    ) -> Result<Option<OrderDetail>, sqlx::Error> {
        let Some(order) = sqlx::query_as::<_, Order>(
            "SELECT id, user_id, created_at FROM orders WHERE id = $1 AND user_id = $2",
        )
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        else {
            return Ok(None);
        };

        let mut tickets_by_order = load_tickets(pool, &[order.id]).await?;

        Ok(Some(OrderDetail {
            id: order.id,
            created_at: order.created_at,
            tickets: tickets_by_order.remove(&order.id).unwrap_or_default(),
        }))
    }

    /// Create an order with its tickets in a single transaction.
    ///
    /// The owning user is forced to `user_id`; nothing in `input` can
    /// change it. Returns the new order id.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateOrder,
    ) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let order_id: DbId =
            sqlx::query_scalar("INSERT INTO orders (user_id) VALUES ($1) RETURNING id")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await?;

        insert_tickets(&mut tx, order_id, &input.tickets).await?;

        tx.commit().await?;
        Ok(order_id)
    }

    /// Replace the ticket set of a user's order in a single transaction.
    /// Returns `false` if the order does not exist or belongs to another user.
    pub async fn replace_tickets(
        pool: &PgPool,
        user_id: DbId,
        order_id: DbId,
        tickets: &[TicketSeat],
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let owned: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM orders WHERE id = $1 AND user_id = $2")
                .bind(order_id)
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;
        if owned.is_none() {
            return Ok(false);
        }

        sqlx::query("DELETE FROM tickets WHERE order_id = $1")
            .bind(order_id)
            .execute(&mut *tx)
            .await?;
        insert_tickets(&mut tx, order_id, tickets).await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Delete a user's order (tickets cascade).
    /// Returns `false` if the order does not exist or belongs to another user.
    pub async fn delete_for_user(
        pool: &PgPool,
        user_id: DbId,
        order_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1 AND user_id = $2")
            .bind(order_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Load tickets with session context for a set of orders, grouped by order.
async fn load_tickets(
    pool: &PgPool,
    order_ids: &[DbId],
) -> Result<HashMap<DbId, Vec<OrderTicket>>, sqlx::Error> {
    if order_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let query = format!(
        "SELECT {TICKET_COLUMNS} FROM tickets t {TICKET_JOINS} \
         WHERE t.order_id = ANY($1) \
         ORDER BY t.id"
    );
    let rows = sqlx::query_as::<_, OrderTicket>(&query)
        .bind(order_ids)
        .fetch_all(pool)
        .await?;

    let mut grouped: HashMap<DbId, Vec<OrderTicket>> = HashMap::new();
    for ticket in rows {
        grouped.entry(ticket.order_id).or_default().push(ticket);
    }
    Ok(grouped)
}

async fn insert_tickets(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    order_id: DbId,
    tickets: &[TicketSeat],
) -> Result<(), sqlx::Error> {
    for ticket in tickets {
        sqlx::query(
            "INSERT INTO tickets (movie_session_id, order_id, \"row\", seat) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(ticket.movie_session_id)
        .bind(order_id)
        .bind(ticket.row)
        .bind(ticket.seat)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_defaults_to_five() {
        assert_eq!(clamp_page_size(None), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_size_override_within_bounds() {
        assert_eq!(clamp_page_size(Some(10)), 10);
        assert_eq!(clamp_page_size(Some(7)), 7);
    }

    #[test]
    fn test_page_size_clamped_to_maximum() {
        assert_eq!(clamp_page_size(Some(20)), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_page_size_clamped_to_minimum() {
        assert_eq!(clamp_page_size(Some(0)), 1);
        assert_eq!(clamp_page_size(Some(-3)), 1);
    }
}
