//! Order and ticket models.
//!
//! Orders are always rendered with their tickets nested; the ticket carries
//! enough session context (show time, movie title, hall name) to display a
//! booking without further lookups.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use kino_core::types::{DbId, Timestamp};

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// A ticket joined with its session context, as rendered inside an order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderTicket {
    pub id: DbId,
    #[serde(skip)]
    pub order_id: DbId,
    pub row: i32,
    pub seat: i32,
    pub movie_session_id: DbId,
    pub show_time: Timestamp,
    pub movie_title: String,
    pub cinema_hall_name: String,
}

/// An order with its tickets, as returned by all order read operations.
#[derive(Debug, Serialize)]
pub struct OrderDetail {
    pub id: DbId,
    pub created_at: Timestamp,
    pub tickets: Vec<OrderTicket>,
}

/// A requested seat within an order payload.
///
/// Also `Serialize`: the length validation on `CreateOrder::tickets`
/// embeds the offending value in its error params.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketSeat {
    pub movie_session_id: DbId,
    pub row: i32,
    pub seat: i32,
}

/// DTO for `POST /orders` and full `PUT` replacement.
///
/// Any caller-supplied owner field is ignored by the handler; the owning
/// user is always the authenticated principal.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrder {
    #[validate(length(min = 1, message = "an order must contain at least one ticket"))]
    pub tickets: Vec<TicketSeat>,
}

/// DTO for `PATCH /orders/{id}`. The ticket list is the only mutable field.
#[derive(Debug, Deserialize)]
pub struct UpdateOrder {
    pub tickets: Option<Vec<TicketSeat>>,
}

/// A page of orders plus the total match count.
#[derive(Debug)]
pub struct OrderPage {
    pub orders: Vec<OrderDetail>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_empty_ticket_list_fails_validation() {
        let order = CreateOrder { tickets: vec![] };
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_nonempty_ticket_list_passes_validation() {
        let order = CreateOrder {
            tickets: vec![TicketSeat {
                movie_session_id: 1,
                row: 1,
                seat: 1,
            }],
        };
        assert!(order.validate().is_ok());
    }
}
