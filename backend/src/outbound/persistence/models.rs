//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use crate::domain::{Order, User};

use super::schema::{orders, users};

/// Row struct for reading from the orders table.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderRow {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub status: String,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            amount: row.amount,
            status: row.status,
        }
    }
}

/// Insertable struct for creating order records. The identity is left to the
/// database sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = orders)]
pub(crate) struct NewOrderRow<'a> {
    pub user_id: i64,
    pub amount: f64,
    pub status: &'a str,
}

impl<'a> From<&'a Order> for NewOrderRow<'a> {
    fn from(order: &'a Order) -> Self {
        Self {
            user_id: order.user_id,
            amount: order.amount,
            status: &order.status,
        }
    }
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a User> for NewUserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            name: &user.name,
            email: &user.email,
        }
    }
}
