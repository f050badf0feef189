//! Orders API handlers.
//!
//! ```text
//! POST /orders {"user_id":1,"amount":50.0}
//! GET /orders/7
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::Order;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::OrderHttpState;

/// Create an order for an existing user.
///
/// `status` defaults to `"created"` when omitted.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = Order,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Invalid order input", body = ErrorBody),
        (status = 404, description = "Referenced user not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
        (status = 502, description = "User service unavailable", body = ErrorBody)
    ),
    tags = ["orders"],
    operation_id = "createOrder"
)]
#[post("/orders")]
pub async fn create_order(
    state: web::Data<OrderHttpState>,
    payload: web::Json<Order>,
) -> ApiResult<HttpResponse> {
    let order = state.orders.create_order(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(order))
}

/// Fetch an order by identifier.
///
/// A missing order is a 404 with an empty body.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = i64, Path, description = "Order identifier")),
    responses(
        (status = 200, description = "Order", body = Order),
        (status = 400, description = "Malformed or non-positive id", body = ErrorBody),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["orders"],
    operation_id = "getOrder"
)]
#[get("/orders/{id}")]
pub async fn get_order(
    state: web::Data<OrderHttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let found = state.orders_query.find_order(path.into_inner()).await?;
    Ok(match found {
        Some(order) => HttpResponse::Ok().json(order),
        None => HttpResponse::NotFound().finish(),
    })
}

/// Register the order routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_order).service(get_order);
}

#[cfg(test)]
#[path = "orders_tests.rs"]
mod tests;
