//! Users API handlers.
//!
//! ```text
//! POST /users {"name":"Ana","email":"ana@example.com"}
//! GET /users/1
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::UserHttpState;

/// Register a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid user input", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<UserHttpState>,
    payload: web::Json<User>,
) -> ApiResult<HttpResponse> {
    let user = state.users.create_user(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Fetch a user by identifier.
///
/// The order service calls this endpoint to check that a user exists; only
/// the 200/404 distinction matters to it.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Malformed or non-positive id", body = ErrorBody),
        (status = 404, description = "User not found"),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<UserHttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let found = state.users_query.find_user(path.into_inner()).await?;
    Ok(match found {
        Some(user) => HttpResponse::Ok().json(user),
        None => HttpResponse::NotFound().finish(),
    })
}

/// Register the user routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_user).service(get_user);
}
