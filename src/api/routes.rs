//! API route configuration.
//!
//! All API endpoints sit behind the access gate configured in
//! [`crate::routes`]; the default policy requires Bearer token
//! authentication for everything under `/api`.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// All API routes, gated by the access policy.
///
/// # Endpoints
///
/// - `GET    /users`      - List all users
/// - `POST   /users`      - Create a user
/// - `GET    /users/{id}` - Fetch a user (404 if absent)
/// - `PUT    /users/{id}` - Replace a user (creates the row if absent)
/// - `DELETE /users/{id}` - Delete a user (idempotent)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            put(update_user_handler)
                .get(get_user_handler)
                .delete(delete_user_handler),
        )
}
