//! Access gate middleware: policy lookup plus Bearer token authentication.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, gate::Requirement, state::AppState};

/// Evaluates the access policy for the request path and, where the policy
/// demands it, authenticates the Bearer token before the core is reached.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Flow
///
/// 1. Look up the requirement for the request path in [`crate::gate::AccessPolicy`]
/// 2. `Public` paths pass straight through
/// 3. Otherwise extract the token from the `Authorization` header
/// 4. Validate the token hash against the database
/// 5. Continue to the next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Token format is invalid
/// - Token is not found or revoked
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if st.policy.requirement_for(req.uri().path()) == Requirement::Public {
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let req = Request::from_parts(parts, body);

    st.auth_service.authenticate(&token).await?;

    Ok(next.run(req).await)
}
