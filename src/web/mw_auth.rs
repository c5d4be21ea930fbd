//! Authentication middleware for protecting routes.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::prelude::*;

use super::ctx::Ctx;

/// Middleware that rejects the request unless a valid context was resolved.
///
/// # Examples
///
/// ```rust
/// use axum::{Router, routing::get};
/// use todo_api::web::mw_auth::mw_require_auth;
///
/// let app: Router<()> = Router::new()
///     .route("/protected", get(protected_handler))
///     .route_layer(axum::middleware::from_fn(mw_require_auth));
///
/// async fn protected_handler() -> &'static str {
///     "This requires authentication"
/// }
/// ```
pub async fn mw_require_auth(ctx: Result<Ctx>, req: Request, next: Next) -> Result<Response> {
    ctx?;
    Ok(next.run(req).await)
}
