//! Request context resolved from the bearer token.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::auth::{AUTH_HEADER_PREFIX, error::AuthError, jwt::TokenKeys};
use crate::prelude::*;
use crate::web::state::AppState;

/// Identity of the caller of a protected route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ctx {
    /// Username asserted by the verified token.
    pub username: String,
}

impl Ctx {
    pub fn new(username: String) -> Self {
        Self { username }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// # Examples
///
/// ```rust
/// use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
/// use todo_api::web::ctx::bearer_token;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
/// assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
/// ```
pub fn bearer_token(headers: &HeaderMap) -> std::result::Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::TokenMissing)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let token = value
        .strip_prefix(AUTH_HEADER_PREFIX)
        .map(str::trim)
        .ok_or(AuthError::MalformedHeader)?;

    if token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }
    Ok(token)
}

/// Resolves the caller identity from the request headers.
pub fn resolve_ctx(headers: &HeaderMap, keys: &TokenKeys) -> std::result::Result<Ctx, AuthError> {
    let token = bearer_token(headers)?;
    let claims = keys.verify(token)?;
    Ok(Ctx::new(claims.username))
}

/// Middleware that stores the outcome of [`resolve_ctx`] in the request
/// extensions. It never rejects; [`mw_require_auth`](super::mw_auth::mw_require_auth)
/// does that on the routes that need it.
#[axum::debug_middleware]
pub async fn mw_ctx_resolver(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let ctx = resolve_ctx(req.headers(), &state.keys);
    if let Err(err) = &ctx {
        debug!("No request context: {err}");
    }
    req.extensions_mut().insert(ctx);

    next.run(req).await
}

impl<S: Send + Sync> FromRequestParts<S> for Ctx {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        Ok(parts
            .extensions
            .get::<std::result::Result<Ctx, AuthError>>()
            .ok_or(Error::CtxMissing)?
            .clone()?)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use chrono::{TimeDelta, Utc};

    use super::*;

    fn headers(value: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn missing_header() {
        assert!(matches!(
            bearer_token(&headers(None)),
            Err(AuthError::TokenMissing)
        ));
    }

    #[test]
    fn malformed_headers_never_panic() {
        for value in ["", "Bearer", "Bearer ", "Bearer    ", "Token abc", "bearer abc", "abc"] {
            assert!(
                matches!(bearer_token(&headers(Some(value))), Err(AuthError::MalformedHeader)),
                "{value:?}"
            );
        }
    }

    #[test]
    fn non_ascii_header_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xffabc").unwrap(),
        );
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MalformedHeader)
        ));
    }

    #[test]
    fn resolves_the_token_subject() {
        let keys = TokenKeys::from_secret("ctx-secret").unwrap();
        let token = keys.issue("alice").unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        assert_eq!(
            resolve_ctx(&headers, &keys).unwrap(),
            Ctx::new(String::from("alice"))
        );
    }

    #[test]
    fn expired_token_does_not_resolve() {
        let keys = TokenKeys::from_secret("ctx-secret").unwrap();
        let token = keys
            .issue_at("alice", Utc::now() - TimeDelta::days(2))
            .unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        assert!(matches!(
            resolve_ctx(&headers, &keys),
            Err(AuthError::TokenExpired)
        ));
    }
}
