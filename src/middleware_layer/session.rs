use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_cookies::Cookies;

use super::auth::TOKEN_COOKIE;

/// The page path prefixes that require a session cookie.
const PROTECTED_PATHS: &[&str] = &["/", "/dashboard"];

/// A middleware that guards page routes.
///
/// Checks token *presence* only and never calls the token service: an
/// unauthenticated visitor is redirected to the login page, while API routes
/// stay untouched and do their own verification. A forged cookie therefore
/// gets past this guard but fails at every data route.
pub async fn page_guard(cookies: Cookies, request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path();

    let protected = PROTECTED_PATHS
        .iter()
        .any(|p| path == *p || path.starts_with(&format!("{}/", p)));

    if protected && cookies.get(TOKEN_COOKIE).is_none() {
        tracing::debug!("➡️ Redirecting unauthenticated visitor from {}", path);
        return Redirect::temporary("/login").into_response();
    }

    next.run(request).await
}
