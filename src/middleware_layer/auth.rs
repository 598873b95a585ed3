use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tower_cookies::Cookies;

use crate::{error::AppError, state::AppState};

/// The name of the session cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Extracts the session token from the request cookies.
fn extract_token(cookies: &Cookies) -> Option<String> {
    cookies.get(TOKEN_COOKIE).map(|c| c.value().to_string())
}

/// A middleware that requires a valid session token.
///
/// Verifies the `token` cookie and inserts the verified [`Claims`] as a
/// request extension, so handlers receive a typed identity instead of
/// re-deriving it from the cookie. Missing, malformed, tampered and expired
/// tokens all produce 401.
///
/// [`Claims`]: crate::auth::token::Claims
pub async fn require_auth(
    State(state): State<AppState>,
    cookies: Cookies,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    tracing::debug!("🔐 Checking authentication...");

    let token = extract_token(&cookies).ok_or_else(|| {
        tracing::debug!("❌ No token cookie found");
        AppError::Unauthorized
    })?;

    let claims = state.tokens.verify(&token).ok_or_else(|| {
        tracing::debug!("❌ Token failed verification");
        AppError::Unauthorized
    })?;

    tracing::debug!("✅ User authenticated: {}", claims.sub);

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
