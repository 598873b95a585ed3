use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_cookies::cookie::time::Duration;
use tower_cookies::{Cookie, Cookies};

use crate::{
    auth::token::Claims,
    error::Result,
    middleware_layer::auth::TOKEN_COOKIE,
    services::auth as auth_service,
    state::AppState,
    validation::auth::*,
};

/// The request payload for user registration.
#[derive(Deserialize, Debug)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// The request payload for user login.
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Creates an HttpOnly session cookie holding the signed token.
fn create_secure_cookie(value: String, max_age_secs: i64) -> Cookie<'static> {
    let mut cookie = Cookie::new(TOKEN_COOKIE, value);

    let is_production =
        std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()) == "production";

    cookie.set_http_only(true);

    if is_production {
        cookie.set_secure(true);
    }

    cookie.set_same_site(tower_cookies::cookie::SameSite::Lax);
    cookie.set_max_age(Duration::seconds(max_age_secs));
    cookie.set_path("/");

    cookie
}

/// Handles user registration.
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Response> {
    tracing::info!("📝 Register attempt: {}", payload.email);
    validate_email(&payload.email)?;
    validate_password(&payload.password)?;

    let user = auth_service::register(state.store.as_ref(), payload.email, payload.password)?;

    tracing::info!("✅ User registered: {}", user.id);

    let body = sonic_rs::to_string(&sonic_rs::json!({
        "message": "User created successfully"
    }))
    .map_err(|e| crate::error::AppError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [(http::header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Handles user login.
///
/// Mints a session token, returns it in the body and sets it as the
/// HttpOnly `token` cookie.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<Response> {
    tracing::info!("🔐 Login attempt: {}", payload.email);

    let user = auth_service::authenticate(state.store.as_ref(), &payload.email, &payload.password)?;

    let token = state.tokens.mint(user.id, &user.email)?;

    let session_cookie = create_secure_cookie(token.clone(), state.config.token_ttl_secs);
    cookies.add(session_cookie);
    tracing::info!("✅ Session cookie set for user: {}", user.id);

    let body = sonic_rs::to_string(&sonic_rs::json!({
        "token": token
    }))
    .map_err(|e| crate::error::AppError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [(http::header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Reports the identity behind the session cookie.
///
/// Runs behind the auth middleware, so reaching the handler already means
/// the token verified.
#[axum::debug_handler]
pub async fn verify(Extension(claims): Extension<Claims>) -> Result<Response> {
    let body = sonic_rs::to_string(&sonic_rs::json!({
        "message": "Authorized",
        "user": {
            "id": claims.sub.to_string(),
            "email": claims.email,
        }
    }))
    .map_err(|e| crate::error::AppError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [(http::header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
