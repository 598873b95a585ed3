//! Taskboard - a minimal multi-user task-board service.
//!
//! Users register and log in, create boards, and attach tasks to them.
//! Authentication is a signed, stateless token in an HttpOnly cookie;
//! persistence is an in-memory store behind the [`storage::Store`] trait.
//!
//! # Modules
//!
//! - `handlers`: HTTP handlers (axum)
//! - `services`: business logic
//! - `storage`: the `Store` trait and its in-memory implementation
//! - `auth`: session token signing and verification
//! - `middleware_layer`: auth and page-guard middleware
//! - `config`: configuration management
//! - `error`: error types

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use http::{Method, header};
use std::time::Duration;
use tower_cookies::CookieManagerLayer;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod config;
pub mod error;
pub mod state;

pub mod auth {
    pub mod token;
}

pub mod models {
    pub mod board;
    pub mod task;
    pub mod user;
}

pub mod storage;

pub mod services {
    pub mod auth;
    pub mod boards;
    pub mod tasks;
}

pub mod handlers {
    pub mod auth;
    pub mod boards;
    pub mod tasks;
}

pub mod middleware_layer {
    pub mod auth;
    pub mod session;
}

pub mod validation {
    pub mod auth;
}

pub use config::Config;
pub use state::AppState;

/// Builds the application router.
///
/// Data routes live under `/api`; everything else falls back to the static
/// page directory guarded by the session middleware.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse().unwrap(),
            "http://127.0.0.1:3000".parse().unwrap(),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::COOKIE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(86400));

    let public_routes = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/api/auth/verify", get(handlers::auth::verify))
        .route(
            "/api/boards",
            get(handlers::boards::list_boards).post(handlers::boards::create_board),
        )
        .route(
            "/api/boards/{board_id}",
            axum::routing::patch(handlers::boards::rename_board)
                .delete(handlers::boards::delete_board),
        )
        .route(
            "/api/task/{board_id}",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route(
            "/api/task/{board_id}/{task_id}",
            axum::routing::put(handlers::tasks::update_task)
                .delete(handlers::tasks::delete_task),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware_layer::auth::require_auth,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback_service(ServeDir::new("public"))
        .layer(from_fn(middleware_layer::session::page_guard))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default())
                .on_request(DefaultOnRequest::default().level(Level::DEBUG))
                .on_response(DefaultOnResponse::default().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::default().level(Level::ERROR)),
        )
        .layer(CookieManagerLayer::new())
        .layer(cors)
}
