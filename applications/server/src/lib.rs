//! Catalog Server Library
//!
//! Library-catalog web application serving server-rendered genre pages
//! over a SQLite-backed store.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;
pub mod views;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    let catalog_routes = Router::new()
        .route("/", get(api::catalog::index))
        // Genres
        .route("/genres", get(api::genres::genre_list))
        .route(
            "/genre/create",
            get(api::genres::genre_create_form).post(api::genres::genre_create),
        )
        .route("/genre/:id", get(api::genres::genre_detail))
        .route(
            "/genre/:id/delete",
            get(api::genres::genre_delete_form).post(api::genres::genre_delete),
        )
        .route(
            "/genre/:id/update",
            get(api::genres::genre_update_form).post(api::genres::genre_update),
        );

    Router::new()
        .route("/health", get(api::health::health))
        .nest("/catalog", catalog_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
