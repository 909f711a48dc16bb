//! Shared helpers for server integration tests

use axum::Router;
use catalog_core::types::{Book, CreateBook, CreateGenre, Genre, GenreId};
use catalog_server::{create_router, state::AppState};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test context keeping the database (and its temp dir) alive
pub struct TestContext {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

/// Build a full application router over a fresh temp-file database
pub async fn create_test_app() -> (Router, TestContext) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = catalog_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    catalog_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let app = create_router(AppState::new(pool.clone()));

    (
        app,
        TestContext {
            pool,
            _temp_dir: temp_dir,
        },
    )
}

/// Test fixture: Create a genre
pub async fn create_genre(pool: &SqlitePool, name: &str) -> Genre {
    catalog_storage::genres::create(
        pool,
        CreateGenre {
            name: name.to_string(),
        },
    )
    .await
    .expect("Failed to create genre")
}

/// Test fixture: Create a book in a genre
#[allow(dead_code)]
pub async fn create_book(pool: &SqlitePool, title: &str, genre_id: GenreId) -> Book {
    catalog_storage::books::create(
        pool,
        CreateBook {
            title: title.to_string(),
            summary: Some(format!("Summary of {title}")),
            genre_id,
        },
    )
    .await
    .expect("Failed to create book")
}
