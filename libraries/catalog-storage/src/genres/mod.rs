use catalog_core::types::{CreateGenre, Genre, GenreId};
use sqlx::SqlitePool;

use crate::error::{Result, StorageError};

/// Get all genres, ordered ascending by name
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Genre>> {
    let genres = sqlx::query_as::<_, Genre>(
        "SELECT id, name, created_at
         FROM genres
         ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(genres)
}

pub async fn get_by_id(pool: &SqlitePool, id: GenreId) -> Result<Option<Genre>> {
    let genre = sqlx::query_as::<_, Genre>(
        "SELECT id, name, created_at
         FROM genres
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(genre)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Genre>> {
    let genre = sqlx::query_as::<_, Genre>(
        "SELECT id, name, created_at
         FROM genres
         WHERE name = ?",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(genre)
}

pub async fn create(pool: &SqlitePool, genre: CreateGenre) -> Result<Genre> {
    let result = sqlx::query("INSERT INTO genres (name) VALUES (?)")
        .bind(&genre.name)
        .execute(pool)
        .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::Query("Failed to retrieve created genre".to_string()))
}

/// Number of genre records
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM genres")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
