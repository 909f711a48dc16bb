use catalog_core::types::{Book, BookId, CreateBook, GenreId};
use sqlx::SqlitePool;

use crate::error::{Result, StorageError};

/// Get all books belonging to a specific genre
pub async fn get_by_genre(pool: &SqlitePool, genre_id: GenreId) -> Result<Vec<Book>> {
    let books = sqlx::query_as::<_, Book>(
        "SELECT id, title, summary, genre_id, created_at
         FROM books
         WHERE genre_id = ?
         ORDER BY title ASC",
    )
    .bind(genre_id)
    .fetch_all(pool)
    .await?;

    Ok(books)
}

pub async fn get_by_id(pool: &SqlitePool, id: BookId) -> Result<Option<Book>> {
    let book = sqlx::query_as::<_, Book>(
        "SELECT id, title, summary, genre_id, created_at
         FROM books
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(book)
}

pub async fn create(pool: &SqlitePool, book: CreateBook) -> Result<Book> {
    let result = sqlx::query("INSERT INTO books (title, summary, genre_id) VALUES (?, ?, ?)")
        .bind(&book.title)
        .bind(&book.summary)
        .bind(book.genre_id)
        .execute(pool)
        .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::Query("Failed to retrieve created book".to_string()))
}

/// Number of book records
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
