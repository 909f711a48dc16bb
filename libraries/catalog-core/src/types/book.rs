//! Book types
//!
//! Only the fields the genre pages need. The full book shape
//! (authors, ISBN, copies) is owned by the books module.

use serde::{Deserialize, Serialize};

use super::GenreId;

pub type BookId = i64;

/// A book referencing its genre by foreign key
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub summary: Option<String>,
    pub genre_id: GenreId,
    pub created_at: String,
}

impl Book {
    /// Path of this book's detail page
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }
}

/// Data for creating a new book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub summary: Option<String>,
    pub genre_id: GenreId,
}
