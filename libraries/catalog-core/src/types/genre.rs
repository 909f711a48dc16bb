//! Genre types

use serde::{Deserialize, Serialize};

pub type GenreId = i64;

/// A named category associated with zero or more books
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
    pub created_at: String,
}

impl Genre {
    /// Path of this genre's detail page
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}

/// Data for creating a new genre
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGenre {
    pub name: String,
}
