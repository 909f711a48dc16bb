/// Catalog index page
use axum::{extract::State, response::Html};
use catalog_storage::{books, genres};

use crate::{error::Result, state::AppState, views};

/// GET /catalog - home page with resource counts
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let (genre_count, book_count) =
        tokio::try_join!(genres::count(&state.pool), books::count(&state.pool))?;

    views::render(&views::IndexPage {
        title: "Library Home",
        genre_count,
        book_count,
    })
}
