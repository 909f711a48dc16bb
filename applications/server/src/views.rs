/// Askama page templates
///
/// Each handler fills one of these structs and renders it to an HTML
/// response. User-supplied text is escaped by the template engine at
/// render time.
use askama::Template;
use axum::response::Html;
use catalog_core::types::{Book, FieldError, Genre};

use crate::error::Result;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub title: &'static str,
    pub genre_count: i64,
    pub book_count: i64,
}

#[derive(Template)]
#[template(path = "genre_list.html")]
pub struct GenreListPage {
    pub title: &'static str,
    pub genre_list: Vec<Genre>,
}

#[derive(Template)]
#[template(path = "genre_detail.html")]
pub struct GenreDetailPage {
    pub title: &'static str,
    pub genre: Genre,
    pub genre_books: Vec<Book>,
}

#[derive(Template)]
#[template(path = "genre_form.html")]
pub struct GenreFormPage {
    pub title: &'static str,
    pub name: Option<String>,
    pub errors: Vec<FieldError>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: &'static str,
    pub status: u16,
    pub message: String,
}

/// Render a page template into an HTML response
pub fn render<T: Template>(page: &T) -> Result<Html<String>> {
    Ok(Html(page.render()?))
}
