/// Genre pages: list, detail, create, and the not-yet-implemented
/// delete/update endpoints.
use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use catalog_core::types::{GenreForm, GenreId, Validated};
use catalog_storage::{books, genres};

use crate::{
    error::{Result, ServerError},
    state::AppState,
    views::{self, GenreDetailPage, GenreFormPage, GenreListPage},
};

/// GET /catalog/genres
pub async fn genre_list(State(state): State<AppState>) -> Result<Html<String>> {
    let genre_list = genres::get_all(&state.pool).await?;

    views::render(&GenreListPage {
        title: "Genre List",
        genre_list,
    })
}

/// GET /catalog/genre/:id
pub async fn genre_detail(
    Path(id): Path<GenreId>,
    State(state): State<AppState>,
) -> Result<Html<String>> {
    // The two reads are independent; issue them together and fail fast
    // if either errors.
    let (genre, genre_books) = tokio::try_join!(
        genres::get_by_id(&state.pool, id),
        books::get_by_genre(&state.pool, id)
    )?;

    let genre = genre.ok_or_else(|| ServerError::NotFound("Genre not found".to_string()))?;

    views::render(&GenreDetailPage {
        title: "Genre Detail",
        genre,
        genre_books,
    })
}

/// GET /catalog/genre/create
pub async fn genre_create_form() -> Result<Html<String>> {
    views::render(&GenreFormPage {
        title: "Create Genre",
        name: None,
        errors: Vec::new(),
    })
}

/// POST /catalog/genre/create
///
/// Two stages: validate the submitted form, then create-or-find. A
/// genre that already exists under the submitted name wins, and the
/// client is redirected to it instead of a duplicate being created.
pub async fn genre_create(
    State(state): State<AppState>,
    Form(form): Form<GenreForm>,
) -> Result<Response> {
    let create = match form.validate() {
        Validated::Invalid { candidate, errors } => {
            // Re-render the form with the submitted value and the
            // messages; the store is not touched.
            let page = GenreFormPage {
                title: "Create Genre",
                name: Some(candidate.name),
                errors,
            };
            return Ok(views::render(&page)?.into_response());
        }
        Validated::Valid(create) => create,
    };

    if let Some(existing) = genres::find_by_name(&state.pool, &create.name).await? {
        return Ok(Redirect::to(&existing.url()).into_response());
    }

    let genre = genres::create(&state.pool, create).await?;
    tracing::info!(genre_id = genre.id, name = %genre.name, "genre created");

    Ok(Redirect::to(&genre.url()).into_response())
}

/// GET /catalog/genre/:id/delete
pub async fn genre_delete_form() -> &'static str {
    "NOT IMPLEMENTED: Genre delete GET"
}

/// POST /catalog/genre/:id/delete
pub async fn genre_delete() -> &'static str {
    "NOT IMPLEMENTED: Genre delete POST"
}

/// GET /catalog/genre/:id/update
pub async fn genre_update_form() -> &'static str {
    "NOT IMPLEMENTED: Genre update GET"
}

/// POST /catalog/genre/:id/update
pub async fn genre_update() -> &'static str {
    "NOT IMPLEMENTED: Genre update POST"
}
