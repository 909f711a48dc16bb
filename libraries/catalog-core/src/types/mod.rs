mod book;
mod form;
mod genre;

pub use book::{Book, BookId, CreateBook};
pub use form::{FieldError, GenreForm, Validated};
pub use genre::{CreateGenre, Genre, GenreId};
