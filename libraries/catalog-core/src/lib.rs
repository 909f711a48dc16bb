//! Catalog Core
//!
//! Domain types, validation, and error handling for the library catalog.
//!
//! This crate defines:
//! - **Domain Types**: `Genre`, `Book` and their id aliases
//! - **Form Validation**: typed form inputs validated into tagged results
//! - **Error Handling**: unified `CatalogError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use catalog_core::types::{GenreForm, Validated};
//!
//! let form = GenreForm {
//!     name: "  Fantasy  ".to_string(),
//! };
//!
//! match form.validate() {
//!     Validated::Valid(create) => assert_eq!(create.name, "Fantasy"),
//!     Validated::Invalid { .. } => unreachable!(),
//! }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use types::{
    Book, BookId, CreateBook, CreateGenre, FieldError, Genre, GenreForm, GenreId, Validated,
};
