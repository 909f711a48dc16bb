/// Route handler modules
pub mod catalog;
pub mod genres;
pub mod health;
