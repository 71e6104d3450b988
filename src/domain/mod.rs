// src/domain/mod.rs
pub mod board;
pub mod error;
pub mod note;
pub mod query;

pub use board::Board;
pub use error::{DomainError, ErrorKind};
pub use note::Note;
pub use query::SearchQuery;
