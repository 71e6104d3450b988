// src/application/mod.rs
pub mod note_deleter;
pub mod note_finder;

pub use note_deleter::NoteDeleter;
pub use note_finder::{NoteFinder, NoteRepository};
