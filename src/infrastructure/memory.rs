// src/infrastructure/memory.rs
use crate::application::NoteRepository;
use crate::domain::{Board, DomainError, Note, SearchQuery};

/// The native board answers directly; nothing here can fail.
impl NoteRepository for Board {
    fn add_note(&mut self, note: &Note) -> Result<(), DomainError> {
        Board::add_note(self, note.clone());
        Ok(())
    }

    fn delete_note(&mut self, sample: &Note) -> Result<usize, DomainError> {
        Ok(Board::delete_note(self, sample))
    }

    fn search(&self, query: &SearchQuery) -> Result<Vec<Note>, DomainError> {
        Ok(Board::search(self, query))
    }

    fn note_count(&self) -> Result<usize, DomainError> {
        Ok(self.len())
    }
}
