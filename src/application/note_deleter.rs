// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};
use tracing::info;

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete every note equal to `sample` and return how many were removed
    pub fn delete_note(&mut self, sample: &Note) -> Result<usize, DomainError> {
        let removed = self.repository.delete_note(sample)?;
        info!(removed, title = %sample.title, "Deleted notes");
        Ok(removed)
    }

    pub fn remaining(&self) -> Result<usize, DomainError> {
        self.repository.note_count()
    }
}
