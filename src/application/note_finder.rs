// src/application/note_finder.rs
use crate::domain::{DomainError, Note, SearchQuery};
use tracing::{info, instrument};

/// Something that stores notes in order and can scan them.
pub trait NoteRepository {
    /// Append a copy of `note`.
    fn add_note(&mut self, note: &Note) -> Result<(), DomainError>;

    /// Remove all notes equal to `sample`
    /// Returns the number of notes removed
    fn delete_note(&mut self, sample: &Note) -> Result<usize, DomainError>;

    fn search(&self, query: &SearchQuery) -> Result<Vec<Note>, DomainError>;

    fn note_count(&self) -> Result<usize, DomainError>;
}

pub struct NoteFinder<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteFinder<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Run a query against the repository
    ///
    /// # Returns
    /// Matching notes in repository order
    #[instrument(level = "debug", skip(self))]
    pub fn find(&self, query: &SearchQuery) -> Result<Vec<Note>, DomainError> {
        let notes = self.repository.search(query)?;
        info!(matches = notes.len(), "Search finished");
        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::sample_board;

    #[test]
    fn given_text_query_when_finding_then_returns_matches_in_order() {
        // Arrange
        let finder = NoteFinder::new(sample_board());

        // Act
        let result = finder.find(&SearchQuery::text("text")).unwrap();

        // Assert
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title(), "title1");
        assert_eq!(result[1].title(), "title2");
    }

    #[test]
    fn given_tag_set_query_when_finding_then_any_tag_matches() {
        let finder = NoteFinder::new(sample_board());

        let result = finder.find(&SearchQuery::tags(["t3", "t5"])).unwrap();

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn given_unknown_title_when_finding_then_returns_empty() {
        let finder = NoteFinder::new(sample_board());

        let result = finder.find(&SearchQuery::title("title")).unwrap();

        assert!(result.is_empty());
    }
}
