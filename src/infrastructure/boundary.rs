// src/infrastructure/boundary.rs
use crate::api::{self, StoryBoard};
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, SearchQuery};
use tracing::instrument;

fn read_back(notes: Vec<api::Note>) -> Result<Vec<Note>, DomainError> {
    notes.iter().map(api::Note::to_note).collect()
}

/// Routes every repository call through the C interface.
impl NoteRepository for StoryBoard {
    fn add_note(&mut self, note: &Note) -> Result<(), DomainError> {
        let wrapped = api::Note::try_from(note)?;
        StoryBoard::add_note(self, &wrapped)
    }

    fn delete_note(&mut self, sample: &Note) -> Result<usize, DomainError> {
        let wrapped = api::Note::try_from(sample)?;
        StoryBoard::delete_note(self, &wrapped)
    }

    #[instrument(level = "debug", skip(self))]
    fn search(&self, query: &SearchQuery) -> Result<Vec<Note>, DomainError> {
        let found = match query {
            SearchQuery::Title(title) => self.search_by_title(title)?,
            SearchQuery::Text(fragment) => self.search_by_text(fragment)?,
            SearchQuery::Tags(tags) => match tags.as_slice() {
                [tag] => self.search_by_tag(tag)?,
                _ => {
                    return Err(DomainError::InvalidArgument(format!(
                        "the C interface searches one tag at a time, got {}",
                        tags.len()
                    )))
                }
            },
        };
        read_back(found)
    }

    fn note_count(&self) -> Result<usize, DomainError> {
        self.len()
    }
}
