// src/domain/board.rs
use crate::domain::{Note, SearchQuery};
use tracing::{debug, instrument};

/// An ordered collection of notes.
///
/// Notes are kept in insertion order and duplicates are allowed. Every search
/// is a full linear scan; no index is kept, so the cost of a query grows with
/// the number of notes (times tags per note for tag queries).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    notes: Vec<Note>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note to the end of the board.
    pub fn add_note(&mut self, note: Note) {
        debug!(title = %note.title, "Adding note");
        self.notes.push(note);
    }

    /// Remove every note equal to `sample` and return how many were removed.
    ///
    /// Remaining notes keep their relative order.
    #[instrument(level = "debug", skip(self), fields(title = %sample.title))]
    pub fn delete_note(&mut self, sample: &Note) -> usize {
        let before = self.notes.len();
        self.notes.retain(|note| note != sample);
        let removed = before - self.notes.len();
        debug!(removed, remaining = self.notes.len(), "Deleted notes");
        removed
    }

    /// Lazily yield the notes matching `query`, in board order.
    pub fn matching<'a>(&'a self, query: &'a SearchQuery) -> impl Iterator<Item = &'a Note> + 'a {
        self.notes.iter().filter(move |note| query.matches(note))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, query: &SearchQuery) -> Vec<Note> {
        let result: Vec<Note> = self.matching(query).cloned().collect();
        debug!(matches = result.len(), "Search finished");
        result
    }

    pub fn search_by_title(&self, title: &str) -> Vec<Note> {
        self.search(&SearchQuery::title(title))
    }

    pub fn search_by_text(&self, fragment: &str) -> Vec<Note> {
        self.search(&SearchQuery::text(fragment))
    }

    /// Notes carrying at least one of `tags`.
    pub fn search_by_tag<S: AsRef<str>>(&self, tags: &[S]) -> Vec<Note> {
        self.search(&SearchQuery::tags(tags.iter().map(|t| t.as_ref())))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }
}

impl FromIterator<Note> for Board {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self {
            notes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Note> for Board {
    fn extend<I: IntoIterator<Item = Note>>(&mut self, iter: I) {
        self.notes.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
