// src/domain/query.rs
use crate::domain::Note;

/// A predicate over notes.
///
/// - `Title`: exact, case-sensitive equality with the note title.
/// - `Text`: the note text contains the fragment (an empty fragment matches everything).
/// - `Tags`: the note carries at least one of the queried tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Title(String),
    Text(String),
    Tags(Vec<String>),
}

impl SearchQuery {
    pub fn title(title: impl Into<String>) -> Self {
        Self::Title(title.into())
    }

    pub fn text(fragment: impl Into<String>) -> Self {
        Self::Text(fragment.into())
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tags(vec![tag.into()])
    }

    pub fn tags<T, S>(tags: T) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Tags(tags.into_iter().map(Into::into).collect())
    }

    /// Name of the searched field: `title`, `text` or `tag`.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Text(_) => "text",
            Self::Tags(_) => "tag",
        }
    }

    /// The searched value; tag sets are joined with ", ".
    pub fn value(&self) -> String {
        match self {
            Self::Title(value) | Self::Text(value) => value.clone(),
            Self::Tags(tags) => tags.join(", "),
        }
    }

    pub fn matches(&self, note: &Note) -> bool {
        match self {
            Self::Title(title) => note.title == *title,
            Self::Text(fragment) => note.text.contains(fragment.as_str()),
            Self::Tags(tags) => tags.iter().any(|tag| note.has_tag(tag)),
        }
    }
}
