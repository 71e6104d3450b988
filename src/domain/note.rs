// src/domain/note.rs
use serde::{Deserialize, Serialize};

/// A titled piece of text with an ordered list of tags.
///
/// Tags keep the order they were given in and may contain duplicates.
/// Two notes are equal when title, text and the full tag sequence match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    pub fn new<T, S>(title: impl Into<String>, text: impl Into<String>, tags: T) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            text: text.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
