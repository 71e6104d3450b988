// src/ports/text.rs
use crate::domain::Note;

pub const SEPARATOR: &str = "-------------";

/// Renders notes as the plain blocks printed by the demo binary.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, note: &Note) -> String {
        format!(
            "Title: {}\nText: {}\nTags: {}\n{}\n",
            note.title,
            note.text,
            note.tags.join(", "),
            SEPARATOR
        )
    }

    pub fn render_all(&self, notes: &[Note]) -> String {
        notes.iter().map(|note| self.render(note)).collect()
    }

    /// One `Tag:` line per tag, closed by the separator.
    pub fn render_tags(&self, tags: &[String]) -> String {
        let mut out: String = tags.iter().map(|tag| format!("Tag: {tag}\n")).collect();
        out.push_str(SEPARATOR);
        out.push('\n');
        out
    }
}
