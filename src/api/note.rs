// src/api/note.rs
use super::error::{call, to_c_string};
use crate::domain::{self, DomainError};
use crate::ffi::{self, NoteHandle};
use std::ffi::{c_char, c_void, CStr, CString};
use std::fmt;

/// A note owned through the boundary layer.
///
/// Copies go through `note_copy`; the handle is released on drop.
pub struct Note {
    handle: NoteHandle,
}

unsafe extern "C" fn collect_tag(client_data: *mut c_void, tag: *const c_char) {
    let tags = &mut *(client_data as *mut Vec<String>);
    tags.push(CStr::from_ptr(tag).to_string_lossy().into_owned());
}

impl Note {
    pub fn new<S: AsRef<str>>(title: &str, text: &str, tags: &[S]) -> Result<Self, DomainError> {
        let title = to_c_string(title, "title")?;
        let text = to_c_string(text, "text")?;
        let tags = tags
            .iter()
            .map(|tag| to_c_string(tag.as_ref(), "tag"))
            .collect::<Result<Vec<CString>, _>>()?;
        let pointers: Vec<*const c_char> = tags.iter().map(|tag| tag.as_ptr()).collect();
        let nr_tags = i32::try_from(pointers.len())
            .map_err(|_| DomainError::InvalidArgument("too many tags".to_string()))?;

        let handle = call(|err| unsafe {
            ffi::note_construct(title.as_ptr(), text.as_ptr(), pointers.as_ptr(), nr_tags, err)
        })?;
        Ok(Self::from_handle(handle))
    }

    pub(crate) fn from_handle(handle: NoteHandle) -> Self {
        Self { handle }
    }

    pub(crate) fn handle(&self) -> NoteHandle {
        self.handle
    }

    pub fn title(&self) -> Result<String, DomainError> {
        let title = call(|err| unsafe { ffi::note_get_title(self.handle, err) })?;
        // SAFETY: the string is owned by our live handle.
        Ok(unsafe { CStr::from_ptr(title) }.to_string_lossy().into_owned())
    }

    pub fn text(&self) -> Result<String, DomainError> {
        let text = call(|err| unsafe { ffi::note_get_text(self.handle, err) })?;
        Ok(unsafe { CStr::from_ptr(text) }.to_string_lossy().into_owned())
    }

    pub fn tags(&self) -> Result<Vec<String>, DomainError> {
        let mut tags: Vec<String> = Vec::new();
        call(|err| unsafe {
            ffi::note_get_tags(
                self.handle,
                Some(collect_tag),
                &mut tags as *mut Vec<String> as *mut c_void,
                err,
            )
        })?;
        Ok(tags)
    }

    /// An independent copy backed by its own handle.
    pub fn try_clone(&self) -> Result<Self, DomainError> {
        let handle = call(|err| unsafe { ffi::note_copy(self.handle, err) })?;
        Ok(Self::from_handle(handle))
    }

    /// Read the note back into a plain value.
    pub fn to_note(&self) -> Result<domain::Note, DomainError> {
        Ok(domain::Note::new(self.title()?, self.text()?, self.tags()?))
    }
}

impl TryFrom<&domain::Note> for Note {
    type Error = DomainError;

    fn try_from(note: &domain::Note) -> Result<Self, Self::Error> {
        Self::new(&note.title, &note.text, note.tags.as_slice())
    }
}

/// Notes compare by content. A note always equals itself; a note whose
/// contents cannot be read equals no other note.
impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        if self.handle == other.handle {
            return true;
        }
        match (self.to_note(), other.to_note()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_note() {
            Ok(note) => f
                .debug_struct("Note")
                .field("handle", &self.handle.0)
                .field("title", &note.title)
                .field("text", &note.text)
                .field("tags", &note.tags)
                .finish(),
            Err(_) => f.debug_struct("Note").field("handle", &self.handle.0).finish(),
        }
    }
}

impl Drop for Note {
    fn drop(&mut self) {
        self.handle = ffi::note_destruct(self.handle);
    }
}
