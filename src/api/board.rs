// src/api/board.rs
use super::error::{call, to_c_string};
use super::note::Note;
use crate::domain::DomainError;
use crate::ffi::{self, BoardHandle, ErrorHandle, StoryboardQueryHandler};
use std::ffi::{c_char, c_void, CStr};
use tracing::debug;

type SearchFn = unsafe extern "C" fn(
    BoardHandle,
    *const c_char,
    StoryboardQueryHandler,
    *mut c_void,
    *mut ErrorHandle,
) -> i32;

type Collected = Vec<Result<Note, DomainError>>;

unsafe extern "C" fn collect_note(
    client_data: *mut c_void,
    title: *const c_char,
    text: *const c_char,
    tags: *const *const c_char,
    nr_tags: i32,
) {
    let sink = &mut *(client_data as *mut Collected);
    let tags: &[*const c_char] = match usize::try_from(nr_tags) {
        Ok(len) if len > 0 && !tags.is_null() => std::slice::from_raw_parts(tags, len),
        _ => &[],
    };
    let tags: Vec<String> = tags
        .iter()
        .map(|tag| CStr::from_ptr(*tag).to_string_lossy().into_owned())
        .collect();
    let title = CStr::from_ptr(title).to_string_lossy();
    let text = CStr::from_ptr(text).to_string_lossy();
    sink.push(Note::new(&title, &text, tags.as_slice()));
}

/// A board owned through the boundary layer.
///
/// Search results are fresh [`Note`] values in board order.
pub struct StoryBoard {
    handle: BoardHandle,
}

impl StoryBoard {
    pub fn new() -> Result<Self, DomainError> {
        let handle = call(|err| unsafe { ffi::storyboard_construct(err) })?;
        Ok(Self::from_handle(handle))
    }

    fn from_handle(handle: BoardHandle) -> Self {
        Self { handle }
    }

    /// A deep copy backed by its own handle.
    pub fn try_clone(&self) -> Result<Self, DomainError> {
        let handle = call(|err| unsafe { ffi::storyboard_copy(self.handle, err) })?;
        Ok(Self::from_handle(handle))
    }

    /// Append a copy of `note`.
    pub fn add_note(&mut self, note: &Note) -> Result<(), DomainError> {
        call(|err| unsafe { ffi::storyboard_add_note(self.handle, note.handle(), err) })
    }

    /// Remove every note equal to `sample`, returning how many went away.
    pub fn delete_note(&mut self, sample: &Note) -> Result<usize, DomainError> {
        let removed = call(|err| unsafe { ffi::storyboard_delete_note(self.handle, sample.handle(), err) })?;
        Ok(removed.max(0) as usize)
    }

    pub fn search_by_title(&self, title: &str) -> Result<Vec<Note>, DomainError> {
        self.run_search(title, "title", ffi::storyboard_search_by_title)
    }

    pub fn search_by_text(&self, fragment: &str) -> Result<Vec<Note>, DomainError> {
        self.run_search(fragment, "text", ffi::storyboard_search_by_text)
    }

    pub fn search_by_tag(&self, tag: &str) -> Result<Vec<Note>, DomainError> {
        self.run_search(tag, "tag", ffi::storyboard_search_by_tag)
    }

    fn run_search(&self, query: &str, field: &str, search: SearchFn) -> Result<Vec<Note>, DomainError> {
        let query = to_c_string(query, field)?;
        let mut collected: Collected = Vec::new();
        let count = call(|err| unsafe {
            search(
                self.handle,
                query.as_ptr(),
                Some(collect_note),
                &mut collected as *mut Collected as *mut c_void,
                err,
            )
        })?;
        debug!(field, count, "Collected search results");
        collected.into_iter().collect()
    }

    pub fn len(&self) -> Result<usize, DomainError> {
        let count = call(|err| unsafe { ffi::storyboard_get_nr_notes(self.handle, err) })?;
        Ok(count.max(0) as usize)
    }

    pub fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len()? == 0)
    }
}

impl Drop for StoryBoard {
    fn drop(&mut self) {
        self.handle = ffi::storyboard_destruct(self.handle);
    }
}
