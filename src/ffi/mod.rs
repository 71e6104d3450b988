// src/ffi/mod.rs
//! C-compatible interface over notes and boards.
//!
//! Conventions shared by every function here:
//!
//! - Notes, boards and errors are opaque 64-bit handles; `0` means absent.
//!   Handles resolve through process-wide tables, so any thread may use them.
//!   Callers that share a board between threads serialize access themselves.
//! - Fallible calls take `out_error`. On failure a new error handle is written
//!   there and a sentinel is returned (absent handle, `0`, `-1` for
//!   [`storyboard_get_nr_notes`], or an empty string). The slot is left
//!   untouched on success. The caller releases errors with [`error_destruct`].
//! - Searches report each match through a callback, synchronously and in
//!   board order, then return the number of matches. Pointers handed to a
//!   callback are valid only for that invocation.
//! - Destructors accept absent or already released handles and always return
//!   the absent handle.
//! - Panics never cross the boundary; they are reported as internal failures.

mod board;
pub(crate) mod error;
mod handle;
mod note;

pub use board::{
    storyboard_add_note, storyboard_construct, storyboard_copy, storyboard_delete_note,
    storyboard_destruct, storyboard_get_nr_notes, storyboard_search_by_tag,
    storyboard_search_by_text, storyboard_search_by_title,
};
pub use error::{error_code, error_destruct, error_get_string, error_message};
pub use handle::{BoardHandle, ErrorHandle, NoteHandle};
pub use note::{
    note_construct, note_copy, note_destruct, note_get_tags, note_get_text, note_get_title,
};

use std::ffi::{c_char, c_void};

/// Called once per tag by [`note_get_tags`].
pub type NoteQueryHandler = Option<unsafe extern "C" fn(client_data: *mut c_void, tag: *const c_char)>;

/// Called once per matching note by the `storyboard_search_by_*` functions.
pub type StoryboardQueryHandler = Option<
    unsafe extern "C" fn(
        client_data: *mut c_void,
        title: *const c_char,
        text: *const c_char,
        tags: *const *const c_char,
        nr_tags: i32,
    ),
>;
