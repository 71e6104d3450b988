// src/ffi/board.rs
use super::error::guard;
use super::handle::{lock, BoardHandle, ErrorHandle, HandleTable, NoteHandle, SharedTable};
use super::note::{lookup_note, read_str, NoteEntry};
use super::StoryboardQueryHandler;
use crate::domain::{Board, DomainError, Note, SearchQuery};
use once_cell::sync::Lazy;
use std::ffi::{c_char, c_void};
use std::sync::Mutex;
use tracing::debug;

static BOARDS: SharedTable<Board> = Lazy::new(|| Mutex::new(HandleTable::new()));

fn uninitialized() -> DomainError {
    DomainError::UseOfUninitialized("board_in not initialized".to_string())
}

fn with_board<R>(board: BoardHandle, f: impl FnOnce(&Board) -> R) -> Result<R, DomainError> {
    lock(&BOARDS).get(board.0).map(f).ok_or_else(uninitialized)
}

fn with_board_mut<R>(board: BoardHandle, f: impl FnOnce(&mut Board) -> R) -> Result<R, DomainError> {
    lock(&BOARDS).get_mut(board.0).map(f).ok_or_else(uninitialized)
}

fn store_board(board: Board) -> BoardHandle {
    let id = lock(&BOARDS).insert(board);
    debug!(handle = id, "Board handle issued");
    BoardHandle(id)
}

fn to_count(len: usize) -> Result<i32, DomainError> {
    i32::try_from(len).map_err(|_| DomainError::InternalFailure(format!("count {len} exceeds i32")))
}

/// Resolve matches, then hand each one to `handler`.
///
/// Matches are cloned out of the board before the first callback so that a
/// handler may re-enter the API.
unsafe fn run_search(
    board: BoardHandle,
    query: SearchQuery,
    handler: StoryboardQueryHandler,
    client_data: *mut c_void,
) -> Result<i32, DomainError> {
    let matches: Vec<Note> = with_board(board, |b| b.search(&query))?;
    let count = to_count(matches.len())?;
    debug!(handle = board.0, ?query, matches = count, "Search across boundary");
    let Some(handler) = handler else {
        return Ok(count);
    };
    for note in matches {
        let entry = NoteEntry::new(note)
            .map_err(|e| DomainError::InternalFailure(e.message().to_string()))?;
        let tags = entry.tag_pointers();
        handler(
            client_data,
            entry.title.as_ptr(),
            entry.text.as_ptr(),
            tags.as_ptr(),
            to_count(tags.len())?,
        );
    }
    Ok(count)
}

/// Create an empty board.
///
/// # Safety
/// `out_error` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn storyboard_construct(out_error: *mut ErrorHandle) -> BoardHandle {
    guard(out_error, BoardHandle::NULL, || Ok(store_board(Board::new())))
}

/// Release a board and every note it holds. Absent or released handles are ignored.
#[no_mangle]
pub extern "C" fn storyboard_destruct(board: BoardHandle) -> BoardHandle {
    if !board.is_null() && lock(&BOARDS).remove(board.0).is_some() {
        debug!(handle = board.0, "Board handle released");
    }
    BoardHandle::NULL
}

/// Deep-copy a board.
///
/// # Safety
/// `out_error` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn storyboard_copy(board: BoardHandle, out_error: *mut ErrorHandle) -> BoardHandle {
    guard(out_error, BoardHandle::NULL, || {
        let copy = with_board(board, Board::clone)?;
        Ok(store_board(copy))
    })
}

/// Append a copy of `note`; the caller keeps its note handle.
///
/// # Safety
/// `out_error` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn storyboard_add_note(board: BoardHandle, note: NoteHandle, out_error: *mut ErrorHandle) {
    guard(out_error, (), || {
        with_board(board, |_| ())?;
        let note = lookup_note(note)?;
        with_board_mut(board, |b| b.add_note(note))
    })
}

/// Remove every note equal to `note` and return how many were removed.
///
/// # Safety
/// `out_error` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn storyboard_delete_note(
    board: BoardHandle,
    note: NoteHandle,
    out_error: *mut ErrorHandle,
) -> i32 {
    guard(out_error, 0, || {
        with_board(board, |_| ())?;
        let sample = lookup_note(note)?;
        let removed = with_board_mut(board, |b| b.delete_note(&sample))?;
        to_count(removed)
    })
}

/// Report every note whose title equals `title` exactly.
///
/// # Safety
/// `title` must be null or a NUL-terminated string, `handler` must be safe to
/// call with `client_data`, `out_error` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn storyboard_search_by_title(
    board: BoardHandle,
    title: *const c_char,
    handler: StoryboardQueryHandler,
    client_data: *mut c_void,
    out_error: *mut ErrorHandle,
) -> i32 {
    guard(out_error, 0, || {
        with_board(board, |_| ())?;
        let title = read_str(title, "title")?;
        run_search(board, SearchQuery::title(title), handler, client_data)
    })
}

/// Report every note whose text contains `text`.
///
/// # Safety
/// Same contract as [`storyboard_search_by_title`].
#[no_mangle]
pub unsafe extern "C" fn storyboard_search_by_text(
    board: BoardHandle,
    text: *const c_char,
    handler: StoryboardQueryHandler,
    client_data: *mut c_void,
    out_error: *mut ErrorHandle,
) -> i32 {
    guard(out_error, 0, || {
        with_board(board, |_| ())?;
        let text = read_str(text, "text")?;
        run_search(board, SearchQuery::text(text), handler, client_data)
    })
}

/// Report every note carrying `tag`.
///
/// # Safety
/// Same contract as [`storyboard_search_by_title`].
#[no_mangle]
pub unsafe extern "C" fn storyboard_search_by_tag(
    board: BoardHandle,
    tag: *const c_char,
    handler: StoryboardQueryHandler,
    client_data: *mut c_void,
    out_error: *mut ErrorHandle,
) -> i32 {
    guard(out_error, 0, || {
        with_board(board, |_| ())?;
        let tag = read_str(tag, "tag")?;
        run_search(board, SearchQuery::tag(tag), handler, client_data)
    })
}

/// Number of notes on the board, `-1` on failure.
///
/// # Safety
/// `out_error` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn storyboard_get_nr_notes(board: BoardHandle, out_error: *mut ErrorHandle) -> i32 {
    guard(out_error, -1, || to_count(with_board(board, Board::len)?))
}
