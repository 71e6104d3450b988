// src/ffi/note.rs
use super::error::{guard, EMPTY};
use super::handle::{lock, ErrorHandle, HandleTable, NoteHandle, SharedTable};
use super::NoteQueryHandler;
use crate::domain::{DomainError, Note};
use once_cell::sync::Lazy;
use std::ffi::{c_char, c_void, CStr, CString};
use std::sync::Mutex;
use tracing::debug;

/// A note together with the C strings handed out for it.
pub(crate) struct NoteEntry {
    pub(crate) note: Note,
    pub(crate) title: CString,
    pub(crate) text: CString,
    pub(crate) tags: Vec<CString>,
}

impl NoteEntry {
    pub(crate) fn new(note: Note) -> Result<Self, DomainError> {
        let to_c = |value: &str, field: &str| {
            CString::new(value)
                .map_err(|_| DomainError::InvalidArgument(format!("{field} contains a NUL byte")))
        };
        let title = to_c(note.title.as_str(), "title")?;
        let text = to_c(note.text.as_str(), "text")?;
        let tags = note
            .tags
            .iter()
            .map(|tag| to_c(tag.as_str(), "tag"))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            note,
            title,
            text,
            tags,
        })
    }

    pub(crate) fn tag_pointers(&self) -> Vec<*const c_char> {
        self.tags.iter().map(|tag| tag.as_ptr()).collect()
    }
}

static NOTES: SharedTable<NoteEntry> = Lazy::new(|| Mutex::new(HandleTable::new()));

fn uninitialized() -> DomainError {
    DomainError::UseOfUninitialized("note_in not initialized".to_string())
}

/// Clone the note behind `handle`.
pub(crate) fn lookup_note(handle: NoteHandle) -> Result<Note, DomainError> {
    lock(&NOTES)
        .get(handle.0)
        .map(|entry| entry.note.clone())
        .ok_or_else(uninitialized)
}

fn store_note(note: Note) -> Result<NoteHandle, DomainError> {
    let entry = NoteEntry::new(note)?;
    let id = lock(&NOTES).insert(entry);
    debug!(handle = id, "Note handle issued");
    Ok(NoteHandle(id))
}

/// Borrow a required C string argument.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
pub(crate) unsafe fn read_str<'a>(ptr: *const c_char, name: &str) -> Result<&'a str, DomainError> {
    if ptr.is_null() {
        return Err(DomainError::InvalidArgument(format!("{name} not initialized")));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| DomainError::InvalidArgument(format!("{name} is not valid UTF-8")))
}

/// # Safety
/// When `nr_tags > 0`, `tags` must be null or point to `nr_tags` string pointers.
unsafe fn read_tags(tags: *const *const c_char, nr_tags: i32) -> Result<Vec<String>, DomainError> {
    if nr_tags < 0 {
        return Err(DomainError::InvalidArgument(format!(
            "nr_tags must not be negative, got {nr_tags}"
        )));
    }
    if nr_tags == 0 {
        return Ok(Vec::new());
    }
    if tags.is_null() {
        return Err(DomainError::InvalidArgument("tags[] not initialized".to_string()));
    }
    std::slice::from_raw_parts(tags, nr_tags as usize)
        .iter()
        .enumerate()
        .map(|(index, tag)| read_str(*tag, &format!("tags[{index}]")).map(str::to_owned))
        .collect()
}

/// Create a note from a title, a text and `nr_tags` tags.
///
/// `tags` may be null when `nr_tags` is zero.
///
/// # Safety
/// `title` and `text` must be null or NUL-terminated strings, `tags` must be
/// null or point to `nr_tags` such strings, `out_error` must be null or valid
/// for writes.
#[no_mangle]
pub unsafe extern "C" fn note_construct(
    title: *const c_char,
    text: *const c_char,
    tags: *const *const c_char,
    nr_tags: i32,
    out_error: *mut ErrorHandle,
) -> NoteHandle {
    guard(out_error, NoteHandle::NULL, || {
        let title = read_str(title, "title")?;
        let text = read_str(text, "text")?;
        let tags = read_tags(tags, nr_tags)?;
        store_note(Note::new(title, text, tags))
    })
}

/// Release a note. Absent or already released handles are ignored.
#[no_mangle]
pub extern "C" fn note_destruct(note: NoteHandle) -> NoteHandle {
    if !note.is_null() && lock(&NOTES).remove(note.0).is_some() {
        debug!(handle = note.0, "Note handle released");
    }
    NoteHandle::NULL
}

/// Create an independent copy of a note.
///
/// # Safety
/// `out_error` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn note_copy(note: NoteHandle, out_error: *mut ErrorHandle) -> NoteHandle {
    guard(out_error, NoteHandle::NULL, || store_note(lookup_note(note)?))
}

unsafe fn field_pointer(
    note: NoteHandle,
    out_error: *mut ErrorHandle,
    field: impl Fn(&NoteEntry) -> *const c_char,
) -> *const c_char {
    guard(out_error, EMPTY.as_ptr(), || {
        // The CString buffers outlive the lock; they move only when the note is released.
        lock(&NOTES).get(note.0).map(&field).ok_or_else(uninitialized)
    })
}

/// Title of a note. The string lives as long as the note handle.
///
/// # Safety
/// `out_error` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn note_get_title(note: NoteHandle, out_error: *mut ErrorHandle) -> *const c_char {
    field_pointer(note, out_error, |entry| entry.title.as_ptr())
}

/// Text of a note. The string lives as long as the note handle.
///
/// # Safety
/// `out_error` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn note_get_text(note: NoteHandle, out_error: *mut ErrorHandle) -> *const c_char {
    field_pointer(note, out_error, |entry| entry.text.as_ptr())
}

/// Call `handler` once per tag, in order, and return the number of tags.
///
/// # Safety
/// `handler` must be safe to call with `client_data`; `out_error` must be null
/// or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn note_get_tags(
    note: NoteHandle,
    handler: NoteQueryHandler,
    client_data: *mut c_void,
    out_error: *mut ErrorHandle,
) -> i32 {
    guard(out_error, 0, || {
        // Copy out first so the handler may call back into this API.
        let tags = NoteEntry::new(lookup_note(note)?)?.tags;
        let count = i32::try_from(tags.len())
            .map_err(|_| DomainError::InternalFailure("too many tags".to_string()))?;
        if let Some(handler) = handler {
            for tag in &tags {
                handler(client_data, tag.as_ptr());
            }
        }
        Ok(count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use crate::ffi::{error_code, error_destruct, error_message};
    use std::ptr;

    unsafe extern "C" fn collect_tag(client_data: *mut c_void, tag: *const c_char) {
        let tags = &mut *(client_data as *mut Vec<String>);
        tags.push(CStr::from_ptr(tag).to_string_lossy().into_owned());
    }

    fn c_string(ptr: *const c_char) -> String {
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }

    #[test]
    fn given_valid_inputs_when_constructing_then_accessors_return_inputs() {
        // Arrange
        let tags = [c"t1".as_ptr(), c"t2".as_ptr(), c"t3".as_ptr()];
        let mut error = ErrorHandle::NULL;

        // Act
        let note = unsafe { note_construct(c"note".as_ptr(), c"text".as_ptr(), tags.as_ptr(), 3, &mut error) };

        // Assert
        assert!(error.is_null());
        assert!(!note.is_null());
        assert_eq!(c_string(unsafe { note_get_title(note, &mut error) }), "note");
        assert_eq!(c_string(unsafe { note_get_text(note, &mut error) }), "text");

        let mut collected: Vec<String> = Vec::new();
        let count = unsafe {
            note_get_tags(note, Some(collect_tag), &mut collected as *mut _ as *mut c_void, &mut error)
        };
        assert!(error.is_null());
        assert_eq!(count, 3);
        assert_eq!(collected, ["t1", "t2", "t3"]);

        assert!(note_destruct(note).is_null());
    }

    #[test]
    fn given_null_title_when_constructing_then_invalid_argument() {
        let mut error = ErrorHandle::NULL;

        let note = unsafe { note_construct(ptr::null(), c"text".as_ptr(), ptr::null(), 0, &mut error) };

        assert!(note.is_null());
        assert_eq!(error_code(error), ErrorKind::InvalidArgument.code());
        assert_eq!(c_string(error_message(error)), "title not initialized");
        error_destruct(error);
    }

    #[test]
    fn given_null_text_when_constructing_then_invalid_argument() {
        let mut error = ErrorHandle::NULL;

        let note = unsafe { note_construct(c"title".as_ptr(), ptr::null(), ptr::null(), 0, &mut error) };

        assert!(note.is_null());
        assert_eq!(c_string(error_message(error)), "text not initialized");
        error_destruct(error);
    }

    #[test]
    fn given_null_tags_with_positive_count_when_constructing_then_invalid_argument() {
        let mut error = ErrorHandle::NULL;

        let note = unsafe { note_construct(c"a".as_ptr(), c"b".as_ptr(), ptr::null(), 2, &mut error) };

        assert!(note.is_null());
        assert_eq!(c_string(error_message(error)), "tags[] not initialized");
        error_destruct(error);
    }

    #[test]
    fn given_negative_tag_count_when_constructing_then_invalid_argument() {
        let mut error = ErrorHandle::NULL;

        let note = unsafe { note_construct(c"a".as_ptr(), c"b".as_ptr(), ptr::null(), -1, &mut error) };

        assert!(note.is_null());
        assert_eq!(error_code(error), ErrorKind::InvalidArgument.code());
        error_destruct(error);
    }

    #[test]
    fn given_null_entry_in_tags_when_constructing_then_invalid_argument() {
        let tags = [c"t1".as_ptr(), ptr::null()];
        let mut error = ErrorHandle::NULL;

        let note = unsafe { note_construct(c"a".as_ptr(), c"b".as_ptr(), tags.as_ptr(), 2, &mut error) };

        assert!(note.is_null());
        assert_eq!(c_string(error_message(error)), "tags[1] not initialized");
        error_destruct(error);
    }

    #[test]
    fn given_invalid_utf8_when_constructing_then_invalid_argument() {
        let bad = [0xffu8, 0xfe, 0x00];
        let mut error = ErrorHandle::NULL;

        let note = unsafe {
            note_construct(bad.as_ptr() as *const c_char, c"b".as_ptr(), ptr::null(), 0, &mut error)
        };

        assert!(note.is_null());
        assert_eq!(c_string(error_message(error)), "title is not valid UTF-8");
        error_destruct(error);
    }

    #[test]
    fn given_copy_when_original_destructed_then_copy_stays_valid() {
        // Arrange
        let mut error = ErrorHandle::NULL;
        let original = unsafe { note_construct(c"a".as_ptr(), c"b".as_ptr(), ptr::null(), 0, &mut error) };

        // Act
        let copy = unsafe { note_copy(original, &mut error) };
        note_destruct(original);

        // Assert
        assert!(error.is_null());
        assert_ne!(copy, original);
        assert_eq!(c_string(unsafe { note_get_title(copy, &mut error) }), "a");
        assert!(error.is_null());
        note_destruct(copy);
    }

    #[test]
    fn given_destructed_note_when_querying_then_use_of_uninitialized() {
        let mut error = ErrorHandle::NULL;
        let note = unsafe { note_construct(c"a".as_ptr(), c"b".as_ptr(), ptr::null(), 0, &mut error) };
        note_destruct(note);

        let title = unsafe { note_get_title(note, &mut error) };

        assert_eq!(c_string(title), "");
        assert_eq!(error_code(error), ErrorKind::UseOfUninitialized.code());
        assert_eq!(c_string(error_message(error)), "note_in not initialized");
        error_destruct(error);
    }

    #[test]
    fn given_absent_note_when_copying_or_listing_tags_then_use_of_uninitialized() {
        let mut error = ErrorHandle::NULL;
        assert!(unsafe { note_copy(NoteHandle::NULL, &mut error) }.is_null());
        assert_eq!(error_code(error), ErrorKind::UseOfUninitialized.code());
        error = error_destruct(error);

        let count = unsafe { note_get_tags(NoteHandle::NULL, None, ptr::null_mut(), &mut error) };
        assert_eq!(count, 0);
        assert_eq!(error_code(error), ErrorKind::UseOfUninitialized.code());
        error_destruct(error);
    }

    #[test]
    fn given_null_handler_when_listing_tags_then_returns_count() {
        let tags = [c"t1".as_ptr(), c"t2".as_ptr()];
        let mut error = ErrorHandle::NULL;
        let note = unsafe { note_construct(c"a".as_ptr(), c"b".as_ptr(), tags.as_ptr(), 2, &mut error) };

        let count = unsafe { note_get_tags(note, None, ptr::null_mut(), &mut error) };

        assert_eq!(count, 2);
        assert!(error.is_null());
        note_destruct(note);
    }

    #[test]
    fn given_destructed_note_when_destructing_again_then_is_noop() {
        let mut error = ErrorHandle::NULL;
        let note = unsafe { note_construct(c"a".as_ptr(), c"b".as_ptr(), ptr::null(), 0, &mut error) };

        assert!(note_destruct(note).is_null());
        assert!(note_destruct(note).is_null());
        assert!(note_destruct(NoteHandle::NULL).is_null());
    }
}
