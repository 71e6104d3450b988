// src/ffi/error.rs
use super::handle::{lock, ErrorHandle, HandleTable, SharedTable};
use crate::domain::{DomainError, ErrorKind};
use std::any::Any;
use once_cell::sync::Lazy;
use std::ffi::{c_char, CStr, CString};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;
use tracing::{debug, warn};

pub(crate) const EMPTY: &CStr = c"";

pub(crate) struct ErrorEntry {
    kind: ErrorKind,
    message: CString,
}

static ERRORS: SharedTable<ErrorEntry> = Lazy::new(|| Mutex::new(HandleTable::new()));

/// Build a C string, dropping any interior NUL bytes.
pub(crate) fn lossy_c_string(text: &str) -> CString {
    let bytes: Vec<u8> = text.bytes().filter(|b| *b != 0).collect();
    CString::new(bytes).unwrap_or_default()
}

/// Store `err` as a new error object and publish its handle through `out_error`.
///
/// # Safety
/// `out_error` must be null or valid for writes.
pub(crate) unsafe fn report(out_error: *mut ErrorHandle, err: DomainError) {
    debug!(kind = ?err.kind(), message = err.message(), "Reporting error across boundary");
    if out_error.is_null() {
        warn!(%err, "No error slot supplied, error dropped");
        return;
    }
    let entry = ErrorEntry {
        kind: err.kind(),
        message: lossy_c_string(err.message()),
    };
    let id = lock(&ERRORS).insert(entry);
    *out_error = ErrorHandle(id);
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown internal error".to_string()
    }
}

/// Run `op`, turning both `Err` and panics into a reported error plus `sentinel`.
///
/// # Safety
/// `out_error` must be null or valid for writes.
pub(crate) unsafe fn guard<T>(
    out_error: *mut ErrorHandle,
    sentinel: T,
    op: impl FnOnce() -> Result<T, DomainError>,
) -> T {
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(Ok(value)) => value,
        Ok(Err(err)) => {
            report(out_error, err);
            sentinel
        }
        Err(payload) => {
            report(out_error, DomainError::InternalFailure(panic_message(payload)));
            sentinel
        }
    }
}

/// Message of an error object, or an empty string for an absent handle.
///
/// The pointer stays valid until the error is released.
#[no_mangle]
pub extern "C" fn error_message(error: ErrorHandle) -> *const c_char {
    lock(&ERRORS)
        .get(error.0)
        .map_or(EMPTY.as_ptr(), |entry| entry.message.as_ptr())
}

/// Same as [`error_message`].
#[no_mangle]
pub extern "C" fn error_get_string(error: ErrorHandle) -> *const c_char {
    error_message(error)
}

/// Kind code of an error object (see `ErrorKind`), `0` for an absent handle.
#[no_mangle]
pub extern "C" fn error_code(error: ErrorHandle) -> i32 {
    lock(&ERRORS).get(error.0).map_or(0, |entry| entry.kind.code())
}

/// Release an error object. Releasing an absent handle is a no-op.
#[no_mangle]
pub extern "C" fn error_destruct(error: ErrorHandle) -> ErrorHandle {
    if !error.is_null() {
        lock(&ERRORS).remove(error.0);
    }
    ErrorHandle::NULL
}

#[cfg(test)]
pub(crate) fn is_live(error: ErrorHandle) -> bool {
    lock(&ERRORS).contains(error.0)
}
