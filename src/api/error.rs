// src/api/error.rs
use crate::domain::{DomainError, ErrorKind};
use crate::ffi::{self, ErrorHandle};
use std::ffi::{CStr, CString};

/// Error slot handed to a single boundary call.
///
/// The error object, if one was reported, is released when the slot drops,
/// whichever way the caller leaves.
pub(crate) struct ErrorSlot {
    handle: ErrorHandle,
}

impl ErrorSlot {
    pub(crate) fn new() -> Self {
        Self {
            handle: ErrorHandle::NULL,
        }
    }

    pub(crate) fn as_out(&mut self) -> *mut ErrorHandle {
        &mut self.handle
    }

    pub(crate) fn into_result<T>(self, value: T) -> Result<T, DomainError> {
        if self.handle.is_null() {
            return Ok(value);
        }
        // SAFETY: error_message never returns null and the string lives until the slot drops.
        let message = unsafe { CStr::from_ptr(ffi::error_message(self.handle)) }
            .to_string_lossy()
            .into_owned();
        let kind = ErrorKind::from_code(ffi::error_code(self.handle)).unwrap_or(ErrorKind::InternalFailure);
        Err(DomainError::new(kind, message))
    }
}

impl Drop for ErrorSlot {
    fn drop(&mut self) {
        self.handle = ffi::error_destruct(self.handle);
    }
}

/// Run one boundary call with a fresh error slot.
pub(crate) fn call<T>(op: impl FnOnce(*mut ErrorHandle) -> T) -> Result<T, DomainError> {
    let mut slot = ErrorSlot::new();
    let value = op(slot.as_out());
    slot.into_result(value)
}

pub(crate) fn to_c_string(value: &str, field: &str) -> Result<CString, DomainError> {
    CString::new(value).map_err(|_| DomainError::InvalidArgument(format!("{field} contains a NUL byte")))
}
