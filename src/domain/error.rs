// src/domain/error.rs
use thiserror::Error;

/// Coarse classification of a failure, stable across the C boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorKind {
    InvalidArgument = 1,
    UseOfUninitialized = 2,
    InternalFailure = 3,
}

impl ErrorKind {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::InvalidArgument),
            2 => Some(Self::UseOfUninitialized),
            3 => Some(Self::InternalFailure),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Use of uninitialized handle: {0}")]
    UseOfUninitialized(String),
    #[error("Internal failure: {0}")]
    InternalFailure(String),
}

impl DomainError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            ErrorKind::InvalidArgument => Self::InvalidArgument(message),
            ErrorKind::UseOfUninitialized => Self::UseOfUninitialized(message),
            ErrorKind::InternalFailure => Self::InternalFailure(message),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::UseOfUninitialized(_) => ErrorKind::UseOfUninitialized,
            Self::InternalFailure(_) => ErrorKind::InternalFailure,
        }
    }

    /// The bare message, without the kind prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(m) | Self::UseOfUninitialized(m) | Self::InternalFailure(m) => m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_each_kind_when_roundtripping_code_then_kind_is_preserved() {
        for kind in [
            ErrorKind::InvalidArgument,
            ErrorKind::UseOfUninitialized,
            ErrorKind::InternalFailure,
        ] {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ErrorKind::from_code(0), None);
    }

    #[test]
    fn given_error_when_displaying_then_message_is_included() {
        let err = DomainError::new(ErrorKind::InvalidArgument, "title not initialized");

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "title not initialized");
        assert_eq!(err.to_string(), "Invalid argument: title not initialized");
    }
}
