// src/api/mod.rs
//! Safe wrapper over the C interface in [`crate::ffi`].
//!
//! Nothing here touches [`crate::domain::Board`] directly: every operation is
//! a boundary call, errors come back as [`DomainError`](crate::domain::DomainError)
//! and search callbacks are collected into vectors. Wrapper values may move
//! between threads; each one still has a single owner.

mod board;
mod error;
mod note;

pub use board::StoryBoard;
pub use note::Note;
