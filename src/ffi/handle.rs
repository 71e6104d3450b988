// src/ffi/handle.rs
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

// One counter for every handle kind, so a note id never resolves as a board.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

macro_rules! handle_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name(pub u64);

        impl $name {
            pub const NULL: Self = Self(0);

            pub fn is_null(self) -> bool {
                self.0 == 0
            }
        }
    };
}

handle_type!(
    /// Opaque reference to a note owned by the boundary layer.
    NoteHandle
);
handle_type!(
    /// Opaque reference to a board owned by the boundary layer.
    BoardHandle
);
handle_type!(
    /// Opaque reference to an error object; released with `error_destruct`.
    ErrorHandle
);

/// A handle table visible to every thread of the process.
pub(crate) type SharedTable<T> = Lazy<Mutex<HandleTable<T>>>;

/// Lock a shared table. The lock is never held across a caller callback.
pub(crate) fn lock<T>(table: &Mutex<HandleTable<T>>) -> MutexGuard<'_, HandleTable<T>> {
    // Tables stay consistent across a panic: every mutation is a single map call.
    table.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Live objects of one kind, keyed by handle id.
pub(crate) struct HandleTable<T> {
    entries: HashMap<u64, T>,
}

impl<T> HandleTable<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, value: T) -> u64 {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        self.entries.insert(id, value);
        id
    }

    pub(crate) fn get(&self, id: u64) -> Option<&T> {
        self.entries.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.entries.get_mut(&id)
    }

    pub(crate) fn remove(&mut self, id: u64) -> Option<T> {
        self.entries.remove(&id)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, id: u64) -> bool {
        self.entries.contains_key(&id)
    }
}
