//! # Record store — the read/append seam between views and data
//!
//! Views never hold records directly; they are handed a store handle and ask it
//! for the current list (list pages), a single record (detail pages) or append
//! finished records (the submit pipeline). The only implementation is
//! [`crate::MemoryStore`], but forms and views are written against
//! [`RecordStore`] so tests can drive them with any backend.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`list`](RecordStore::list) | Every record, in insertion order. |
//! | [`get`](RecordStore::get) | Lookup by id; `None` when the id was never assigned. |
//! | [`append`](RecordStore::append) | Stores one record and assigns it the next id. |
//! | [`append_all`](RecordStore::append_all) | Stores a batch under one lock with consecutive ids, so a multi-section submit is all-or-nothing. |

use crate::models::{RecordId, Stored};

/// Read/append access to an ordered collection of records.
pub trait RecordStore<T> {
    fn list(&self) -> Vec<Stored<T>>;

    fn get(&self, id: RecordId) -> Option<Stored<T>>;

    fn append(&self, record: T) -> Stored<T>;

    fn append_all(&self, records: Vec<T>) -> Vec<Stored<T>>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
