use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::{RecordId, Stored};
use crate::repo::RecordStore;

/// In-memory RecordStore. Clones share the same records.
#[derive(Debug)]
pub struct MemoryStore<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

#[derive(Debug)]
struct Inner<T> {
    records: Vec<Stored<T>>,
    next_id: u32,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                records: Vec::new(),
                next_id: 1,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Two handles are equal when they share the same records.
impl<T> PartialEq for MemoryStore<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> RecordStore<T> for MemoryStore<T> {
    fn list(&self) -> Vec<Stored<T>> {
        self.lock().records.clone()
    }

    fn get(&self, id: RecordId) -> Option<Stored<T>> {
        self.lock().records.iter().find(|r| r.id == id).cloned()
    }

    fn append(&self, record: T) -> Stored<T> {
        let mut inner = self.lock();
        let stored = Stored {
            id: RecordId(inner.next_id),
            record,
        };
        inner.next_id += 1;
        inner.records.push(stored.clone());
        tracing::debug!(id = %stored.id, "appended record");
        stored
    }

    fn append_all(&self, records: Vec<T>) -> Vec<Stored<T>> {
        let mut inner = self.lock();
        let mut appended = Vec::with_capacity(records.len());
        for record in records {
            let stored = Stored {
                id: RecordId(inner.next_id),
                record,
            };
            inner.next_id += 1;
            inner.records.push(stored.clone());
            appended.push(stored);
        }
        tracing::debug!(count = appended.len(), "appended batch");
        appended
    }

    fn len(&self) -> usize {
        self.lock().records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Student;

    fn student(name: &str) -> Student {
        Student {
            name: name.to_string(),
            age: 20,
            major: "Physics".to_string(),
        }
    }

    #[test]
    fn test_append_assigns_distinct_ids_in_order() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        let names = ["Ana", "Ben", "Cleo", "Dev", "Eli"];
        for name in names {
            store.append(student(name));
        }

        let listed = store.list();
        assert_eq!(listed.len(), names.len());
        for (stored, name) in listed.iter().zip(names) {
            assert_eq!(stored.record.name, name);
        }
        let ids: Vec<_> = listed.iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=5).map(RecordId).collect::<Vec<_>>());
    }

    #[test]
    fn test_get_by_id() {
        let store = MemoryStore::new();
        let first = store.append(student("Ana"));
        store.append(student("Ben"));

        assert_eq!(store.get(first.id).unwrap().record.name, "Ana");
        assert!(store.get(RecordId(99)).is_none());
    }

    #[test]
    fn test_append_all_is_consecutive() {
        let store = MemoryStore::new();
        store.append(student("Seed"));

        let batch = store.append_all(vec![student("Left"), student("Right")]);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].id, RecordId(2));
        assert_eq!(batch[1].id, RecordId(3));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_clones_share_records() {
        let store = MemoryStore::new();
        let handle = store.clone();
        handle.append(student("Shared"));

        assert_eq!(store.len(), 1);
        assert_eq!(store, handle);
        assert_ne!(store, MemoryStore::new());
    }
}
