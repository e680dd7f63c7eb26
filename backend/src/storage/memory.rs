use super::{FeedbackStore, StorageError};
use common::model::feedback::FeedbackRecord;
use std::sync::{Mutex, MutexGuard};

/// Keeps records in process memory. Nothing survives a restart.
///
/// Selected with `FEEDBACK_STORE=memory`, and used as the store double in
/// handler tests. [`MemoryStore::set_unwritable`] makes every call fail the
/// way a full disk or a read-only mount would.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    initialized: bool,
    header_writes: usize,
    unwritable: bool,
    records: Vec<FeedbackRecord>,
}

impl MemoryStore {
    #[cfg(test)]
    pub fn records(&self) -> Vec<FeedbackRecord> {
        self.lock().map(|s| s.records.clone()).unwrap_or_default()
    }

    #[cfg(test)]
    pub fn header_writes(&self) -> usize {
        self.lock().map(|s| s.header_writes).unwrap_or_default()
    }

    #[cfg(test)]
    pub fn set_unwritable(&self, unwritable: bool) {
        if let Ok(mut state) = self.lock() {
            state.unwritable = unwritable;
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, StorageError> {
        self.state
            .lock()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))
    }

    fn writable(&self) -> Result<MutexGuard<'_, MemoryState>, StorageError> {
        let state = self.lock()?;
        if state.unwritable {
            return Err(StorageError::Unavailable("store is read-only".to_string()));
        }
        Ok(state)
    }
}

impl FeedbackStore for MemoryStore {
    fn ensure_initialized(&self) -> Result<(), StorageError> {
        let mut state = self.writable()?;
        if !state.initialized {
            state.initialized = true;
            state.header_writes += 1;
        }
        Ok(())
    }

    fn append(&self, record: &FeedbackRecord) -> Result<(), StorageError> {
        let mut state = self.writable()?;
        if !state.initialized {
            return Err(StorageError::Unavailable("store not initialized".to_string()));
        }
        state.records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FeedbackRecord {
        FeedbackRecord {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            rating: 5,
            comments: "Great tool!".to_string(),
            source: "FeedbackApp".to_string(),
        }
    }

    #[test]
    fn header_is_counted_once() {
        let store = MemoryStore::default();
        store.ensure_initialized().unwrap();
        store.ensure_initialized().unwrap();
        assert_eq!(store.header_writes(), 1);
    }

    #[test]
    fn append_requires_initialization() {
        let store = MemoryStore::default();
        assert!(store.append(&record()).is_err());

        store.ensure_initialized().unwrap();
        store.append(&record()).unwrap();
        assert_eq!(store.records(), vec![record()]);
    }

    #[test]
    fn unwritable_store_refuses_everything() {
        let store = MemoryStore::default();
        store.set_unwritable(true);

        assert!(matches!(
            store.ensure_initialized(),
            Err(StorageError::Unavailable(_))
        ));
        assert!(store.records().is_empty());
    }
}
