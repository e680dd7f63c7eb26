//! Append-only persistence for validated feedback.
//!
//! Handlers never touch files directly: they receive an `Arc<dyn FeedbackStore>`
//! through actix `web::Data`, which keeps the backend swappable (CSV file on
//! disk, or memory for tests and throwaway deployments).
//!
//! Every method is blocking. Callers on the async side run them on tokio's
//! blocking pool (see `services::feedback::submit`).

mod csv_file;
mod memory;

pub use csv_file::CsvFileStore;
pub use memory::MemoryStore;

use crate::config::StoreBackend;
use common::model::feedback::FeedbackRecord;
use std::io;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("store I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not encode record: {0}")]
    Encode(#[from] csv::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A durable, append-only sequence of [`FeedbackRecord`]s.
///
/// Implementations must make each `append` land as one complete record, even
/// when called from several threads at once. Records are never read back,
/// rewritten or removed through this trait.
pub trait FeedbackStore: Send + Sync {
    /// Creates the store and its header if missing. Safe to call before
    /// every append: an existing store is left untouched.
    fn ensure_initialized(&self) -> Result<(), StorageError>;

    /// Adds one record. A store that was never initialized refuses with
    /// [`StorageError::Unavailable`].
    fn append(&self, record: &FeedbackRecord) -> Result<(), StorageError>;
}

/// Builds the store selected by configuration.
pub fn open(backend: &StoreBackend) -> Arc<dyn FeedbackStore> {
    match backend {
        StoreBackend::Csv(path) => Arc::new(CsvFileStore::new(path.clone())),
        StoreBackend::Memory => Arc::new(MemoryStore::default()),
    }
}
