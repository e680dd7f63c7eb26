use super::{FeedbackStore, StorageError};
use common::model::feedback::FeedbackRecord;
use csv::WriterBuilder;
use log::{debug, error, info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

/// Feedback kept as a comma separated file, one record per CSV row.
///
/// Fields are quoted whenever they contain the delimiter, a quote or a line
/// break, and embedded quotes are doubled, so every row reads back as exactly
/// the record that was written.
///
/// Each record is encoded in memory first and reaches the file through a
/// single `write_all` on a handle opened in append mode. Within the process
/// appends are additionally serialized by `write_lock`, which also covers the
/// header check so two first requests cannot both write a header.
///
/// A write that fails halfway is truncated away again. If a previous process
/// still left an unterminated row behind, the next append terminates it first
/// so the new record starts on its own row.
///
/// `append` never creates the file: a missing or empty store is refused until
/// `ensure_initialized` has written the header.
pub struct CsvFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, StorageError> {
        self.write_lock
            .lock()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))
    }

    fn open_for_append(&self) -> Result<File, StorageError> {
        Ok(OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?)
    }

    fn open_existing(&self) -> Result<File, StorageError> {
        OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => not_initialized(),
                _ => e.into(),
            })
    }
}

impl FeedbackStore for CsvFileStore {
    fn ensure_initialized(&self) -> Result<(), StorageError> {
        let _guard = self.lock()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = self.open_for_append()?;
        if file.metadata()?.len() > 0 {
            return Ok(());
        }

        let mut writer = WriterBuilder::new().from_writer(Vec::new());
        writer.write_record(FeedbackRecord::HEADER)?;
        let header = writer.into_inner().map_err(|e| e.into_error())?;
        write_or_rollback(&mut file, 0, &header)?;
        info!("Created feedback store at {}", self.path.display());
        Ok(())
    }

    fn append(&self, record: &FeedbackRecord) -> Result<(), StorageError> {
        let line = encode(record)?;

        let _guard = self.lock()?;
        let mut file = self.open_existing()?;
        let len = file.metadata()?.len();
        if len == 0 {
            return Err(not_initialized());
        }

        let mut bytes = Vec::with_capacity(line.len() + 1);
        if !ends_with_newline(&mut file)? {
            warn!("{} ends in an unterminated row, closing it", self.path.display());
            bytes.push(b'\n');
        }
        bytes.extend_from_slice(&line);

        write_or_rollback(&mut file, len, &bytes)?;
        debug!("Appended {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }
}

fn not_initialized() -> StorageError {
    StorageError::Unavailable("store not initialized".to_string())
}

fn ends_with_newline(file: &mut File) -> Result<bool, StorageError> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Writes `bytes` at the end of `file`, cutting the file back to `len_before`
/// if the write fails so no partial row is left behind.
fn write_or_rollback(file: &mut File, len_before: u64, bytes: &[u8]) -> Result<(), StorageError> {
    if let Err(e) = file.write_all(bytes) {
        if let Err(truncate_err) = file.set_len(len_before) {
            error!("Could not roll back partial write: {}", truncate_err);
        }
        return Err(e.into());
    }
    Ok(())
}

/// Encodes one record as a complete CSV row, terminator included.
fn encode(record: &FeedbackRecord) -> Result<Vec<u8>, StorageError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.serialize(record)?;
    Ok(writer.into_inner().map_err(|e| e.into_error())?)
}
