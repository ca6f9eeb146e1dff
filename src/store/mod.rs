//! Flat-file JSON record store
//!
//! Each collection lives in a single JSON array file which is read once at
//! startup and rewritten in full (pretty-printed) after every mutation. The
//! in-memory vector is the source of truth between writes; the mutex
//! serializes the read-modify-write cycle within this process. There is no
//! cross-process locking and no partial-write recovery.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in data file: {0}")]
    Json(#[from] serde_json::Error),
}

/// A whole-collection-in-memory store backed by a JSON array file.
pub struct JsonStore<T> {
    path: PathBuf,
    records: Mutex<Vec<T>>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Open a store, loading all records from `path`.
    ///
    /// A missing file is treated as an empty collection; it is created on
    /// the first mutation.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let records = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    /// Read access to the full collection through a closure.
    pub fn with_records<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let records = self.records.lock().expect("store mutex poisoned");
        f(&records)
    }

    /// Append a record and rewrite the backing file.
    pub fn insert(&self, record: T) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("store mutex poisoned");
        records.push(record);
        self.persist(&records)
    }

    /// Remove the first record matching `pred` and rewrite the backing file.
    ///
    /// Returns `Ok(true)` if a record was removed.
    pub fn remove_where(&self, pred: impl Fn(&T) -> bool) -> Result<bool, StoreError> {
        let mut records = self.records.lock().expect("store mutex poisoned");
        match records.iter().position(|r| pred(r)) {
            Some(index) => {
                records.remove(index);
                self.persist(&records)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.with_records(|r| r.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn persist(&self, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
