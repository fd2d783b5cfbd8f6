//! Document-level storage seam for the numbering catalog.
//!
//! # Responsibility
//! - Define the byte-level contract the owning document uses to load and
//!   persist its catalog.
//! - Provide file-backed and in-memory implementations.
//!
//! # Invariants
//! - Stores never interpret catalog bytes; parsing lives in `catalog`.
//! - A read failure is surfaced as an error, never masked as "no catalog".

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::PathBuf;

pub type StorageResult<T> = Result<T, StorageError>;

/// Error for catalog byte-store operations.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying I/O failure; the store is unavailable.
    Io(io::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "catalog storage unavailable: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Byte-level access to one document's persisted numbering catalog.
pub trait CatalogStore {
    /// Whether a persisted catalog document is present.
    fn catalog_exists(&self) -> bool;

    /// Reads the persisted catalog document.
    fn read_catalog(&self) -> StorageResult<Vec<u8>>;

    /// Replaces the persisted catalog document.
    fn write_catalog(&mut self, bytes: &[u8]) -> StorageResult<()>;
}

/// Store keeping the catalog document at a filesystem path.
#[derive(Debug)]
pub struct FileCatalogStore {
    path: PathBuf,
}

impl FileCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogStore for FileCatalogStore {
    fn catalog_exists(&self) -> bool {
        self.path.exists()
    }

    fn read_catalog(&self) -> StorageResult<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }

    fn write_catalog(&mut self, bytes: &[u8]) -> StorageResult<()> {
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

/// In-memory store for tests and embedding callers.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    bytes: Option<Vec<u8>>,
}

impl MemoryCatalogStore {
    /// Creates a store with no catalog document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a persisted catalog document.
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes: Some(bytes) }
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn catalog_exists(&self) -> bool {
        self.bytes.is_some()
    }

    fn read_catalog(&self) -> StorageResult<Vec<u8>> {
        match &self.bytes {
            Some(bytes) => Ok(bytes.clone()),
            None => Err(StorageError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "no catalog document in memory store",
            ))),
        }
    }

    fn write_catalog(&mut self, bytes: &[u8]) -> StorageResult<()> {
        self.bytes = Some(bytes.to_vec());
        Ok(())
    }
}
