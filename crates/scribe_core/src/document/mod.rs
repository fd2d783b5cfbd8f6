//! Document-scoped ownership of the numbering catalog.
//!
//! # Responsibility
//! - Own the storage seam and the lazily materialized catalog for one
//!   document.
//! - Materialize the catalog exactly once; load persisted state when
//!   present, start empty otherwise.
//! - Persist the catalog back through the storage seam.
//!
//! # Invariants
//! - The catalog, once materialized, lives for the document's lifetime.
//! - Lists never hold catalog contents; they resolve through the document.
//! - Load rejects catalogs that fail the integrity sweep instead of
//!   masking them.

use crate::catalog::{CatalogError, CatalogResult, NumberingCatalog};
use crate::storage::CatalogStore;
use log::{error, info};
use std::time::Instant;
use uuid::Uuid;

/// One structured document and its numbering state.
///
/// The document is the single owner of the catalog; every list resolves
/// through it at read time. `&mut` access serializes all allocation.
pub struct Document<S: CatalogStore> {
    doc_id: Uuid,
    store: S,
    catalog: Option<NumberingCatalog>,
}

impl<S: CatalogStore> Document<S> {
    /// Creates a document handle over `store` without touching storage.
    pub fn new(store: S) -> Self {
        Self {
            doc_id: Uuid::new_v4(),
            store,
            catalog: None,
        }
    }

    /// Stable id correlating this document's log events.
    pub fn doc_id(&self) -> Uuid {
        self.doc_id
    }

    /// Returns the materialized catalog, loading or creating it on first
    /// call.
    ///
    /// Idempotent: subsequent calls return the same catalog without storage
    /// I/O. This is the only operation in the crate that reads external
    /// storage.
    ///
    /// # Errors
    /// - `CatalogError::Storage` when a persisted catalog exists but cannot
    ///   be read.
    /// - `CatalogError::Malformed` when persisted bytes do not parse.
    /// - Integrity errors when persisted records collide or dangle.
    pub fn ensure_catalog(&mut self) -> CatalogResult<&mut NumberingCatalog> {
        let catalog = match self.catalog.take() {
            Some(catalog) => catalog,
            None => self.open_catalog()?,
        };
        Ok(self.catalog.insert(catalog))
    }

    /// Catalog access without triggering materialization.
    pub fn catalog(&self) -> Option<&NumberingCatalog> {
        self.catalog.as_ref()
    }

    /// Mutable catalog access without triggering materialization.
    pub fn catalog_mut(&mut self) -> Option<&mut NumberingCatalog> {
        self.catalog.as_mut()
    }

    /// Serializes the materialized catalog through the storage seam.
    ///
    /// # Errors
    /// - `CatalogError::NotMaterialized` before the first `ensure_catalog`.
    /// - `CatalogError::Storage` when the store rejects the write.
    pub fn save_catalog(&mut self) -> CatalogResult<()> {
        let catalog = self.catalog.as_ref().ok_or(CatalogError::NotMaterialized)?;
        let bytes = catalog.to_bytes()?;

        match self.store.write_catalog(&bytes) {
            Ok(()) => {
                info!(
                    "event=catalog_save module=document status=ok doc={} bytes={}",
                    self.doc_id,
                    bytes.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=catalog_save module=document status=error doc={} error={err}",
                    self.doc_id
                );
                Err(err.into())
            }
        }
    }

    /// Consumes the document and returns its store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn open_catalog(&self) -> CatalogResult<NumberingCatalog> {
        let started_at = Instant::now();
        let mode = if self.store.catalog_exists() {
            "load"
        } else {
            "create"
        };
        info!(
            "event=catalog_open module=document status=start doc={} mode={mode}",
            self.doc_id
        );

        let result = if self.store.catalog_exists() {
            self.store
                .read_catalog()
                .map_err(CatalogError::from)
                .and_then(|bytes| NumberingCatalog::from_bytes(&bytes))
        } else {
            Ok(NumberingCatalog::new())
        };

        match result {
            Ok(catalog) => {
                info!(
                    "event=catalog_open module=document status=ok doc={} mode={mode} duration_ms={} instances={} templates={}",
                    self.doc_id,
                    started_at.elapsed().as_millis(),
                    catalog.instances().len(),
                    catalog.templates().len()
                );
                Ok(catalog)
            }
            Err(err) => {
                error!(
                    "event=catalog_open module=document status=error doc={} mode={mode} duration_ms={} error={err}",
                    self.doc_id,
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }
}
