//! Core list-numbering engine for structured documents.
//! This crate is the single source of truth for numbering invariants.
//!
//! A document owns one numbering catalog: templates describing how lists
//! look, and instances binding a usable id to one template. Paragraphs
//! reference instance ids; a [`List`] groups the paragraphs sharing one id
//! and mints fresh definitions for lists created from scratch.

pub mod catalog;
pub mod document;
pub mod list;
pub mod logging;
pub mod model;
pub mod storage;

pub use catalog::{CatalogError, CatalogResult, NumberingCatalog};
pub use document::Document;
pub use list::{List, ListBinding, ListError, ListParagraph, ListResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::numbering::{
    InstanceId, NumberingInstance, NumberingTemplate, StyleKind, TemplateId,
    UnsupportedStyleError,
};
pub use storage::{
    CatalogStore, FileCatalogStore, MemoryCatalogStore, StorageError, StorageResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
