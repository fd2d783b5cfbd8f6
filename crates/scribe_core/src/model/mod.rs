//! Typed domain model for document numbering state.
//!
//! # Responsibility
//! - Define the canonical records stored in the numbering catalog.
//! - Keep the instance and template id spaces distinct at the type level.
//!
//! # Invariants
//! - Every record is identified by an integer id in its own space.
//! - Level-formatting payloads are carried opaquely, never interpreted.

pub mod numbering;
