//! Numbering catalog store, id allocation and wire codec.
//!
//! # Responsibility
//! - Hold the document-wide numbering templates and instances.
//! - Allocate monotonically increasing ids in both id spaces.
//! - Parse and serialize the persisted catalog document.
//!
//! # Invariants
//! - No two instances share an instance id; no two templates share a
//!   template id.
//! - Every instance's template reference resolves (verified on load).
//! - Records are append-only; ids are never reused.

pub mod blueprints;

use crate::model::numbering::{
    InstanceId, NumberingInstance, NumberingTemplate, StyleKind, TemplateId,
};
use crate::storage::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error for catalog load, allocation and lookup operations.
#[derive(Debug)]
pub enum CatalogError {
    /// Persisted storage could not be read or written.
    Storage(StorageError),
    /// Persisted bytes are not a valid catalog document.
    Malformed(String),
    /// No instance record carries the requested id.
    UnknownInstance(InstanceId),
    /// An instance references a template id with no matching template.
    DanglingTemplate {
        instance_id: InstanceId,
        template_id: TemplateId,
    },
    /// An instance record would collide on an already-allocated id.
    DuplicateInstance(InstanceId),
    /// A template record would collide on an already-allocated id.
    DuplicateTemplate(TemplateId),
    /// The catalog has not been materialized for this document yet.
    NotMaterialized,
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Malformed(message) => write!(f, "malformed catalog document: {message}"),
            Self::UnknownInstance(id) => write!(f, "unknown numbering instance: {id}"),
            Self::DanglingTemplate {
                instance_id,
                template_id,
            } => write!(
                f,
                "numbering instance {instance_id} references missing template {template_id}"
            ),
            Self::DuplicateInstance(id) => write!(f, "numbering instance id collision: {id}"),
            Self::DuplicateTemplate(id) => write!(f, "numbering template id collision: {id}"),
            Self::NotMaterialized => write!(f, "numbering catalog has not been materialized"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for CatalogError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Document-wide collection of numbering templates and instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberingCatalog {
    #[serde(default)]
    templates: Vec<NumberingTemplate>,
    #[serde(default)]
    instances: Vec<NumberingInstance>,
}

impl NumberingCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a persisted catalog document and verifies its integrity.
    ///
    /// # Errors
    /// - `CatalogError::Malformed` when the bytes do not parse.
    /// - Integrity errors when persisted records collide or dangle.
    pub fn from_bytes(bytes: &[u8]) -> CatalogResult<Self> {
        let catalog: Self = serde_json::from_slice(bytes)
            .map_err(|err| CatalogError::Malformed(err.to_string()))?;
        catalog.verify_integrity()?;
        Ok(catalog)
    }

    /// Serializes the catalog to its persisted document form.
    pub fn to_bytes(&self) -> CatalogResult<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|err| CatalogError::Malformed(err.to_string()))
    }

    /// Highest allocated instance id, or `0` when no instances exist.
    ///
    /// `0` never identifies a real instance, so `max + 1` is always the
    /// next free id. Non-decreasing: records are never removed.
    pub fn max_instance_id(&self) -> u32 {
        self.instances
            .iter()
            .map(|instance| instance.instance_id.0)
            .max()
            .unwrap_or(0)
    }

    /// Highest allocated template id, or `None` when no templates exist.
    ///
    /// Template ids start at 0, so "no templates" must stay distinguishable
    /// from "template 0 exists".
    pub fn max_template_id(&self) -> Option<TemplateId> {
        self.templates
            .iter()
            .map(|template| template.template_id)
            .max()
    }

    /// Id the next allocated instance receives.
    pub fn next_instance_id(&self) -> InstanceId {
        InstanceId(self.max_instance_id() + 1)
    }

    /// Id the next allocated template receives.
    pub fn next_template_id(&self) -> TemplateId {
        self.max_template_id().map_or(TemplateId(0), TemplateId::next)
    }

    /// Appends a template already carrying its final id.
    ///
    /// The catalog never rewrites ids: the caller stamps the record before
    /// handing it over.
    ///
    /// # Errors
    /// - `CatalogError::DuplicateTemplate` on an id collision.
    pub fn add_template(&mut self, template: NumberingTemplate) -> CatalogResult<()> {
        if self.template(template.template_id).is_some() {
            return Err(CatalogError::DuplicateTemplate(template.template_id));
        }
        self.templates.push(template);
        Ok(())
    }

    /// Appends an instance record binding `instance_id` to `template_id`.
    ///
    /// Existence of the referenced template is the caller's obligation;
    /// allocation always creates the template first.
    ///
    /// # Errors
    /// - `CatalogError::DuplicateInstance` on an id collision.
    pub fn add_instance(
        &mut self,
        instance_id: InstanceId,
        template_id: TemplateId,
    ) -> CatalogResult<()> {
        if self.instance(instance_id).is_some() {
            return Err(CatalogError::DuplicateInstance(instance_id));
        }
        self.instances.push(NumberingInstance {
            instance_id,
            template_id,
        });
        Ok(())
    }

    /// Allocates a fresh template + instance pair for `style_kind`.
    ///
    /// The stamped template is added before the instance record referencing
    /// it, so the catalog satisfies its referential invariant at every
    /// observable point. Not safe against a second writer: two racing
    /// callers would read the same maximum ids (see `List::mint_new_definition`).
    pub fn mint_definition(
        &mut self,
        style_kind: StyleKind,
    ) -> CatalogResult<(InstanceId, TemplateId)> {
        let instance_id = self.next_instance_id();
        let template_id = self.next_template_id();
        self.add_template(blueprints::stamped(style_kind, template_id))?;
        self.add_instance(instance_id, template_id)?;
        Ok((instance_id, template_id))
    }

    /// Resolves the template a paragraph-visible instance id renders with.
    ///
    /// Two-hop join: instance id -> instance record -> template record.
    ///
    /// # Errors
    /// - `CatalogError::UnknownInstance` when no instance carries the id.
    /// - `CatalogError::DanglingTemplate` when the template reference does
    ///   not resolve.
    pub fn resolve_template(&self, instance_id: InstanceId) -> CatalogResult<&NumberingTemplate> {
        let instance = self
            .instance(instance_id)
            .ok_or(CatalogError::UnknownInstance(instance_id))?;
        self.template(instance.template_id)
            .ok_or(CatalogError::DanglingTemplate {
                instance_id,
                template_id: instance.template_id,
            })
    }

    /// First instance record with `instance_id`, if any.
    pub fn instance(&self, instance_id: InstanceId) -> Option<&NumberingInstance> {
        self.instances
            .iter()
            .find(|instance| instance.instance_id == instance_id)
    }

    /// First template record with `template_id`, if any.
    pub fn template(&self, template_id: TemplateId) -> Option<&NumberingTemplate> {
        self.templates
            .iter()
            .find(|template| template.template_id == template_id)
    }

    /// All instance records in insertion order.
    pub fn instances(&self) -> &[NumberingInstance] {
        &self.instances
    }

    /// All template records in insertion order.
    pub fn templates(&self) -> &[NumberingTemplate] {
        &self.templates
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty() && self.templates.is_empty()
    }

    /// Verifies id uniqueness in both spaces and that every instance
    /// reference resolves.
    ///
    /// Run on every load; callable on demand for long-lived catalogs.
    pub fn verify_integrity(&self) -> CatalogResult<()> {
        let mut template_ids = HashSet::new();
        for template in &self.templates {
            if !template_ids.insert(template.template_id) {
                return Err(CatalogError::DuplicateTemplate(template.template_id));
            }
        }

        let mut instance_ids = HashSet::new();
        for instance in &self.instances {
            if !instance_ids.insert(instance.instance_id) {
                return Err(CatalogError::DuplicateInstance(instance.instance_id));
            }
            if !template_ids.contains(&instance.template_id) {
                return Err(CatalogError::DanglingTemplate {
                    instance_id: instance.instance_id,
                    template_id: instance.template_id,
                });
            }
        }

        Ok(())
    }
}
