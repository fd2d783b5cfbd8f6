//! Logical list entity and membership rules.
//!
//! # Responsibility
//! - Group paragraphs sharing one numbering-instance id.
//! - Validate membership before accepting a paragraph.
//! - Mint fresh instance/template pairs for lists created from scratch.
//!
//! # Invariants
//! - Once bound, every member's declared instance id equals the bound id.
//! - Minting never leaves the catalog with an instance whose template is
//!   absent.
//! - Lists never mutate paragraphs and never cache catalog contents.

use crate::catalog::CatalogError;
use crate::document::Document;
use crate::model::numbering::{InstanceId, NumberingTemplate, StyleKind};
use crate::storage::CatalogStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, ListError>;

/// Error for list membership and numbering operations.
#[derive(Debug)]
pub enum ListError {
    /// Paragraph is not a list item, or declares a different instance id
    /// than the one this list is bound to.
    IncompatibleItem,
    /// Operation requires the list to be bound to a numbering instance.
    NotBound,
    /// List already carries a numbering binding.
    AlreadyBound(InstanceId),
    /// Catalog-level failure.
    Catalog(CatalogError),
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompatibleItem => write!(f, "paragraph is not a compatible list item"),
            Self::NotBound => write!(f, "list is not bound to a numbering instance"),
            Self::AlreadyBound(id) => {
                write!(f, "list is already bound to numbering instance {id}")
            }
            Self::Catalog(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CatalogError> for ListError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

/// Read-only view a paragraph exposes to list management.
///
/// Implemented by the surrounding document model's paragraph type; this
/// crate only ever reads the two list-related facts and never mutates the
/// paragraph.
pub trait ListParagraph {
    /// Whether the paragraph carries list metadata at all.
    fn is_list_item(&self) -> bool;

    /// Declared numbering-instance id.
    ///
    /// Expected to be present whenever `is_list_item()` is true; a list
    /// item without an id violates the collaborator contract and is
    /// unacceptable to any list.
    fn numbering_instance_id(&self) -> Option<InstanceId>;
}

impl<T: ListParagraph + ?Sized> ListParagraph for &T {
    fn is_list_item(&self) -> bool {
        (**self).is_list_item()
    }

    fn numbering_instance_id(&self) -> Option<InstanceId> {
        (**self).numbering_instance_id()
    }
}

/// Numbering binding a list acquires from its first member or from minting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListBinding {
    /// Instance id shared by every member paragraph.
    pub instance_id: InstanceId,
    /// Known when the binding came from minting; `None` when inherited
    /// from a member paragraph.
    pub style_kind: Option<StyleKind>,
    /// Indent level new items are created at.
    pub level: u8,
}

/// One logical list: the paragraphs sharing a numbering-instance id.
///
/// A list starts unbound with no members and becomes bound either by
/// accepting its first member paragraph or by minting a fresh numbering
/// definition through the owning document.
#[derive(Debug)]
pub struct List<P: ListParagraph> {
    binding: Option<ListBinding>,
    members: Vec<P>,
}

impl<P: ListParagraph> Default for List<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ListParagraph> List<P> {
    /// Creates an unbound list with no members.
    pub fn new() -> Self {
        Self {
            binding: None,
            members: Vec::new(),
        }
    }

    /// Instance id this list is bound to, when bound.
    pub fn bound_instance_id(&self) -> Option<InstanceId> {
        self.binding.map(|binding| binding.instance_id)
    }

    /// Style kind recorded at minting time; `None` for inherited bindings.
    pub fn style_kind(&self) -> Option<StyleKind> {
        self.binding.and_then(|binding| binding.style_kind)
    }

    /// Indent level recorded at minting time; `0` otherwise.
    pub fn item_level(&self) -> u8 {
        self.binding.map_or(0, |binding| binding.level)
    }

    /// Member paragraphs in acceptance order.
    pub fn members(&self) -> &[P] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `paragraph` may join this list.
    ///
    /// Pure predicate with no side effects: true iff the paragraph is a
    /// list item with a declared instance id and either the list is unbound
    /// or the declared id equals the bound one. `add_item` re-derives the
    /// same condition instead of trusting the caller.
    pub fn can_accept(&self, paragraph: &P) -> bool {
        if !paragraph.is_list_item() {
            return false;
        }
        match (self.bound_instance_id(), paragraph.numbering_instance_id()) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(bound), Some(declared)) => bound == declared,
        }
    }

    /// Accepts `paragraph` as the next member.
    ///
    /// The first accepted member binds the list to its declared instance
    /// id; later members must declare the same id. Mutates only this list,
    /// never the paragraph or the catalog.
    ///
    /// # Errors
    /// - `ListError::IncompatibleItem` when the paragraph is not a list
    ///   item or declares a different instance id.
    pub fn add_item(&mut self, paragraph: P) -> ListResult<()> {
        if !self.can_accept(&paragraph) {
            return Err(ListError::IncompatibleItem);
        }
        let declared = paragraph
            .numbering_instance_id()
            .ok_or(ListError::IncompatibleItem)?;

        if self.binding.is_none() {
            self.binding = Some(ListBinding {
                instance_id: declared,
                style_kind: None,
                level: 0,
            });
            info!("event=list_bind module=list status=ok source=member instance_id={declared}");
        }
        self.members.push(paragraph);
        Ok(())
    }

    /// Mints a fresh numbering definition and binds this list to it.
    ///
    /// For lists with no existing paragraphs to inherit an id from. The
    /// style-specific template is created first, then the instance record
    /// referencing it, all under one mutable borrow of `document`. Callers
    /// sharing a document across threads must hold their own lock around
    /// the entire call: two racing allocations would read the same maximum
    /// ids and mint colliding definitions.
    ///
    /// # Errors
    /// - `ListError::AlreadyBound` when the list already has a binding;
    ///   re-minting would orphan the ids of existing members.
    /// - Catalog bootstrap and allocation failures via `ListError::Catalog`.
    pub fn mint_new_definition<S: CatalogStore>(
        &mut self,
        document: &mut Document<S>,
        style_kind: StyleKind,
        level: u8,
    ) -> ListResult<InstanceId> {
        if let Some(binding) = self.binding {
            return Err(ListError::AlreadyBound(binding.instance_id));
        }

        let catalog = document.ensure_catalog()?;
        let (instance_id, template_id) = catalog.mint_definition(style_kind)?;

        self.binding = Some(ListBinding {
            instance_id,
            style_kind: Some(style_kind),
            level,
        });
        info!(
            "event=list_bind module=list status=ok source=mint instance_id={instance_id} \
             template_id={template_id} style={style_kind} level={level}"
        );
        Ok(instance_id)
    }

    /// Resolves the template this list renders with.
    ///
    /// Delegates the two-hop lookup to the document's catalog,
    /// materializing it first when needed.
    ///
    /// # Errors
    /// - `ListError::NotBound` for an unbound list.
    /// - Catalog lookup failures via `ListError::Catalog`.
    pub fn resolve_template<'doc, S: CatalogStore>(
        &self,
        document: &'doc mut Document<S>,
    ) -> ListResult<&'doc NumberingTemplate> {
        let instance_id = self.bound_instance_id().ok_or(ListError::NotBound)?;
        let catalog = document.ensure_catalog()?;
        Ok(catalog.resolve_template(instance_id)?)
    }
}
