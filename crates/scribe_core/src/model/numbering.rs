//! Numbering domain records.
//!
//! # Responsibility
//! - Define instance/template records and their id types.
//! - Define the style-kind vocabulary and its boundary parsing.
//!
//! # Invariants
//! - Instance ids are >= 1; `0` never identifies a real instance.
//! - Template ids start at 0.
//! - Multiple instances may reference one template; ids never the reverse.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Identifier of a numbering instance.
///
/// Paragraphs reference this id, never a template id directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Id the next allocated instance receives after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for InstanceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a numbering template, the reusable appearance definition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TemplateId(pub u32);

impl TemplateId {
    /// Id the next allocated template receives after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for TemplateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual style family a numbering template renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    /// Bullet glyphs at every indent level.
    Bulleted,
    /// Ordinal markers (decimal, letter, roman) per indent level.
    Numbered,
}

impl StyleKind {
    /// Stable lowercase name used on the wire and in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bulleted => "bulleted",
            Self::Numbered => "numbered",
        }
    }
}

impl Display for StyleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for style-kind values arriving from outside the type system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedStyleError(pub String);

impl Display for UnsupportedStyleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported list style `{}`; expected bulleted|numbered",
            self.0
        )
    }
}

impl Error for UnsupportedStyleError {}

impl FromStr for StyleKind {
    type Err = UnsupportedStyleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bulleted" => Ok(Self::Bulleted),
            "numbered" => Ok(Self::Numbered),
            other => Err(UnsupportedStyleError(other.to_string())),
        }
    }
}

/// Binding of one paragraph-visible instance id to a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingInstance {
    pub instance_id: InstanceId,
    pub template_id: TemplateId,
}

/// Reusable definition of list appearance for all indent levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberingTemplate {
    pub template_id: TemplateId,
    pub style_kind: StyleKind,
    /// Level-formatting payload. Opaque to this crate: preserved through
    /// load and save, never inspected.
    pub levels: serde_json::Value,
}
