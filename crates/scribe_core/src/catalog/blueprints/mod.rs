//! Embedded numbering-template blueprints.
//!
//! # Responsibility
//! - Ship one complete template record per style kind.
//! - Parse each embedded resource exactly once per process.
//!
//! # Invariants
//! - Blueprint ids are placeholders; allocation stamps the real id.
//! - Level payloads stay opaque and are cloned into minted templates as-is.

use crate::model::numbering::{NumberingTemplate, StyleKind, TemplateId};
use once_cell::sync::Lazy;

static BULLETED: Lazy<NumberingTemplate> = Lazy::new(|| {
    serde_json::from_str(include_str!("bulleted.json")).expect("valid bulleted blueprint")
});

static NUMBERED: Lazy<NumberingTemplate> = Lazy::new(|| {
    serde_json::from_str(include_str!("numbered.json")).expect("valid numbered blueprint")
});

/// Returns the `style_kind` blueprint stamped with its final `template_id`.
pub fn stamped(style_kind: StyleKind, template_id: TemplateId) -> NumberingTemplate {
    let blueprint = match style_kind {
        StyleKind::Bulleted => &*BULLETED,
        StyleKind::Numbered => &*NUMBERED,
    };
    let mut template = blueprint.clone();
    template.template_id = template_id;
    template
}

#[cfg(test)]
mod tests {
    use super::stamped;
    use crate::model::numbering::{StyleKind, TemplateId};

    #[test]
    fn blueprints_carry_their_own_style_kind() {
        let bulleted = stamped(StyleKind::Bulleted, TemplateId(5));
        assert_eq!(bulleted.style_kind, StyleKind::Bulleted);

        let numbered = stamped(StyleKind::Numbered, TemplateId(6));
        assert_eq!(numbered.style_kind, StyleKind::Numbered);
    }

    #[test]
    fn stamping_overwrites_the_placeholder_id() {
        let template = stamped(StyleKind::Numbered, TemplateId(42));
        assert_eq!(template.template_id, TemplateId(42));
    }

    #[test]
    fn blueprints_define_all_nine_levels() {
        for style in [StyleKind::Bulleted, StyleKind::Numbered] {
            let template = stamped(style, TemplateId(0));
            let levels = template.levels.as_array().expect("levels array");
            assert_eq!(levels.len(), 9, "style {style} should define 9 levels");
        }
    }
}
