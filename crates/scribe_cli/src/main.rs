//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `scribe_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use scribe_core::{Document, InstanceId, List, ListParagraph, MemoryCatalogStore, StyleKind};
use std::error::Error;

struct DemoParagraph {
    list_item: bool,
    instance_id: Option<InstanceId>,
}

impl ListParagraph for DemoParagraph {
    fn is_list_item(&self) -> bool {
        self.list_item
    }

    fn numbering_instance_id(&self) -> Option<InstanceId> {
        self.instance_id
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("scribe_core version={}", scribe_core::core_version());

    let mut document = Document::new(MemoryCatalogStore::new());

    let mut steps: List<DemoParagraph> = List::new();
    let steps_id = steps.mint_new_definition(&mut document, StyleKind::Numbered, 0)?;
    steps.add_item(DemoParagraph {
        list_item: true,
        instance_id: Some(steps_id),
    })?;
    steps.add_item(DemoParagraph {
        list_item: true,
        instance_id: Some(steps_id),
    })?;

    let mut notes: List<DemoParagraph> = List::new();
    let notes_id = notes.mint_new_definition(&mut document, StyleKind::Bulleted, 0)?;

    let steps_style = steps.resolve_template(&mut document)?.style_kind;
    let notes_style = notes.resolve_template(&mut document)?.style_kind;

    println!("numbered list instance={steps_id} style={steps_style} members={}", steps.len());
    println!("bulleted list instance={notes_id} style={notes_style} members={}", notes.len());

    Ok(())
}
