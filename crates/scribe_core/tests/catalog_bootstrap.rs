use scribe_core::{
    CatalogError, Document, FileCatalogStore, InstanceId, MemoryCatalogStore, StyleKind,
    TemplateId,
};

#[test]
fn fresh_store_materializes_an_empty_catalog() {
    let mut document = Document::new(MemoryCatalogStore::new());

    let catalog = document.ensure_catalog().unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.max_instance_id(), 0);
    assert_eq!(catalog.max_template_id(), None);
}

#[test]
fn ensure_catalog_is_idempotent() {
    let mut document = Document::new(MemoryCatalogStore::new());

    document
        .ensure_catalog()
        .unwrap()
        .mint_definition(StyleKind::Numbered)
        .unwrap();

    let catalog = document.ensure_catalog().unwrap();
    assert_eq!(catalog.max_instance_id(), 1);
    assert_eq!(catalog.max_template_id(), Some(TemplateId(0)));
}

#[test]
fn catalog_access_before_bootstrap_is_none() {
    let document = Document::new(MemoryCatalogStore::new());
    assert!(document.catalog().is_none());
}

#[test]
fn save_before_bootstrap_is_rejected() {
    let mut document = Document::new(MemoryCatalogStore::new());

    let err = document.save_catalog().unwrap_err();
    match err {
        CatalogError::NotMaterialized => {}
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn saved_catalog_survives_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numbering.json");

    let mut document = Document::new(FileCatalogStore::new(&path));
    let catalog = document.ensure_catalog().unwrap();
    catalog.mint_definition(StyleKind::Numbered).unwrap();
    catalog.mint_definition(StyleKind::Bulleted).unwrap();
    document.save_catalog().unwrap();

    let mut reopened = Document::new(FileCatalogStore::new(&path));
    let catalog = reopened.ensure_catalog().unwrap();
    assert_eq!(catalog.max_instance_id(), 2);
    assert_eq!(catalog.max_template_id(), Some(TemplateId(1)));
    let second = catalog.resolve_template(InstanceId(2)).unwrap();
    assert_eq!(second.style_kind, StyleKind::Bulleted);
}

#[test]
fn allocation_continues_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numbering.json");

    let mut document = Document::new(FileCatalogStore::new(&path));
    document
        .ensure_catalog()
        .unwrap()
        .mint_definition(StyleKind::Numbered)
        .unwrap();
    document.save_catalog().unwrap();

    let mut reopened = Document::new(FileCatalogStore::new(&path));
    let (instance_id, template_id) = reopened
        .ensure_catalog()
        .unwrap()
        .mint_definition(StyleKind::Bulleted)
        .unwrap();
    assert_eq!(instance_id, InstanceId(2));
    assert_eq!(template_id, TemplateId(1));
}

#[test]
fn unreadable_catalog_bytes_fail_bootstrap() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numbering.json");
    std::fs::write(&path, b"{ truncated").unwrap();

    let mut document = Document::new(FileCatalogStore::new(&path));
    let err = document.ensure_catalog().unwrap_err();
    match err {
        CatalogError::Malformed(_) => {}
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn tampered_catalog_is_rejected_on_load() {
    let tampered = serde_json::json!({
        "templates": [ { "template_id": 0, "style_kind": "bulleted", "levels": [] } ],
        "instances": [
            { "instance_id": 1, "template_id": 0 },
            { "instance_id": 1, "template_id": 0 }
        ]
    });
    let store = MemoryCatalogStore::with_bytes(tampered.to_string().into_bytes());

    let mut document = Document::new(store);
    let err = document.ensure_catalog().unwrap_err();
    match err {
        CatalogError::DuplicateInstance(id) => assert_eq!(id, InstanceId(1)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unavailable_storage_fails_bootstrap() {
    let dir = tempfile::tempdir().unwrap();
    // A directory at the catalog path: exists, but cannot be read as a document.
    let path = dir.path().join("numbering.json");
    std::fs::create_dir(&path).unwrap();

    let mut document = Document::new(FileCatalogStore::new(&path));
    let err = document.ensure_catalog().unwrap_err();
    match err {
        CatalogError::Storage(_) => {}
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failed_bootstrap_can_recover_after_the_cause_is_fixed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numbering.json");
    std::fs::write(&path, b"garbage").unwrap();

    let mut document = Document::new(FileCatalogStore::new(&path));
    assert!(document.ensure_catalog().is_err());

    std::fs::remove_file(&path).unwrap();
    let catalog = document.ensure_catalog().unwrap();
    assert!(catalog.is_empty());
}
