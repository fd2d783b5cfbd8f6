use scribe_core::{
    Document, InstanceId, List, ListError, ListParagraph, MemoryCatalogStore, StyleKind,
    TemplateId,
};

#[derive(Debug, Clone)]
struct FakeParagraph {
    list_item: bool,
    instance_id: Option<InstanceId>,
}

impl ListParagraph for FakeParagraph {
    fn is_list_item(&self) -> bool {
        self.list_item
    }

    fn numbering_instance_id(&self) -> Option<InstanceId> {
        self.instance_id
    }
}

#[test]
fn first_member_binds_the_list() {
    let mut list = List::new();
    assert_eq!(list.bound_instance_id(), None);

    list.add_item(list_item(4)).unwrap();

    assert_eq!(list.bound_instance_id(), Some(InstanceId(4)));
    assert_eq!(list.len(), 1);
    assert_eq!(list.style_kind(), None);
}

#[test]
fn every_member_declares_the_bound_id() {
    let mut list = List::new();
    list.add_item(list_item(2)).unwrap();
    list.add_item(list_item(2)).unwrap();
    list.add_item(list_item(2)).unwrap();

    let bound = list.bound_instance_id().unwrap();
    for member in list.members() {
        assert_eq!(member.numbering_instance_id(), Some(bound));
    }
}

#[test]
fn non_list_paragraphs_are_always_rejected() {
    let mut list = List::new();

    assert!(!list.can_accept(&plain_text()));
    let err = list.add_item(plain_text()).unwrap_err();
    match err {
        ListError::IncompatibleItem => {}
        other => panic!("unexpected error: {other}"),
    }
    assert!(list.is_empty());
    assert_eq!(list.bound_instance_id(), None);
}

#[test]
fn mismatched_instance_id_is_rejected_once_bound() {
    let mut list = List::new();
    list.add_item(list_item(1)).unwrap();

    assert!(!list.can_accept(&list_item(2)));
    let err = list.add_item(list_item(2)).unwrap_err();
    match err {
        ListError::IncompatibleItem => {}
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(list.len(), 1);
}

#[test]
fn list_item_without_declared_id_is_rejected() {
    let mut list: List<FakeParagraph> = List::new();
    let broken = FakeParagraph {
        list_item: true,
        instance_id: None,
    };

    assert!(!list.can_accept(&broken));
    assert!(matches!(
        list.add_item(broken),
        Err(ListError::IncompatibleItem)
    ));
}

#[test]
fn can_accept_has_no_side_effects() {
    let list: List<FakeParagraph> = List::new();

    assert!(list.can_accept(&list_item(9)));
    assert_eq!(list.bound_instance_id(), None);
    assert!(list.is_empty());
}

#[test]
fn minting_binds_and_records_style_and_level() {
    let mut document = Document::new(MemoryCatalogStore::new());
    let mut list: List<FakeParagraph> = List::new();

    let instance_id = list
        .mint_new_definition(&mut document, StyleKind::Bulleted, 2)
        .unwrap();

    assert_eq!(instance_id, InstanceId(1));
    assert_eq!(list.bound_instance_id(), Some(instance_id));
    assert_eq!(list.style_kind(), Some(StyleKind::Bulleted));
    assert_eq!(list.item_level(), 2);
}

#[test]
fn minting_twice_on_one_list_is_rejected() {
    let mut document = Document::new(MemoryCatalogStore::new());
    let mut list: List<FakeParagraph> = List::new();
    let first = list
        .mint_new_definition(&mut document, StyleKind::Numbered, 0)
        .unwrap();

    let err = list
        .mint_new_definition(&mut document, StyleKind::Bulleted, 0)
        .unwrap_err();
    match err {
        ListError::AlreadyBound(id) => assert_eq!(id, first),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn minting_on_a_member_bound_list_is_rejected() {
    let mut document = Document::new(MemoryCatalogStore::new());
    let mut list = List::new();
    list.add_item(list_item(3)).unwrap();

    let err = list
        .mint_new_definition(&mut document, StyleKind::Numbered, 0)
        .unwrap_err();
    match err {
        ListError::AlreadyBound(id) => assert_eq!(id, InstanceId(3)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn resolving_an_unbound_list_fails() {
    let mut document = Document::new(MemoryCatalogStore::new());
    let list: List<FakeParagraph> = List::new();

    let err = list.resolve_template(&mut document).unwrap_err();
    match err {
        ListError::NotBound => {}
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn resolving_a_minted_list_returns_its_template() {
    let mut document = Document::new(MemoryCatalogStore::new());
    let mut list: List<FakeParagraph> = List::new();
    list.mint_new_definition(&mut document, StyleKind::Numbered, 0)
        .unwrap();

    let template = list.resolve_template(&mut document).unwrap();
    assert_eq!(template.template_id, TemplateId(0));
    assert_eq!(template.style_kind, StyleKind::Numbered);
}

#[test]
fn two_lists_in_one_document_mint_distinct_definitions() {
    let mut document = Document::new(MemoryCatalogStore::new());

    let mut first: List<FakeParagraph> = List::new();
    let first_id = first
        .mint_new_definition(&mut document, StyleKind::Numbered, 0)
        .unwrap();
    assert_eq!(first_id, InstanceId(1));

    let mut second: List<FakeParagraph> = List::new();
    let second_id = second
        .mint_new_definition(&mut document, StyleKind::Bulleted, 0)
        .unwrap();
    assert_eq!(second_id, InstanceId(2));

    let catalog = document.ensure_catalog().unwrap();
    assert_eq!(
        catalog.resolve_template(first_id).unwrap().template_id,
        TemplateId(0)
    );
    assert_eq!(
        catalog.resolve_template(second_id).unwrap().template_id,
        TemplateId(1)
    );

    // The paragraph declaring the first id belongs to the first list only.
    let member = list_item(1);
    assert!(first.can_accept(&member));
    assert!(!second.can_accept(&member));
    first.add_item(member).unwrap();
    match second.add_item(list_item(1)).unwrap_err() {
        ListError::IncompatibleItem => {}
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn lists_can_hold_borrowed_paragraphs() {
    let paragraphs = [list_item(5), list_item(5)];
    let mut list: List<&FakeParagraph> = List::new();

    for paragraph in &paragraphs {
        list.add_item(paragraph).unwrap();
    }

    assert_eq!(list.len(), 2);
    assert_eq!(list.bound_instance_id(), Some(InstanceId(5)));
}

fn list_item(id: u32) -> FakeParagraph {
    FakeParagraph {
        list_item: true,
        instance_id: Some(InstanceId(id)),
    }
}

fn plain_text() -> FakeParagraph {
    FakeParagraph {
        list_item: false,
        instance_id: None,
    }
}
