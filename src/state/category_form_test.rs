use super::*;
use crate::net::types::{Category, CategoryType};

fn category() -> Category {
    Category {
        id: 4,
        name: "Groceries".to_owned(),
        description: Some("Food and household".to_owned()),
        icon_name: None,
        color_code: Some("#22c55e".to_owned()),
        is_active: Some(true),
        category_type: CategoryType::Expense,
    }
}

#[test]
fn default_draft_is_create_mode_expense() {
    let draft = CategoryDraft::default();
    assert!(!draft.is_editing());
    assert_eq!(draft.category_type, CategoryType::Expense);
}

#[test]
fn edit_mirrors_the_selected_record() {
    let draft = CategoryDraft::edit(&category());
    assert!(draft.is_editing());
    assert_eq!(draft.id, Some(4));
    assert_eq!(draft.name, "Groceries");
    assert_eq!(draft.description, "Food and household");
    assert_eq!(draft.icon_name, "");
    assert_eq!(draft.color_code, "#22c55e");
}

#[test]
fn blank_name_fails_validation() {
    let draft = CategoryDraft {
        name: "   ".to_owned(),
        ..CategoryDraft::default()
    };
    assert_eq!(draft.validate(), Err("Name is required".to_owned()));
}

#[test]
fn valid_draft_builds_payload_with_trimmed_fields() {
    let draft = CategoryDraft {
        name: "  Rent  ".to_owned(),
        description: String::new(),
        color_code: " #888 ".to_owned(),
        ..CategoryDraft::default()
    };
    let payload = draft.validate().expect("payload");
    assert_eq!(payload.name, "Rent");
    assert_eq!(payload.description, None);
    assert_eq!(payload.color_code.as_deref(), Some("#888"));
    assert_eq!(payload.category_type, CategoryType::Expense);
}

#[test]
fn reset_returns_to_create_mode() {
    let edited = CategoryDraft::edit(&category());
    assert!(edited.is_editing());

    let reset = CategoryDraft::default();
    assert!(!reset.is_editing());
    assert!(reset.name.is_empty());
    assert_eq!(reset.category_type, CategoryType::Expense);
}
