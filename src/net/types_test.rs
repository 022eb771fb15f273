use super::*;

// =============================================================
// Deserialization from the server's camelCase JSON
// =============================================================

#[test]
fn login_response_parses_camel_case() {
    let json = serde_json::json!({
        "accessToken": "tok-9",
        "tokenType": "Bearer",
        "user": { "id": 1, "username": "asha", "email": "a@example.com", "name": "Asha" }
    });
    let resp: LoginResponse = serde_json::from_value(json).expect("login response");
    assert_eq!(resp.access_token, "tok-9");
    assert_eq!(resp.user.username, "asha");
}

#[test]
fn category_parses_with_optional_fields_missing() {
    let json = serde_json::json!({
        "id": 4,
        "name": "Groceries",
        "type": "EXPENSE"
    });
    let cat: Category = serde_json::from_value(json).expect("category");
    assert_eq!(cat.category_type, CategoryType::Expense);
    assert_eq!(cat.description, None);
    assert_eq!(cat.icon_name, None);
}

#[test]
fn category_type_uses_screaming_tokens() {
    let income: CategoryType = serde_json::from_value(serde_json::json!("INCOME")).expect("type");
    assert_eq!(income, CategoryType::Income);
    assert_eq!(CategoryType::Expense.as_str(), "EXPENSE");
}

#[test]
fn expense_parses_payment_metadata() {
    let json = serde_json::json!({
        "id": 11,
        "title": "Rent",
        "amount": 1200.0,
        "expenseDate": "2024-03-01",
        "categoryId": 2,
        "categoryName": "Housing",
        "paymentMethod": "UPI",
        "isRecurring": true,
        "recurringFrequency": "MONTHLY"
    });
    let exp: Expense = serde_json::from_value(json).expect("expense");
    assert_eq!(exp.payment_method.as_deref(), Some("UPI"));
    assert_eq!(exp.is_recurring, Some(true));
    assert_eq!(exp.recurring_frequency.as_deref(), Some("MONTHLY"));
}

#[test]
fn signup_request_omits_blank_optionals() {
    let req = SignupRequest {
        username: "asha".to_owned(),
        email: "a@example.com".to_owned(),
        password: "secret".to_owned(),
        ..SignupRequest::default()
    };
    let json = serde_json::to_value(&req).expect("json");
    assert!(json.get("firstName").is_none());
    assert!(json.get("phoneNumber").is_none());
    assert_eq!(json["username"], "asha");
}

#[test]
fn payloads_serialize_camel_case() {
    let payload = ExpensePayload {
        title: "Coffee".to_owned(),
        amount: 3.5,
        expense_date: "2024-03-10".to_owned(),
        category_id: 4,
        description: None,
    };
    let json = serde_json::to_value(&payload).expect("json");
    assert_eq!(json["expenseDate"], "2024-03-10");
    assert_eq!(json["categoryId"], 4);
    assert!(json.get("description").is_none());

    let payload = CategoryPayload {
        name: "Rent".to_owned(),
        description: None,
        icon_name: Some("home".to_owned()),
        color_code: None,
        category_type: CategoryType::Expense,
    };
    let json = serde_json::to_value(&payload).expect("json");
    assert_eq!(json["type"], "EXPENSE");
    assert_eq!(json["iconName"], "home");
}

// =============================================================
// Page metadata invariant
// =============================================================

fn page(content: usize, total_elements: i64, total_pages: i64, number: i64, size: i64) -> Page<i32> {
    Page {
        content: vec![0; content],
        total_elements,
        total_pages,
        number,
        size,
    }
}

#[test]
fn page_parses_and_is_in_bounds() {
    let json = serde_json::json!({
        "content": [],
        "totalElements": 0,
        "totalPages": 0,
        "number": 0,
        "size": 10
    });
    let p: Page<Category> = serde_json::from_value(json).expect("page");
    assert!(p.in_bounds());
}

#[test]
fn page_index_must_be_in_range_when_non_empty() {
    assert!(page(10, 25, 3, 0, 10).in_bounds());
    assert!(page(5, 25, 3, 2, 10).in_bounds());
    assert!(!page(0, 25, 3, 3, 10).in_bounds());
    assert!(!page(0, 25, 3, -1, 10).in_bounds());
}

#[test]
fn content_must_not_exceed_size() {
    assert!(!page(11, 11, 2, 0, 10).in_bounds());
}
