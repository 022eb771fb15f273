use super::*;

#[test]
fn renders_page_size_and_sort() {
    let q = ListQuery::new(0, 10, "name,asc");
    assert_eq!(q.to_query(), "?page=0&size=10&sort=name,asc");
}

#[test]
fn filters_render_in_insertion_order() {
    let q = ListQuery::new(1, 20, "expenseDate,desc")
        .filter("startDate", "2024-01-01")
        .filter("categoryId", "4");
    assert_eq!(
        q.to_query(),
        "?page=1&size=20&sort=expenseDate,desc&startDate=2024-01-01&categoryId=4"
    );
}

#[test]
fn blank_optional_filters_are_omitted() {
    let q = ListQuery::new(0, 10, "expenseDate,desc")
        .filter_opt("startDate", Some(String::new()))
        .filter_opt("endDate", Some("  ".to_owned()))
        .filter_opt("categoryId", None);
    assert_eq!(q.to_query(), "?page=0&size=10&sort=expenseDate,desc");
}

#[test]
fn present_optional_filters_are_kept() {
    let q = ListQuery::new(0, 10, "expenseDate,desc")
        .filter_opt("endDate", Some("2024-02-29".to_owned()));
    assert_eq!(
        q.to_query(),
        "?page=0&size=10&sort=expenseDate,desc&endDate=2024-02-29"
    );
}

#[test]
fn same_inputs_render_identically() {
    let a = ListQuery::new(2, 50, "name,asc").filter("type", "EXPENSE");
    let b = ListQuery::new(2, 50, "name,asc").filter("type", "EXPENSE");
    assert_eq!(a, b);
    assert_eq!(a.to_query(), b.to_query());
}
