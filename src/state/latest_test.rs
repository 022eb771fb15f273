use super::*;

#[test]
fn issued_ticket_is_current() {
    let mut latest = Latest::default();
    let ticket = latest.issue();
    assert!(latest.is_current(ticket));
}

#[test]
fn newer_ticket_supersedes_older() {
    let mut latest = Latest::default();
    let first = latest.issue();
    let second = latest.issue();
    assert!(!latest.is_current(first));
    assert!(latest.is_current(second));
}

#[test]
fn interleaved_responses_only_apply_newest() {
    let mut latest = Latest::default();
    let a = latest.issue();
    let b = latest.issue();
    let c = latest.issue();

    // Responses arrive out of order: b, c, a.
    assert!(!latest.is_current(b));
    assert!(latest.is_current(c));
    assert!(!latest.is_current(a));
}
