use super::*;

#[test]
fn money_renders_two_decimal_places() {
    assert_eq!(money(1200.0), "\u{20b9} 1200.00");
    assert_eq!(money(3.5), "\u{20b9} 3.50");
}

#[test]
fn money_pads_fractional_amounts() {
    assert_eq!(money(54.2), "\u{20b9} 54.20");
}
