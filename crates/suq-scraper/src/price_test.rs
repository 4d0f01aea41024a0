use super::*;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn meta_price_strips_thousands_separators() {
    assert_eq!(parse_meta_price("1,250.00"), Some(dec("1250.00")));
    assert_eq!(parse_meta_price("999"), Some(dec("999")));
}

#[test]
fn meta_price_rejects_non_numeric_strings() {
    assert_eq!(parse_meta_price("EGP 1250"), None);
    assert_eq!(parse_meta_price(""), None);
}

#[test]
fn scan_finds_plain_integer_price() {
    assert_eq!(scan_price("EGP 1250"), Some(dec("1250")));
}

#[test]
fn scan_finds_price_with_fraction() {
    assert_eq!(scan_price("Now: 1250.99 only"), Some(dec("1250.99")));
}

#[test]
fn scan_strips_thousands_separators_and_nbsp() {
    assert_eq!(scan_price("1,250.00\u{a0}EGP"), Some(dec("1250.00")));
}

#[test]
fn scan_ignores_single_digits() {
    assert_eq!(scan_price("4.5 stars"), None);
    // "4" is too short; "5" likewise.
}

#[test]
fn scan_skips_runs_longer_than_six_digits() {
    assert_eq!(scan_price("SKU 12345678"), None);
}

#[test]
fn scan_returns_first_match() {
    assert_eq!(scan_price("was 2000 now 1500"), Some(dec("2000")));
}

#[test]
fn scan_takes_integer_when_fraction_has_three_digits() {
    // ".456" is not a 2-digit fraction, so only the integer part matches.
    assert_eq!(scan_price("123.456"), Some(dec("123")));
}

#[test]
fn scan_accepts_two_digit_run_after_decimal_point() {
    // Mirrors the known heuristic quirk: "1.25" yields 25, because the
    // leading "1" is too short and "25" stands alone after the dot.
    assert_eq!(scan_price("1.25"), Some(dec("25")));
}

#[test]
fn scan_empty_and_digitless_text() {
    assert_eq!(scan_price(""), None);
    assert_eq!(scan_price("no numbers here"), None);
}
