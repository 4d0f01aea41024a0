use super::*;

#[test]
fn normalize_lowercases_and_strips_punctuation() {
    assert_eq!(
        normalize_name("Gaming Mouse X (RGB) — 2024!"),
        "gaming mouse x rgb 2024"
    );
}

#[test]
fn normalize_keeps_plus_and_digits() {
    assert_eq!(normalize_name("USB-C+ Hub 4K"), "usb c+ hub 4k");
}

#[test]
fn normalize_collapses_whitespace_and_trims() {
    assert_eq!(normalize_name("  a   b\t c  "), "a b c");
}

#[test]
fn normalize_is_idempotent() {
    for s in [
        "Gaming Mouse X",
        "  Weird -- input !! 99 ",
        "عربي mixed النص Text",
        "",
        "++--++",
    ] {
        let once = normalize_name(s);
        assert_eq!(normalize_name(&once), once, "not idempotent for {s:?}");
    }
}

#[test]
fn normalize_empty_input_yields_empty() {
    assert_eq!(normalize_name(""), "");
    assert_eq!(normalize_name("!!!"), "");
}

#[test]
fn fingerprint_is_deterministic() {
    let a = fingerprint("shop.example", "Gaming Mouse X", "https://shop.example/products/a");
    let b = fingerprint("shop.example", "Gaming Mouse X", "https://shop.example/products/a");
    assert_eq!(a, b);
    assert_eq!(a.len(), 12);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn fingerprint_normalizes_name_before_hashing() {
    let a = fingerprint("s", "Gaming  Mouse X!", "https://s/p");
    let b = fingerprint("s", "gaming mouse x", "https://s/p");
    assert_eq!(a, b);
}

#[test]
fn fingerprint_differs_across_inputs() {
    let base = fingerprint("s", "name", "https://s/p");
    assert_ne!(base, fingerprint("other", "name", "https://s/p"));
    assert_ne!(base, fingerprint("s", "other", "https://s/p"));
    assert_ne!(base, fingerprint("s", "name", "https://s/q"));
}
