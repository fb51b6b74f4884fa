use super::*;

// =============================================================
// Quantity grammar
// =============================================================

#[test]
fn quantity_accepts_digits_and_empty() {
    assert_eq!(accept_quantity(""), Some(0));
    assert_eq!(accept_quantity("0"), Some(0));
    assert_eq!(accept_quantity("5"), Some(5));
    assert_eq!(accept_quantity("007"), Some(7));
}

#[test]
fn quantity_rejects_non_digits() {
    for raw in ["-1", "1.5", "1e3", " 4", "4 ", "abc", "+2", "٣"] {
        assert_eq!(accept_quantity(raw), None, "{raw:?} should be rejected");
    }
}

#[test]
fn quantity_rejects_values_past_u32() {
    assert_eq!(accept_quantity("4294967295"), Some(u32::MAX));
    assert_eq!(accept_quantity("4294967296"), None);
}

// =============================================================
// Mass grammar
// =============================================================

#[test]
fn mass_accepts_up_to_two_decimals() {
    assert_eq!(accept_mass(""), Some(0.0));
    assert_eq!(accept_mass("12"), Some(12.0));
    assert_eq!(accept_mass("12."), Some(12.0));
    assert_eq!(accept_mass("12.3"), Some(12.3));
    assert_eq!(accept_mass("12.34"), Some(12.34));
}

#[test]
fn mass_rejects_third_decimal_and_garbage() {
    for raw in ["12.345", ".5", "1.2.3", "-4", "1,5", "abc", "1e2", " 1"] {
        assert_eq!(accept_mass(raw), None, "{raw:?} should be rejected");
    }
}

#[test]
fn mass_text_predicate_matches_grammar() {
    assert!(is_mass_text("0"));
    assert!(is_mass_text("10.05"));
    assert!(!is_mass_text(""));
    assert!(!is_mass_text("."));
}

// =============================================================
// Display
// =============================================================

#[test]
fn zero_values_display_as_empty_fields() {
    assert_eq!(quantity_text(0), "");
    assert_eq!(mass_text(0.0), "");
}

#[test]
fn non_zero_values_display_compactly() {
    assert_eq!(quantity_text(12), "12");
    assert_eq!(mass_text(12.34), "12.34");
    assert_eq!(mass_text(12.3), "12.3");
    assert_eq!(mass_text(100.0), "100");
}

#[test]
fn format_mass_pads_two_decimals() {
    assert_eq!(format_mass(5.0), "5.00");
    assert_eq!(format_mass(1.23456), "1.23");
}
