//! Keystroke-level grammar for numeric form fields.
//!
//! A field's text is replaced only when the new text matches its grammar;
//! otherwise the previous text stays. An empty field is the zero value.
//!
//! - quantity: `^\d+$` (and must fit in `u32`)
//! - mass: `^\d+(\.\d{0,2})?$`

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Decimal places kept for mass values.
pub const MASS_DECIMALS: usize = 2;

/// Whether `raw` is a complete quantity string (`^\d+$`).
#[must_use]
pub fn is_quantity_text(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `raw` is a complete mass string (`^\d+(\.\d{0,2})?$`).
#[must_use]
pub fn is_mass_text(raw: &str) -> bool {
    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (raw, None),
    };
    if !is_quantity_text(whole) {
        return false;
    }
    fraction.is_none_or(|f| f.len() <= MASS_DECIMALS && f.bytes().all(|b| b.is_ascii_digit()))
}

/// Value of a quantity field after typing `raw`, or `None` to drop the keystroke.
#[must_use]
pub fn accept_quantity(raw: &str) -> Option<u32> {
    if raw.is_empty() {
        return Some(0);
    }
    if !is_quantity_text(raw) {
        return None;
    }
    raw.parse::<u32>().ok()
}

/// Value of a mass field after typing `raw`, or `None` to drop the keystroke.
#[must_use]
pub fn accept_mass(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return Some(0.0);
    }
    if !is_mass_text(raw) {
        return None;
    }
    raw.parse::<f64>().ok().filter(|m| m.is_finite())
}

/// Field text for a stored quantity; zero shows as an empty field.
#[must_use]
pub fn quantity_text(quantity: u32) -> String {
    if quantity == 0 { String::new() } else { quantity.to_string() }
}

/// Field text for a stored mass; zero shows as an empty field and trailing
/// fractional zeros are dropped (`12.30` -> `12.3`).
#[must_use]
pub fn mass_text(mass: f64) -> String {
    if mass <= 0.0 {
        return String::new();
    }
    let fixed = format_mass(mass);
    fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Two-decimal label for a mass value.
#[must_use]
pub fn format_mass(mass: f64) -> String {
    format!("{mass:.2}")
}
