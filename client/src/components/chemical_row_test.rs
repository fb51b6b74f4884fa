use super::*;
use chrono::NaiveDate;
use inventory::HazardType;

fn acetone() -> Chemical {
    Chemical {
        id: 7,
        chemical_name: "Acetone".to_owned(),
        brand_name: "Sigma".to_owned(),
        mass: 12.5,
        hazard_type: Some(HazardType::Flammable),
        expiration_date: NaiveDate::from_ymd_opt(2026, 1, 31),
        location: Some("Shelf A".to_owned()),
    }
}

#[test]
fn title_includes_brand_when_present() {
    assert_eq!(chemical_title(&acetone()), "Acetone (Sigma)");
    let unbranded = Chemical { brand_name: "  ".to_owned(), ..acetone() };
    assert_eq!(chemical_title(&unbranded), "Acetone");
}

#[test]
fn summary_lists_every_set_field() {
    assert_eq!(
        chemical_summary(&acetone()),
        "Available | Mass: 12.50 | Flammable | Expires: 2026-01-31 | Shelf A"
    );
}

#[test]
fn summary_skips_unset_fields_and_flags_empty_stock() {
    let bare = Chemical { mass: 0.0, hazard_type: None, expiration_date: None, location: None, ..acetone() };
    assert_eq!(chemical_summary(&bare), "Out of Stock | Mass: 0.00");
}
