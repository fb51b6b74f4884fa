use super::*;

fn ethanol() -> Chemical {
    Chemical {
        id: 3,
        chemical_name: "Ethanol".to_owned(),
        brand_name: "Sigma".to_owned(),
        mass: 12.34,
        hazard_type: Some(HazardType::Flammable),
        expiration_date: NaiveDate::from_ymd_opt(2027, 3, 1),
        location: Some("Cabinet B".to_owned()),
    }
}

// =============================================================
// MaterialDraft
// =============================================================

#[test]
fn material_draft_copies_record_and_blanks_zero_quantity() {
    let draft = MaterialDraft::from_material(&Material { id: 1, name: "Flask".to_owned(), quantity: 0 });
    assert_eq!(draft.name, "Flask");
    assert_eq!(draft.quantity_text, "");
    assert_eq!(draft.quantity(), 0);
}

#[test]
fn material_draft_drops_invalid_quantity_keystrokes() {
    let mut draft = MaterialDraft::from_material(&Material { id: 1, name: "Flask".to_owned(), quantity: 4 });
    assert!(draft.input_quantity("42"));
    assert!(!draft.input_quantity("42a"));
    assert!(!draft.input_quantity("-1"));
    assert_eq!(draft.quantity_text, "42");
    assert_eq!(draft.quantity(), 42);
}

#[test]
fn cleared_quantity_saves_as_zero() {
    let material = Material { id: 1, name: "Beaker".to_owned(), quantity: 5 };
    let mut draft = MaterialDraft::from_material(&material);
    assert!(draft.input_quantity(""));
    let fields = draft.fields().expect("valid");
    assert_eq!(fields.quantity, 0);
    let committed = material.with_fields(fields);
    assert!(!inventory::InventoryRecord::is_available(&committed));
    assert_eq!(inventory::model::availability_label(false), "Out of Stock");
}

#[test]
fn material_draft_requires_name() {
    let draft = MaterialDraft { name: "  ".to_owned(), quantity_text: "3".to_owned() };
    assert!(draft.fields().is_err());
}

#[test]
fn draft_edits_do_not_touch_the_committed_record() {
    let material = Material { id: 1, name: "Beaker".to_owned(), quantity: 5 };
    let mut draft = MaterialDraft::from_material(&material);
    draft.name.push_str(" XL");
    draft.input_quantity("9");
    assert_eq!(material, Material { id: 1, name: "Beaker".to_owned(), quantity: 5 });
}

// =============================================================
// ChemicalDraft
// =============================================================

#[test]
fn chemical_draft_copies_every_field() {
    let draft = ChemicalDraft::from_chemical(&ethanol());
    assert_eq!(draft.chemical_name, "Ethanol");
    assert_eq!(draft.brand_name, "Sigma");
    assert_eq!(draft.mass_text, "12.34");
    assert_eq!(draft.hazard_type, Some(HazardType::Flammable));
    assert_eq!(draft.expiration_date, "2027-03-01");
    assert_eq!(draft.location, "Cabinet B");
}

#[test]
fn mass_with_third_decimal_is_rejected_and_prior_value_kept() {
    let mut draft = ChemicalDraft::from_chemical(&ethanol());
    assert!(!draft.input_mass("12.345"));
    assert_eq!(draft.mass_text, "12.34");
    assert!((draft.mass() - 12.34).abs() < f64::EPSILON);
}

#[test]
fn mass_accepts_partial_decimal_while_typing() {
    let mut draft = ChemicalDraft::default();
    for step in ["1", "12", "12.", "12.5"] {
        assert!(draft.input_mass(step), "{step}");
    }
    assert!((draft.mass() - 12.5).abs() < f64::EPSILON);
}

#[test]
fn cleared_mass_is_zero() {
    let mut draft = ChemicalDraft::from_chemical(&ethanol());
    assert!(draft.input_mass(""));
    assert!(draft.mass().abs() < f64::EPSILON);
}

#[test]
fn hazard_select_round_trips_through_labels() {
    let mut draft = ChemicalDraft::default();
    draft.select_hazard("Acute Toxicity");
    assert_eq!(draft.hazard_type, Some(HazardType::AcuteToxicity));
    assert_eq!(hazard_select_value(draft.hazard_type), "Acute Toxicity");
    draft.select_hazard("");
    assert_eq!(draft.hazard_type, None);
    assert_eq!(hazard_select_value(None), "");
}

#[test]
fn chemical_fields_map_blank_text_to_unset() {
    let draft = ChemicalDraft {
        chemical_name: "Water".to_owned(),
        mass_text: "1.5".to_owned(),
        ..ChemicalDraft::default()
    };
    let fields = draft.fields().expect("valid");
    assert_eq!(fields.expiration_date, None);
    assert_eq!(fields.location, None);
    assert_eq!(fields.hazard_type, None);
    assert!((fields.mass - 1.5).abs() < f64::EPSILON);
}

#[test]
fn unedited_chemical_draft_reproduces_record_fields() {
    let chemical = ethanol();
    let fields = ChemicalDraft::from_chemical(&chemical).fields().expect("valid");
    assert_eq!(chemical.with_fields(fields), chemical);
}
