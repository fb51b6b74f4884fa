use super::*;

// =============================================================
// Material
// =============================================================

#[test]
fn material_availability_follows_quantity() {
    let stocked = Material { id: 1, name: "Beaker".to_owned(), quantity: 5 };
    let empty = Material { id: 2, name: "Flask".to_owned(), quantity: 0 };
    assert!(stocked.is_available());
    assert!(!empty.is_available());
    assert_eq!(availability_label(stocked.is_available()), "Available");
    assert_eq!(availability_label(empty.is_available()), "Out of Stock");
}

#[test]
fn material_with_fields_keeps_server_id() {
    let material = Material { id: 7, name: "Pipette".to_owned(), quantity: 3 };
    let updated = material.with_fields(MaterialFields { name: "Glass pipette".to_owned(), quantity: 0 });
    assert_eq!(updated, Material { id: 7, name: "Glass pipette".to_owned(), quantity: 0 });
}

#[test]
fn material_fields_reject_blank_name() {
    let fields = MaterialFields { name: "   ".to_owned(), quantity: 2 };
    assert_eq!(fields.validated(), Err(InvalidRecord::EmptyField("name")));
}

#[test]
fn material_fields_trim_name() {
    let fields = MaterialFields { name: "  Beaker ".to_owned(), quantity: 5 }
        .validated()
        .expect("valid");
    assert_eq!(fields.name, "Beaker");
}

// =============================================================
// HazardType
// =============================================================

#[test]
fn hazard_type_serializes_to_display_label() {
    let json = serde_json::to_value(HazardType::HealthHazard).expect("serialize");
    assert_eq!(json, serde_json::json!("Health Hazard"));
}

#[test]
fn hazard_type_parses_labels_case_insensitively() {
    assert_eq!("no ghs".parse::<HazardType>(), Ok(HazardType::NoGhs));
    assert_eq!(" Acute Toxicity ".parse::<HazardType>(), Ok(HazardType::AcuteToxicity));
    assert!("Radioactive".parse::<HazardType>().is_err());
}

#[test]
fn hazard_type_labels_are_distinct() {
    let mut labels: Vec<_> = HazardType::ALL.iter().map(|h| h.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), HazardType::ALL.len());
}

// =============================================================
// Chemical
// =============================================================

#[test]
fn chemical_decodes_string_mass_and_blank_optionals() {
    let json = serde_json::json!({
        "id": 3,
        "chemical_name": "Ethanol",
        "brand_name": "Sigma",
        "mass": "12.34",
        "hazard_type": "",
        "expiration_date": "",
        "location": null
    });
    let chemical: Chemical = serde_json::from_value(json).expect("decode");
    assert_eq!(chemical.id, 3);
    assert!((chemical.mass - 12.34).abs() < f64::EPSILON);
    assert_eq!(chemical.hazard_type, None);
    assert_eq!(chemical.expiration_date, None);
    assert_eq!(chemical.location, None);
}

#[test]
fn chemical_decodes_full_record() {
    let json = serde_json::json!({
        "id": 4,
        "chemical_name": "Acetone",
        "brand_name": "Fisher",
        "mass": 250.5,
        "hazard_type": "Flammable",
        "expiration_date": "2027-03-01",
        "location": "Cabinet B"
    });
    let chemical: Chemical = serde_json::from_value(json).expect("decode");
    assert_eq!(chemical.hazard_type, Some(HazardType::Flammable));
    assert_eq!(chemical.expiration_date, NaiveDate::from_ymd_opt(2027, 3, 1));
    assert_eq!(chemical.location.as_deref(), Some("Cabinet B"));
    assert!(chemical.is_available());
}

#[test]
fn chemical_missing_brand_defaults_to_empty() {
    let json = serde_json::json!({ "id": 5, "chemical_name": "Water", "mass": 0 });
    let chemical: Chemical = serde_json::from_value(json).expect("decode");
    assert_eq!(chemical.brand_name, "");
    assert!(!chemical.is_available());
}

#[test]
fn chemical_rejects_negative_mass() {
    let json = serde_json::json!({ "id": 5, "chemical_name": "Water", "mass": -1.0 });
    assert!(serde_json::from_value::<Chemical>(json).is_err());
}

#[test]
fn chemical_rejects_unknown_hazard() {
    let json = serde_json::json!({ "id": 5, "chemical_name": "X", "mass": 1, "hazard_type": "Cursed" });
    assert!(serde_json::from_value::<Chemical>(json).is_err());
}

#[test]
fn chemical_fields_validation_normalizes_location() {
    let fields = ChemicalFields {
        chemical_name: " Ethanol ".to_owned(),
        brand_name: " Sigma ".to_owned(),
        mass: 1.5,
        location: Some("   ".to_owned()),
        ..ChemicalFields::default()
    }
    .validated()
    .expect("valid");
    assert_eq!(fields.chemical_name, "Ethanol");
    assert_eq!(fields.brand_name, "Sigma");
    assert_eq!(fields.location, None);
}

#[test]
fn chemical_fields_reject_blank_name() {
    let fields = ChemicalFields { chemical_name: String::new(), ..ChemicalFields::default() };
    assert_eq!(fields.validated(), Err(InvalidRecord::EmptyField("chemical_name")));
}

// =============================================================
// Users
// =============================================================

#[test]
fn user_display_name_falls_back_through_fields() {
    let mut user = User { id: 9, name: None, email: Some("a@lab.edu".to_owned()), username: None, user_type: None };
    assert_eq!(user.display_name(), "a@lab.edu");
    user.username = Some("alice".to_owned());
    assert_eq!(user.display_name(), "alice");
    user.name = Some("Alice".to_owned());
    assert_eq!(user.display_name(), "Alice");
}

#[test]
fn user_display_name_uses_id_when_blank() {
    let user = User { id: 9, name: Some(" ".to_owned()), email: None, username: None, user_type: None };
    assert_eq!(user.display_name(), "#9");
}

#[test]
fn new_borrower_requires_every_field() {
    let borrower = NewBorrower { name: "Ann".to_owned(), email: " ".to_owned(), username: "ann".to_owned() };
    assert_eq!(borrower.validated(), Err(InvalidRecord::EmptyField("email")));
}
