use super::*;

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

#[test]
fn parses_material_add() {
    let cli = Cli::try_parse_from(["stockroom", "--base-url", "http://lab:8000", "material", "add", "--name", "Beaker", "--quantity", "5"])
        .unwrap();
    assert_eq!(cli.base_url, "http://lab:8000");
    match cli.command {
        Command::Material(MaterialCommand { command: MaterialSubcommand::Add { name, quantity } }) => {
            assert_eq!(name, "Beaker");
            assert_eq!(quantity, 5);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn rejects_quantity_outside_grammar() {
    for bad in ["-1", "2.5", "five"] {
        assert!(Cli::try_parse_from(["stockroom", "material", "add", "--name", "Beaker", "--quantity", bad]).is_err());
    }
}

#[test]
fn rejects_mass_with_three_decimals() {
    assert!(Cli::try_parse_from(["stockroom", "chemical", "add", "--name", "Acetone", "--mass", "12.345"]).is_err());
    assert!(Cli::try_parse_from(["stockroom", "chemical", "add", "--name", "Acetone", "--mass", "12.34"]).is_ok());
}

#[test]
fn parses_hazard_filter_case_insensitively() {
    let cli = Cli::try_parse_from(["stockroom", "chemical", "list", "--hazard", "health hazard"]).unwrap();
    match cli.command {
        Command::Chemical(ChemicalCommand { command: ChemicalSubcommand::List { hazard } }) => {
            assert_eq!(hazard, Some(HazardType::HealthHazard));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_add_borrower() {
    let cli = Cli::try_parse_from([
        "stockroom",
        "user",
        "add-borrower",
        "--name",
        "Ada",
        "--email",
        "ada@lab.org",
        "--username",
        "ada",
    ])
    .unwrap();
    assert!(matches!(cli.command, Command::User(UserCommand { command: UserSubcommand::AddBorrower { .. } })));
}

// =============================================================================
// EDIT MERGING
// =============================================================================

#[test]
fn material_edit_keeps_unset_fields() {
    let current = MaterialFields { name: "Beaker".to_owned(), quantity: 5 };
    let fields = edit_material_fields(current.clone(), None, Some(0)).unwrap();
    assert_eq!(fields, MaterialFields { name: "Beaker".to_owned(), quantity: 0 });
    assert_eq!(edit_material_fields(current, Some("  ".to_owned()), None), Err(InvalidRecord::EmptyField("name")));
}

#[test]
fn chemical_edit_overrides_only_given_fields() {
    let current = ChemicalFields {
        chemical_name: "Acetone".to_owned(),
        brand_name: "Sigma".to_owned(),
        mass: 12.5,
        hazard_type: Some(HazardType::Flammable),
        expiration_date: NaiveDate::from_ymd_opt(2026, 1, 31),
        location: Some("Shelf A".to_owned()),
    };
    let args = ChemicalArgs { mass: Some(3.0), location: Some("Shelf B".to_owned()), ..ChemicalArgs::default() };
    let fields = edit_chemical_fields(current.clone(), None, args).unwrap();
    assert_eq!(fields.chemical_name, "Acetone");
    assert_eq!(fields.brand_name, "Sigma");
    assert!((fields.mass - 3.0).abs() < f64::EPSILON);
    assert_eq!(fields.hazard_type, Some(HazardType::Flammable));
    assert_eq!(fields.location.as_deref(), Some("Shelf B"));
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn status_errors_keep_status_and_body() {
    let err: CliError = response::decode::<Value>(404, "missing").unwrap_err().into();
    assert!(matches!(&err, CliError::ServerError { status: 404, body } if body == "missing"));
    assert_eq!(err.to_string(), "server returned 404: missing");
}

#[test]
fn methods_map_to_reqwest() {
    assert_eq!(to_method(HttpMethod::Put), reqwest::Method::PUT);
    assert_eq!(to_method(HttpMethod::Patch), reqwest::Method::PATCH);
    assert_eq!(to_method(HttpMethod::Delete), reqwest::Method::DELETE);
}
