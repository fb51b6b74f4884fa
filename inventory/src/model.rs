//! Stockroom records as exchanged with the inventory REST API.
//!
//! DESIGN
//! ======
//! Each resource has a committed record type (carrying the server-assigned
//! `id`) and a `*Fields` type holding everything a client may write. Create
//! bodies are the bare fields; update bodies are the fields plus `pk`.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Behavior shared by every listable stockroom record.
pub trait InventoryRecord {
    /// Server-assigned primary key.
    fn id(&self) -> i64;

    /// Whether a borrower can currently take this record.
    fn is_available(&self) -> bool;
}

/// Row label for a record's availability.
#[must_use]
pub fn availability_label(available: bool) -> &'static str {
    if available { "Available" } else { "Out of Stock" }
}

/// Errors produced when a payload fails a record invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRecord {
    /// A required text field was empty after trimming.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

// =============================================================================
// MATERIAL
// =============================================================================

/// A piece of equipment or consumable counted in whole units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub name: String,
    pub quantity: u32,
}

impl Material {
    /// Writable fields of this record, used to seed an edit.
    #[must_use]
    pub fn fields(&self) -> MaterialFields {
        MaterialFields { name: self.name.clone(), quantity: self.quantity }
    }

    /// Committed record after a successful update with `fields`.
    #[must_use]
    pub fn with_fields(&self, fields: MaterialFields) -> Self {
        Self { id: self.id, name: fields.name, quantity: fields.quantity }
    }
}

impl InventoryRecord for Material {
    fn id(&self) -> i64 {
        self.id
    }

    fn is_available(&self) -> bool {
        self.quantity > 0
    }
}

/// Client-writable material fields (create body, or update body with `pk`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialFields {
    pub name: String,
    pub quantity: u32,
}

impl MaterialFields {
    /// Check the non-empty name invariant and trim the name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecord::EmptyField`] when the name is blank.
    pub fn validated(self) -> Result<Self, InvalidRecord> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(InvalidRecord::EmptyField("name"));
        }
        Ok(Self { name: name.to_owned(), quantity: self.quantity })
    }
}

// =============================================================================
// CHEMICAL
// =============================================================================

/// GHS hazard classes offered by the stockroom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardType {
    #[serde(rename = "No GHS")]
    NoGhs,
    #[serde(rename = "Flammable")]
    Flammable,
    #[serde(rename = "Harmful")]
    Harmful,
    #[serde(rename = "Health Hazard")]
    HealthHazard,
    #[serde(rename = "Acute Toxicity")]
    AcuteToxicity,
    #[serde(rename = "Environmental Hazard")]
    EnvironmentalHazard,
}

impl HazardType {
    /// Every hazard class in display order.
    pub const ALL: [Self; 6] = [
        Self::NoGhs,
        Self::Flammable,
        Self::Harmful,
        Self::HealthHazard,
        Self::AcuteToxicity,
        Self::EnvironmentalHazard,
    ];

    /// Wire and display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NoGhs => "No GHS",
            Self::Flammable => "Flammable",
            Self::Harmful => "Harmful",
            Self::HealthHazard => "Health Hazard",
            Self::AcuteToxicity => "Acute Toxicity",
            Self::EnvironmentalHazard => "Environmental Hazard",
        }
    }
}

impl fmt::Display for HazardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a hazard label is not one of [`HazardType::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hazard type: {0}")]
pub struct UnknownHazardType(pub String);

impl FromStr for HazardType {
    type Err = UnknownHazardType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|hazard| hazard.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownHazardType(trimmed.to_owned()))
    }
}

/// A stocked chemical measured by mass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chemical {
    pub id: i64,
    pub chemical_name: String,
    #[serde(default)]
    pub brand_name: String,
    /// Grams (or millilitres), two-decimal precision.
    #[serde(deserialize_with = "deserialize_mass")]
    pub mass: f64,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub hazard_type: Option<HazardType>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub location: Option<String>,
}

impl Chemical {
    /// Writable fields of this record, used to seed an edit.
    #[must_use]
    pub fn fields(&self) -> ChemicalFields {
        ChemicalFields {
            chemical_name: self.chemical_name.clone(),
            brand_name: self.brand_name.clone(),
            mass: self.mass,
            hazard_type: self.hazard_type,
            expiration_date: self.expiration_date,
            location: self.location.clone(),
        }
    }

    /// Committed record after a successful update with `fields`.
    #[must_use]
    pub fn with_fields(&self, fields: ChemicalFields) -> Self {
        Self {
            id: self.id,
            chemical_name: fields.chemical_name,
            brand_name: fields.brand_name,
            mass: fields.mass,
            hazard_type: fields.hazard_type,
            expiration_date: fields.expiration_date,
            location: fields.location,
        }
    }
}

impl InventoryRecord for Chemical {
    fn id(&self) -> i64 {
        self.id
    }

    fn is_available(&self) -> bool {
        self.mass > 0.0
    }
}

/// Client-writable chemical fields (create body, or update body with `pk`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChemicalFields {
    pub chemical_name: String,
    pub brand_name: String,
    pub mass: f64,
    pub hazard_type: Option<HazardType>,
    pub expiration_date: Option<NaiveDate>,
    pub location: Option<String>,
}

impl ChemicalFields {
    /// Check the non-empty name invariant and normalize text fields.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecord::EmptyField`] when the chemical name is blank.
    pub fn validated(self) -> Result<Self, InvalidRecord> {
        let chemical_name = self.chemical_name.trim().to_owned();
        if chemical_name.is_empty() {
            return Err(InvalidRecord::EmptyField("chemical_name"));
        }
        let location = self
            .location
            .map(|l| l.trim().to_owned())
            .filter(|l| !l.is_empty());
        Ok(Self {
            chemical_name,
            brand_name: self.brand_name.trim().to_owned(),
            location,
            ..self
        })
    }
}

// =============================================================================
// USERS
// =============================================================================

/// A stockroom account as listed by the user service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
}

impl User {
    /// Best available human-readable label.
    #[must_use]
    pub fn display_name(&self) -> String {
        [&self.name, &self.username, &self.email]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .map_or_else(|| format!("#{}", self.id), str::to_owned)
    }
}

/// Body for registering a borrower account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBorrower {
    pub name: String,
    pub email: String,
    pub username: String,
}

impl NewBorrower {
    /// Trim every field and require all of them.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecord::EmptyField`] naming the first blank field.
    pub fn validated(self) -> Result<Self, InvalidRecord> {
        let name = required(&self.name, "name")?;
        let email = required(&self.email, "email")?;
        let username = required(&self.username, "username")?;
        Ok(Self { name, email, username })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, InvalidRecord> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InvalidRecord::EmptyField(field));
    }
    Ok(trimmed.to_owned())
}

// =============================================================================
// WIRE TOLERANCE
// =============================================================================

/// Accept mass as a JSON number or a decimal string (`"12.34"`).
fn deserialize_mass<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawMass {
        Number(f64),
        Text(String),
    }

    let mass = match RawMass::deserialize(deserializer)? {
        RawMass::Number(n) => n,
        RawMass::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid mass: {s}")))?,
    };
    if !mass.is_finite() || mass < 0.0 {
        return Err(D::Error::custom(format!("mass must be a non-negative number, got {mass}")));
    }
    Ok(mass)
}

/// Treat `null` and blank strings as unset, parse anything else.
fn deserialize_blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(D::Error::custom),
    }
}
