//! Modal-local drafts of records being created or edited.
//!
//! A draft is a plain copy owned by one modal instance. It holds field text
//! exactly as shown in the inputs; numeric text only changes when the new
//! text passes the field grammar in [`inventory::input`].

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use chrono::NaiveDate;
use inventory::input::{accept_mass, accept_quantity, mass_text, quantity_text};
use inventory::model::InvalidRecord;
use inventory::{Chemical, ChemicalFields, HazardType, Material, MaterialFields};

/// Editable copy of a material.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaterialDraft {
    pub name: String,
    pub quantity_text: String,
}

impl MaterialDraft {
    #[must_use]
    pub fn from_material(material: &Material) -> Self {
        Self { name: material.name.clone(), quantity_text: quantity_text(material.quantity) }
    }

    /// Apply a keystroke to the quantity field. Returns `false` when the text
    /// was rejected and the previous text kept.
    pub fn input_quantity(&mut self, raw: &str) -> bool {
        if accept_quantity(raw).is_none() {
            return false;
        }
        raw.clone_into(&mut self.quantity_text);
        true
    }

    /// Quantity as submitted; an empty field is zero.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        accept_quantity(&self.quantity_text).unwrap_or(0)
    }

    /// Fields to send, or the invariant the draft breaks.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecord`] when the name is blank.
    pub fn fields(&self) -> Result<MaterialFields, InvalidRecord> {
        MaterialFields { name: self.name.clone(), quantity: self.quantity() }.validated()
    }
}

/// Editable copy of a chemical.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChemicalDraft {
    pub chemical_name: String,
    pub brand_name: String,
    pub mass_text: String,
    pub hazard_type: Option<HazardType>,
    /// `YYYY-MM-DD` as produced by a date input, or empty.
    pub expiration_date: String,
    pub location: String,
}

impl ChemicalDraft {
    #[must_use]
    pub fn from_chemical(chemical: &Chemical) -> Self {
        Self {
            chemical_name: chemical.chemical_name.clone(),
            brand_name: chemical.brand_name.clone(),
            mass_text: mass_text(chemical.mass),
            hazard_type: chemical.hazard_type,
            expiration_date: chemical
                .expiration_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            location: chemical.location.clone().unwrap_or_default(),
        }
    }

    /// Apply a keystroke to the mass field. Returns `false` when the text was
    /// rejected and the previous text kept.
    pub fn input_mass(&mut self, raw: &str) -> bool {
        if accept_mass(raw).is_none() {
            return false;
        }
        raw.clone_into(&mut self.mass_text);
        true
    }

    /// Mass as submitted; an empty field is zero.
    #[must_use]
    pub fn mass(&self) -> f64 {
        accept_mass(&self.mass_text).unwrap_or(0.0)
    }

    /// Set the hazard from a select value; the empty option means unset.
    pub fn select_hazard(&mut self, value: &str) {
        self.hazard_type = value.parse::<HazardType>().ok();
    }

    /// Fields to send, or the invariant the draft breaks.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecord`] when the chemical name is blank.
    pub fn fields(&self) -> Result<ChemicalFields, InvalidRecord> {
        ChemicalFields {
            chemical_name: self.chemical_name.clone(),
            brand_name: self.brand_name.clone(),
            mass: self.mass(),
            hazard_type: self.hazard_type,
            expiration_date: self.expiration_date.trim().parse::<NaiveDate>().ok(),
            location: Some(self.location.clone()),
        }
        .validated()
    }
}

/// Select value for an optional hazard (`""` when unset).
#[must_use]
pub fn hazard_select_value(hazard: Option<HazardType>) -> &'static str {
    hazard.map_or("", HazardType::label)
}
