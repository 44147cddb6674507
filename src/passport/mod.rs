//! Emergency health passport
//!
//! A small locally stored record carrying the details first responders need:
//! name, emergency contact, blood type, and allergies. The record
//! round-trips the camelCase JSON produced by earlier versions of the
//! on-device store, so existing saved passports keep loading.

mod blood_type;
mod lifeqr;
mod store;

pub use blood_type::BloodType;
pub use lifeqr::{CardField, EmergencyCard, PatternGrid, PATTERN_SIDE};
pub use store::{PassportStore, PASSPORT_STORAGE_KEY};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MyHealthError, Result};

/// Custom deserializer for the blood type field, which older records store
/// as a plain code with the empty string meaning "not set"
fn deserialize_blood_type<'de, D>(deserializer: D) -> std::result::Result<BloodType, D::Error>
where
    D: Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    Ok(BloodType::from(code.as_str()))
}

/// Custom serializer writing the blood type back as its stored code
fn serialize_blood_type<S>(
    blood_type: &BloodType,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(blood_type.code())
}

/// Locally stored emergency health passport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Passport {
    /// Holder's full name
    pub full_name: String,
    /// Phone number of the person to call in an emergency
    pub emergency_contact: String,
    /// Blood group, `Unknown` until the holder sets it
    #[serde(
        serialize_with = "serialize_blood_type",
        deserialize_with = "deserialize_blood_type"
    )]
    pub blood_type: BloodType,
    /// Free-text allergy list
    pub allergies: String,
}

impl Default for Passport {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            emergency_contact: String::new(),
            blood_type: BloodType::Unknown,
            allergies: String::new(),
        }
    }
}

impl Passport {
    /// Creates an empty passport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels of the required fields that are still unset.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("Name");
        }
        if self.emergency_contact.trim().is_empty() {
            missing.push("Emergency Contact");
        }
        if self.blood_type == BloodType::Unknown {
            missing.push("Blood Type");
        }
        if self.allergies.trim().is_empty() {
            missing.push("Allergies");
        }
        missing
    }

    /// Whether every required field has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Checks that every required field is set, mirroring the edit form's
    /// required-field gate.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MyHealthError::ValidationError(format!(
                "passport is missing: {}",
                missing.join(", ")
            )))
        }
    }
}
