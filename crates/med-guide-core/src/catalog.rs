use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A symptom the user can pick from the symptom checker grid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Symptom {
    /// Stable identifier, e.g. "chest-pain"
    pub id: String,
    /// Display name, e.g. "Chest Pain"
    pub name: String,
    /// Specialty label shown with the symptom, e.g. "Cardiology"
    pub specialty: String,
}

const CATALOG: &[(&str, &str, &str)] = &[
    ("fever", "Fever", "General Medicine"),
    ("cough", "Cough", "Pulmonology"),
    ("headache", "Headache", "Neurology"),
    ("skin-rash", "Skin Rash", "Dermatology"),
    ("stomach-pain", "Stomach Pain", "Gastroenterology"),
    ("chest-pain", "Chest Pain", "Cardiology"),
    ("eye-irritation", "Eye Irritation", "Ophthalmology"),
    ("ear-pain", "Ear Pain", "ENT"),
    ("joint-pain", "Joint Pain", "Orthopedics"),
    ("breathing-difficulty", "Breathing Issues", "Pulmonology"),
];

fn to_symptom(&(id, name, specialty): &(&str, &str, &str)) -> Symptom {
    Symptom {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
    }
}

/// The selectable symptom set, in display order.
pub fn symptom_catalog() -> Vec<Symptom> {
    CATALOG.iter().map(to_symptom).collect()
}

/// Catalog ids, in display order.
pub fn symptom_ids() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(id, _, _)| *id)
}

/// Look up a catalog entry by id (exact match).
pub fn find_symptom(id: &str) -> Option<Symptom> {
    CATALOG
        .iter()
        .find(|(candidate, _, _)| *candidate == id)
        .map(to_symptom)
}
