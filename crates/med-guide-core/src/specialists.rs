use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A doctor from the nearby-specialists directory.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Specialist {
    pub id: String,
    pub name: String,
    pub specialty: String,
    /// Patient rating out of 5
    pub rating: f32,
    /// Human-readable distance, e.g. "0.5 km"
    pub distance: String,
    /// Human-readable availability, e.g. "Available today"
    pub availability: String,
}

const DIRECTORY: &[(&str, &str, &str, f32, &str, &str)] = &[
    ("1", "Dr. Sarah Johnson", "General Medicine", 4.8, "0.5 km", "Available today"),
    ("2", "Dr. Michael Chen", "Pulmonology", 4.9, "1.2 km", "Tomorrow 10 AM"),
    ("3", "Dr. Priya Sharma", "Dermatology", 4.7, "0.8 km", "Available now"),
];

/// The whole directory. When `specialty` is given, matching doctors come first;
/// order is otherwise the directory order.
pub fn nearby_specialists(specialty: Option<&str>) -> Vec<Specialist> {
    let mut specialists: Vec<Specialist> = DIRECTORY
        .iter()
        .map(|(id, name, specialty, rating, distance, availability)| Specialist {
            id: (*id).to_string(),
            name: (*name).to_string(),
            specialty: (*specialty).to_string(),
            rating: *rating,
            distance: (*distance).to_string(),
            availability: (*availability).to_string(),
        })
        .collect();

    if let Some(wanted) = specialty.map(str::trim).filter(|s| !s.is_empty()) {
        // stable sort keeps directory order within each group
        specialists.sort_by_key(|s| !s.specialty.eq_ignore_ascii_case(wanted));
    }
    specialists
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(specialists: &[Specialist]) -> Vec<&str> {
        specialists.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn lists_whole_directory_in_order() {
        assert_eq!(ids(&nearby_specialists(None)), vec!["1", "2", "3"]);
        assert_eq!(ids(&nearby_specialists(Some("  "))), vec!["1", "2", "3"]);
    }

    #[test]
    fn matching_specialty_comes_first() {
        assert_eq!(ids(&nearby_specialists(Some("pulmonology"))), vec!["2", "1", "3"]);
        assert_eq!(ids(&nearby_specialists(Some("Dermatology"))), vec!["3", "1", "2"]);
    }

    #[test]
    fn unknown_specialty_keeps_order() {
        assert_eq!(ids(&nearby_specialists(Some("Cardiology"))), vec!["1", "2", "3"]);
    }
}
