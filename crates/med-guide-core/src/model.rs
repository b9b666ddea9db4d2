use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Urgency of a guidance record, ordered from least to most urgent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
    Emergency,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Emergency => "emergency",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured advice shown after a symptom check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GuidanceRecord {
    /// Urgency level
    pub severity: Severity,
    /// Specialty the user should see, e.g. "Cardiology"
    pub primary_specialty: String,
    /// Display name of the condition, e.g. "Fever with Headache"
    pub condition: String,
    /// Short prose explanation
    pub description: String,
    /// What to do right now, in order
    pub immediate_actions: Vec<String>,
    /// When professional care is needed
    pub when_to_seek_care: String,
    /// Warning signs that call for emergency services, in order
    pub red_flags: Vec<String>,
    /// Optional home care tips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_remedies: Option<Vec<String>>,
}

impl GuidanceRecord {
    /// True when every field a caller renders unconditionally carries content.
    pub fn is_well_formed(&self) -> bool {
        !self.primary_specialty.is_empty()
            && !self.condition.is_empty()
            && !self.description.is_empty()
            && !self.when_to_seek_care.is_empty()
            && !self.immediate_actions.is_empty()
            && !self.red_flags.is_empty()
            && self.immediate_actions.iter().all(|a| !a.is_empty())
            && self.red_flags.iter().all(|f| !f.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_by_urgency() {
        assert!(Severity::Low < Severity::Moderate);
        assert!(Severity::Moderate < Severity::High);
        assert!(Severity::High < Severity::Emergency);
        assert_eq!(
            [Severity::High, Severity::Low, Severity::Emergency]
                .into_iter()
                .max(),
            Some(Severity::Emergency)
        );
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(Severity::Emergency.to_string(), "emergency");
        let json = serde_json::to_string(&Severity::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
    }

    #[test]
    fn home_remedies_omitted_when_absent() {
        let record = GuidanceRecord {
            severity: Severity::Low,
            primary_specialty: "General Medicine".to_string(),
            condition: "Test".to_string(),
            description: "d".to_string(),
            immediate_actions: vec!["rest".to_string()],
            when_to_seek_care: "later".to_string(),
            red_flags: vec!["worse".to_string()],
            home_remedies: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("home_remedies").is_none());
        assert!(record.is_well_formed());
    }
}
