//! Static guidance table for the symptom checker.
//!
//! Records are declared as `RecordSpec` constants and materialized into owned
//! `GuidanceRecord`s once, on first access to [`GuidanceTable::builtin`].
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::{GuidanceRecord, Severity};

/// Symptoms that short-circuit resolution, highest priority first.
pub const EMERGENCY_TRIGGERS: &[&str] = &["chest-pain", "breathing-difficulty"];

struct RecordSpec {
    severity: Severity,
    specialty: &'static str,
    condition: &'static str,
    description: &'static str,
    actions: &'static [&'static str],
    seek_care: &'static str,
    red_flags: &'static [&'static str],
    home_remedies: Option<&'static [&'static str]>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl RecordSpec {
    fn to_record(&self) -> GuidanceRecord {
        GuidanceRecord {
            severity: self.severity,
            primary_specialty: self.specialty.to_string(),
            condition: self.condition.to_string(),
            description: self.description.to_string(),
            immediate_actions: owned(self.actions),
            when_to_seek_care: self.seek_care.to_string(),
            red_flags: owned(self.red_flags),
            home_remedies: self.home_remedies.map(owned),
        }
    }
}

const FEVER: RecordSpec = RecordSpec {
    severity: Severity::Moderate,
    specialty: "General Medicine",
    condition: "Fever (Pyrexia)",
    description: "Fever is your body's natural response to infection or illness. A temperature above 100.4°F (38°C) is considered fever.",
    actions: &[
        "Rest and stay hydrated with plenty of fluids",
        "Take acetaminophen or ibuprofen as directed",
        "Use cool compresses on forehead and wrists",
        "Wear light, breathable clothing",
    ],
    seek_care: "Seek medical care if fever persists for more than 3 days, reaches 103°F (39.4°C), or is accompanied by severe symptoms.",
    red_flags: &[
        "Temperature above 103°F (39.4°C)",
        "Difficulty breathing or chest pain",
        "Severe headache with neck stiffness",
        "Persistent vomiting or dehydration",
        "Confusion or altered mental state",
    ],
    home_remedies: Some(&[
        "Drink warm herbal teas (ginger, chamomile)",
        "Take lukewarm baths to reduce body temperature",
        "Eat light, easily digestible foods",
    ]),
};

const CHEST_PAIN: RecordSpec = RecordSpec {
    severity: Severity::Emergency,
    specialty: "Cardiology",
    condition: "Chest Pain",
    description: "Chest pain can range from minor muscle strain to serious heart conditions. Any chest pain should be evaluated promptly.",
    actions: &[
        "Stop all physical activity immediately",
        "Sit down and rest in a comfortable position",
        "If you have prescribed nitroglycerin, take as directed",
        "Call emergency services if pain is severe or persistent",
    ],
    seek_care: "Seek immediate emergency care for any chest pain, especially if accompanied by other cardiac symptoms.",
    red_flags: &[
        "Crushing or squeezing chest pain",
        "Pain radiating to arm, jaw, or back",
        "Shortness of breath or difficulty breathing",
        "Nausea, vomiting, or cold sweats",
        "Dizziness or fainting",
    ],
    home_remedies: None,
};

const BREATHING_DIFFICULTY: RecordSpec = RecordSpec {
    severity: Severity::High,
    specialty: "Pulmonology",
    condition: "Dyspnea (Breathing Difficulty)",
    description: "Difficulty breathing can indicate various conditions from asthma to more serious respiratory or cardiac issues.",
    actions: &[
        "Sit upright in a comfortable position",
        "Loosen tight clothing around neck and chest",
        "Use prescribed inhaler if you have asthma",
        "Try slow, deep breathing exercises",
    ],
    seek_care: "Seek immediate care for sudden or severe breathing difficulty, or if symptoms worsen rapidly.",
    red_flags: &[
        "Severe shortness of breath at rest",
        "Blue lips or fingernails (cyanosis)",
        "Chest pain with breathing difficulty",
        "High fever with breathing problems",
        "Inability to speak in full sentences",
    ],
    home_remedies: None,
};

const HEADACHE: RecordSpec = RecordSpec {
    severity: Severity::Moderate,
    specialty: "Neurology",
    condition: "Headache",
    description: "Headaches can be tension-type, migraine, or secondary to other conditions. Most are benign but some require medical attention.",
    actions: &[
        "Rest in a quiet, dark room",
        "Apply cold or warm compress to head/neck",
        "Stay hydrated and avoid dehydration",
        "Take over-the-counter pain relievers as directed",
    ],
    seek_care: "Seek care for sudden severe headaches, headaches with fever, or significant change in headache pattern.",
    red_flags: &[
        "Sudden, severe \"thunderclap\" headache",
        "Headache with fever and neck stiffness",
        "Headache with vision changes or weakness",
        "Headache after head injury",
        "Progressively worsening headaches",
    ],
    home_remedies: Some(&[
        "Practice relaxation techniques and stress management",
        "Maintain regular sleep schedule",
        "Stay hydrated throughout the day",
    ]),
};

const STOMACH_PAIN: RecordSpec = RecordSpec {
    severity: Severity::Moderate,
    specialty: "Gastroenterology",
    condition: "Abdominal Pain",
    description: "Stomach pain can result from various causes including indigestion, gastritis, or more serious conditions requiring medical evaluation.",
    actions: &[
        "Avoid solid foods temporarily",
        "Sip clear fluids like water or herbal tea",
        "Apply gentle heat to the abdomen",
        "Rest in a comfortable position",
    ],
    seek_care: "Seek care for severe, persistent, or worsening abdominal pain, especially with other concerning symptoms.",
    red_flags: &[
        "Severe, constant abdominal pain",
        "Pain with vomiting blood or black stools",
        "Abdominal pain with high fever",
        "Pain with signs of dehydration",
        "Rigid, board-like abdomen",
    ],
    home_remedies: Some(&[
        "Try ginger tea for nausea",
        "Eat bland foods when ready (BRAT diet)",
        "Avoid spicy, fatty, or acidic foods",
    ]),
};

const FEVER_WITH_HEADACHE: RecordSpec = RecordSpec {
    severity: Severity::High,
    specialty: "General Medicine",
    condition: "Fever with Headache",
    description: "The combination of fever and headache may indicate various conditions from viral infections to more serious illnesses.",
    actions: &[
        "Monitor temperature regularly",
        "Stay hydrated with plenty of fluids",
        "Rest in a quiet, dark room",
        "Take acetaminophen for fever and pain relief",
    ],
    seek_care: "Seek immediate care if fever exceeds 102°F with severe headache, or if neck stiffness develops.",
    red_flags: &[
        "High fever (>102°F) with severe headache",
        "Neck stiffness or sensitivity to light",
        "Persistent vomiting",
        "Confusion or altered consciousness",
        "Skin rash with fever and headache",
    ],
    home_remedies: Some(&[
        "Apply cool compresses to forehead",
        "Drink warm herbal teas",
        "Ensure adequate rest and sleep",
    ]),
};

const GENERAL_SYMPTOMS: RecordSpec = RecordSpec {
    severity: Severity::Moderate,
    specialty: "General Medicine",
    condition: "General Symptoms",
    description: "Your symptoms require medical evaluation to determine the underlying cause and appropriate treatment.",
    actions: &[
        "Monitor your symptoms closely",
        "Rest and stay hydrated",
        "Avoid strenuous activities",
        "Keep a symptom diary",
    ],
    seek_care: "Schedule an appointment with your healthcare provider for proper evaluation.",
    red_flags: &[
        "Worsening or persistent symptoms",
        "Development of new concerning symptoms",
        "Inability to perform daily activities",
    ],
    home_remedies: None,
};

const CUSTOM_SYMPTOMS: RecordSpec = RecordSpec {
    severity: Severity::Moderate,
    specialty: "General Medicine",
    condition: "Custom Symptoms",
    description: "Based on your description, a medical professional should evaluate your symptoms to provide appropriate care.",
    actions: &[
        "Document your symptoms in detail",
        "Note when symptoms started and any triggers",
        "Monitor for any changes or worsening",
        "Maintain adequate rest and hydration",
    ],
    seek_care: "Schedule an appointment with your healthcare provider for proper evaluation of your symptoms.",
    red_flags: &[
        "Sudden worsening of symptoms",
        "Development of severe pain",
        "Signs of infection (fever, chills)",
        "Difficulty with basic functions",
    ],
    home_remedies: None,
};

const DIRECT_ENTRIES: &[(&str, &RecordSpec)] = &[
    ("fever", &FEVER),
    ("chest-pain", &CHEST_PAIN),
    ("breathing-difficulty", &BREATHING_DIFFICULTY),
    ("headache", &HEADACHE),
    ("stomach-pain", &STOMACH_PAIN),
];

const COMPOSITES: &[(&[&str], &RecordSpec)] = &[(&["fever", "headache"], &FEVER_WITH_HEADACHE)];

/// A guidance entry keyed by an exact combination of symptoms.
#[derive(Debug, Clone)]
pub struct CompositeRule {
    pub symptoms: Vec<String>,
    pub record: GuidanceRecord,
}

impl CompositeRule {
    /// Exact set equality: same members, duplicates in `selection` ignored.
    pub fn matches<S: AsRef<str>>(&self, selection: &[S]) -> bool {
        let mut selected: Vec<&str> = selection.iter().map(AsRef::as_ref).collect();
        selected.sort_unstable();
        selected.dedup();

        let mut declared: Vec<&str> = self.symptoms.iter().map(String::as_str).collect();
        declared.sort_unstable();
        declared.dedup();

        selected == declared
    }
}

/// Lookup table behind the resolver. Lookup through [`crate::Resolver`] is total.
#[derive(Debug, Clone)]
pub struct GuidanceTable {
    entries: HashMap<String, GuidanceRecord>,
    emergency_triggers: Vec<String>,
    composites: Vec<CompositeRule>,
    general_fallback: GuidanceRecord,
    custom_fallback: GuidanceRecord,
}

static BUILTIN: LazyLock<GuidanceTable> = LazyLock::new(|| GuidanceTable {
    entries: DIRECT_ENTRIES
        .iter()
        .map(|(id, spec)| ((*id).to_string(), spec.to_record()))
        .collect(),
    emergency_triggers: owned(EMERGENCY_TRIGGERS),
    composites: COMPOSITES
        .iter()
        .map(|(symptoms, spec)| CompositeRule {
            symptoms: owned(symptoms),
            record: spec.to_record(),
        })
        .collect(),
    general_fallback: GENERAL_SYMPTOMS.to_record(),
    custom_fallback: CUSTOM_SYMPTOMS.to_record(),
});

impl GuidanceTable {
    /// The MED-GUIDE table, built once for the process lifetime.
    pub fn builtin() -> &'static GuidanceTable {
        &BUILTIN
    }

    /// Direct entry for a single symptom.
    pub fn get(&self, symptom_id: &str) -> Option<&GuidanceRecord> {
        self.entries.get(symptom_id)
    }

    pub fn emergency_triggers(&self) -> &[String] {
        &self.emergency_triggers
    }

    pub fn composites(&self) -> &[CompositeRule] {
        &self.composites
    }

    pub fn general_fallback(&self) -> &GuidanceRecord {
        &self.general_fallback
    }

    pub fn custom_fallback(&self) -> &GuidanceRecord {
        &self.custom_fallback
    }

    /// Every record the table can hand out.
    pub fn records(&self) -> impl Iterator<Item = &GuidanceRecord> {
        self.entries
            .values()
            .chain(self.composites.iter().map(|c| &c.record))
            .chain([&self.general_fallback, &self.custom_fallback])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_record_is_well_formed() {
        let table = GuidanceTable::builtin();
        assert_eq!(table.records().count(), 8);
        for record in table.records() {
            assert!(record.is_well_formed(), "malformed record: {}", record.condition);
        }
    }

    #[test]
    fn emergency_triggers_have_direct_entries() {
        let table = GuidanceTable::builtin();
        for trigger in table.emergency_triggers() {
            assert!(table.get(trigger).is_some(), "missing entry for {trigger}");
        }
        assert_eq!(
            table.get("chest-pain").map(|r| r.severity),
            Some(Severity::Emergency)
        );
    }

    #[test]
    fn composite_matching_is_exact_set_equality() {
        let rule = &GuidanceTable::builtin().composites()[0];
        assert!(rule.matches(&["fever", "headache"]));
        assert!(rule.matches(&["headache", "fever", "headache"]));
        assert!(!rule.matches(&["fever"]));
        assert!(!rule.matches(&["fever", "headache", "cough"]));
    }
}
