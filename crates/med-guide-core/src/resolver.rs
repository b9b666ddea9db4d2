use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::guidance::GuidanceTable;
use crate::model::GuidanceRecord;

/// Which resolution step produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// An emergency trigger was selected.
    Emergency,
    /// The selection equals a declared symptom combination.
    Composite,
    /// The first selected symptom has its own entry.
    Direct,
    /// The first selected symptom has no entry.
    GeneralFallback,
    /// Nothing was selected; only free text was given.
    CustomFallback,
}

/// A resolved record together with the step that chose it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub record: &'a GuidanceRecord,
    pub rule: MatchRule,
}

/// Maps a symptom selection onto a single guidance record.
///
/// Steps run in fixed order and the first hit wins:
/// 1. emergency triggers, in trigger priority order
/// 2. composite rules, by exact set equality
/// 3. direct lookup of the first selected symptom, falling back to "General Symptoms"
/// 4. "Custom Symptoms" when the selection is empty
///
/// Free text is accepted but never inspected. Callers must not pass an empty
/// selection together with empty text; the result is still well-formed, just meaningless.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'t> {
    table: &'t GuidanceTable,
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(GuidanceTable::builtin())
    }
}

impl<'t> Resolver<'t> {
    pub fn new(table: &'t GuidanceTable) -> Self {
        Self { table }
    }

    pub fn resolve<S: AsRef<str>>(&self, selected: &[S], _free_text: &str) -> Resolution<'t> {
        let table = self.table;

        let trigger = table
            .emergency_triggers()
            .iter()
            .find(|trigger| selected.iter().any(|s| s.as_ref() == trigger.as_str()))
            .and_then(|trigger| table.get(trigger));
        if let Some(record) = trigger {
            return Resolution {
                record,
                rule: MatchRule::Emergency,
            };
        }

        if let Some(composite) = table.composites().iter().find(|c| c.matches(selected)) {
            return Resolution {
                record: &composite.record,
                rule: MatchRule::Composite,
            };
        }

        match selected.first() {
            Some(primary) => match table.get(primary.as_ref()) {
                Some(record) => Resolution {
                    record,
                    rule: MatchRule::Direct,
                },
                None => Resolution {
                    record: table.general_fallback(),
                    rule: MatchRule::GeneralFallback,
                },
            },
            None => Resolution {
                record: table.custom_fallback(),
                rule: MatchRule::CustomFallback,
            },
        }
    }
}

/// Resolve against the built-in table.
pub fn resolve_guidance<S: AsRef<str>>(selected: &[S], free_text: &str) -> &'static GuidanceRecord {
    Resolver::default().resolve(selected, free_text).record
}
