use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::Symptom;
use crate::chat::{QuickReply, ResponseCategory};
use crate::directory::{Doctor, Hospital, Specialty};
use crate::model::GuidanceRecord;
use crate::resolver::MatchRule;
use crate::specialists::Specialist;
use crate::topics::HealthTopic;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetGuidanceParams {
    /// Selected symptom IDs in the order they were picked, e.g. ["fever", "headache"].
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Free-text description of the symptoms. Required when no symptoms are selected.
    pub free_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChatReplyParams {
    /// The user's chat message.
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListSpecialistsParams {
    /// Specialty to list first, e.g. "Pulmonology".
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListDoctorsParams {
    /// Specialty to filter by, matched case-insensitively as a substring, e.g. "Cardiology".
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListHealthTopicsParams {
    /// Topic category, e.g. "Mental Health". Omit or pass "All" for every topic.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GuidanceResponse {
    pub guidance: GuidanceRecord,
    /// Which resolution step produced the guidance.
    pub matched_rule: MatchRule,
    /// Selected symptoms found in the catalog, in selection order.
    pub symptoms: Vec<Symptom>,
    /// Selected IDs not in the catalog.
    pub unrecognized: Vec<String>,
    /// Nearby specialists, those matching the guidance specialty first.
    pub specialists: Vec<Specialist>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChatReplyResponse {
    pub category: ResponseCategory,
    pub reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SymptomListResponse {
    pub symptoms: Vec<Symptom>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QuickRepliesResponse {
    pub greeting: String,
    pub quick_replies: Vec<QuickReply>,
    /// How many quick replies the chat screen shows.
    pub shown: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SpecialistListResponse {
    pub specialists: Vec<Specialist>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SpecialtyListResponse {
    pub specialties: Vec<Specialty>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DoctorListResponse {
    pub doctors: Vec<Doctor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HospitalListResponse {
    pub hospitals: Vec<Hospital>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthTopicListResponse {
    pub topics: Vec<HealthTopic>,
}
