use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppError;
use med_guide_core::catalog::{find_symptom, symptom_catalog};
use med_guide_core::chat::{quick_replies, select_response_with, GREETING, QUICK_REPLIES_SHOWN};
use med_guide_core::directory::{doctors, hospitals, specialties};
use med_guide_core::mcp_api::{
    ChatReplyParams, ChatReplyResponse, DoctorListResponse, GetGuidanceParams, GuidanceResponse,
    HealthTopicListResponse, HospitalListResponse, ListDoctorsParams, ListHealthTopicsParams,
    ListSpecialistsParams, QuickRepliesResponse, SpecialistListResponse, SpecialtyListResponse,
    SymptomListResponse,
};
use med_guide_core::picker::{Picker, RngPicker};
use med_guide_core::specialists::nearby_specialists;
use med_guide_core::topics::{health_topics, parse_topic_filter, TopicCategory, ALL_TOPICS};
use med_guide_core::Resolver;

type SharedPicker = Arc<Mutex<Box<dyn Picker + Send>>>;

#[derive(Clone)]
pub struct MedGuideServer {
    resolver: Resolver<'static>,
    picker: SharedPicker,
    tool_router: ToolRouter<MedGuideServer>,
}

impl MedGuideServer {
    pub fn new(config: &Config) -> Self {
        let picker: Box<dyn Picker + Send> = match config.reply_seed {
            Some(seed) => Box::new(RngPicker::seeded(seed)),
            None => Box::new(RngPicker::from_entropy()),
        };
        Self::with_picker(picker)
    }

    pub fn with_picker(picker: Box<dyn Picker + Send>) -> Self {
        Self {
            resolver: Resolver::default(),
            picker: Arc::new(Mutex::new(picker)),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl MedGuideServer {
    #[tool(description = "Get structured health guidance (severity, specialty, actions, red flags) for selected symptom IDs and/or a free-text description.")]
    async fn get_guidance(
        &self,
        Parameters(params): Parameters<GetGuidanceParams>,
    ) -> Result<Json<GuidanceResponse>, String> {
        let mut selected: Vec<String> = Vec::with_capacity(params.symptoms.len());
        for id in params.symptoms.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            if !selected.iter().any(|s| s == id) {
                selected.push(id.to_string());
            }
        }
        let free_text = params.free_text.as_deref().map(str::trim).unwrap_or("");
        if selected.is_empty() && free_text.is_empty() {
            return Err("symptoms or free_text must not be empty".to_string());
        }

        let resolution = self.resolver.resolve(&selected, free_text);
        let guidance = resolution.record.clone();
        info!(
            selected = selected.len(),
            free_text = !free_text.is_empty(),
            rule = ?resolution.rule,
            severity = %guidance.severity,
            "guidance resolved"
        );

        let (symptoms, unrecognized): (Vec<_>, Vec<_>) = selected
            .into_iter()
            .map(|id| find_symptom(&id).ok_or(id))
            .partition(Result::is_ok);

        Ok(Json(GuidanceResponse {
            specialists: nearby_specialists(Some(&guidance.primary_specialty)),
            matched_rule: resolution.rule,
            symptoms: symptoms.into_iter().filter_map(Result::ok).collect(),
            unrecognized: unrecognized.into_iter().filter_map(Result::err).collect(),
            guidance,
        }))
    }

    #[tool(description = "Reply to a health chat message with a canned response chosen by keyword category (headache, fever, nausea, chest, breathing, skin, general).")]
    async fn chat_reply(
        &self,
        Parameters(params): Parameters<ChatReplyParams>,
    ) -> Result<Json<ChatReplyResponse>, String> {
        let message = params.message.trim().to_string();
        if message.is_empty() {
            return Err("message must not be empty".to_string());
        }

        let (category, reply) = {
            let mut picker = self.picker.lock().await;
            select_response_with(&message, &mut **picker)
        };
        debug!(%category, "chat reply selected");

        Ok(Json(ChatReplyResponse {
            category,
            reply: reply.to_string(),
        }))
    }

    #[tool(description = "List the selectable symptoms (ID, display name, specialty) in display order.")]
    async fn list_symptoms(&self) -> Result<Json<SymptomListResponse>, String> {
        Ok(Json(SymptomListResponse {
            symptoms: symptom_catalog(),
        }))
    }

    #[tool(description = "Get the chat greeting and the suggested quick-reply messages.")]
    async fn list_quick_replies(&self) -> Result<Json<QuickRepliesResponse>, String> {
        Ok(Json(QuickRepliesResponse {
            greeting: GREETING.to_string(),
            quick_replies: quick_replies(),
            shown: QUICK_REPLIES_SHOWN,
        }))
    }

    #[tool(description = "List nearby specialists. When a specialty is given (e.g. 'Pulmonology'), matching doctors are listed first.")]
    async fn list_specialists(
        &self,
        Parameters(params): Parameters<ListSpecialistsParams>,
    ) -> Result<Json<SpecialistListResponse>, String> {
        Ok(Json(SpecialistListResponse {
            specialists: nearby_specialists(params.specialty.as_deref()),
        }))
    }

    #[tool(description = "List the specialties appointments can be booked for.")]
    async fn list_specialties(&self) -> Result<Json<SpecialtyListResponse>, String> {
        Ok(Json(SpecialtyListResponse {
            specialties: specialties(),
        }))
    }

    #[tool(description = "List doctors taking appointments, with hospital, slots, fee and languages. Optionally filter by specialty (case-insensitive, partial names match).")]
    async fn list_doctors(
        &self,
        Parameters(params): Parameters<ListDoctorsParams>,
    ) -> Result<Json<DoctorListResponse>, String> {
        let doctors = doctors(params.specialty.as_deref());
        debug!(specialty = ?params.specialty, count = doctors.len(), "doctors listed");
        Ok(Json(DoctorListResponse { doctors }))
    }

    #[tool(description = "List hospitals with address, phone, coordinates, rating and opening hours.")]
    async fn list_hospitals(&self) -> Result<Json<HospitalListResponse>, String> {
        Ok(Json(HospitalListResponse {
            hospitals: hospitals(),
        }))
    }

    #[tool(description = "List health education topics. Optionally filter by category (e.g. 'Fever', 'Mental Health'); 'All' lists every topic.")]
    async fn list_health_topics(
        &self,
        Parameters(params): Parameters<ListHealthTopicsParams>,
    ) -> Result<Json<HealthTopicListResponse>, String> {
        let category = parse_topic_filter(params.category.as_deref().unwrap_or(ALL_TOPICS))
            .map_err(AppError::from)
            .map_err(|e| {
                let available: Vec<&str> = TopicCategory::ALL.iter().map(|c| c.label()).collect();
                format!("{e}. Available categories: {ALL_TOPICS}, {}", available.join(", "))
            })?;

        Ok(Json(HealthTopicListResponse {
            topics: health_topics(category),
        }))
    }
}

#[tool_handler]
impl ServerHandler for MedGuideServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "med-guide".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "MED-GUIDE health guidance MCP server. Use list_symptoms to discover symptom IDs, \
                 get_guidance for rule-based guidance on a selection or free-text description, \
                 chat_reply for assistant chat replies, list_quick_replies for the chat greeting \
                 and suggestions, and list_specialists for nearby doctors. For appointments use \
                 list_specialties, list_doctors and list_hospitals. list_health_topics returns \
                 health education topics. Guidance is general information and does not replace \
                 professional medical advice."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use rmcp::Json;
    use rmcp::handler::server::wrapper::Parameters;

    use super::MedGuideServer;
    use crate::config::Config;
    use med_guide_core::chat::{ResponseCategory, GREETING};
    use med_guide_core::mcp_api::{
        ChatReplyParams, GetGuidanceParams, ListDoctorsParams, ListHealthTopicsParams,
        ListSpecialistsParams,
    };
    use med_guide_core::topics::TopicCategory;
    use med_guide_core::model::Severity;
    use med_guide_core::picker::ScriptedPicker;
    use med_guide_core::resolver::MatchRule;

    fn guidance_params(symptoms: &[&str], free_text: Option<&str>) -> Parameters<GetGuidanceParams> {
        Parameters(GetGuidanceParams {
            symptoms: symptoms.iter().map(|s| (*s).to_string()).collect(),
            free_text: free_text.map(str::to_string),
        })
    }

    #[test]
    fn tools_publish_output_schemas() {
        let tools = MedGuideServer::tool_router().list_all();
        for name in [
            "get_guidance",
            "chat_reply",
            "list_symptoms",
            "list_quick_replies",
            "list_specialists",
            "list_specialties",
            "list_doctors",
            "list_hospitals",
            "list_health_topics",
        ] {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("missing tool: {name}"));
            assert!(
                tool.output_schema.is_some(),
                "tool {name} should publish output_schema"
            );
        }
    }

    #[tokio::test]
    async fn get_guidance_rejects_empty_input() {
        let server = MedGuideServer::new(&Config::default());
        let err = server
            .get_guidance(guidance_params(&[" "], Some("  ")))
            .await
            .err()
            .expect("empty input should be rejected");
        assert!(err.contains("must not be empty"));
    }

    #[tokio::test]
    async fn get_guidance_reports_rule_and_symptoms() {
        let server = MedGuideServer::new(&Config::default());
        let Json(response) = server
            .get_guidance(guidance_params(&["headache", "fever", "headache", "mystery"], None))
            .await
            .unwrap();

        // duplicates collapse, but "mystery" keeps the selection off the composite
        assert_eq!(response.matched_rule, MatchRule::Direct);
        assert_eq!(response.guidance.condition, "Headache");
        let ids: Vec<&str> = response.symptoms.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["headache", "fever"]);
        assert_eq!(response.unrecognized, vec!["mystery".to_string()]);
    }

    #[tokio::test]
    async fn get_guidance_free_text_only() {
        let server = MedGuideServer::new(&Config::default());
        let Json(response) = server
            .get_guidance(guidance_params(&[], Some("tingling in my fingers")))
            .await
            .unwrap();
        assert_eq!(response.matched_rule, MatchRule::CustomFallback);
        assert_eq!(response.guidance.condition, "Custom Symptoms");
        assert_eq!(response.guidance.severity, Severity::Moderate);
    }

    #[tokio::test]
    async fn get_guidance_orders_specialists_by_specialty() {
        let server = MedGuideServer::new(&Config::default());
        let Json(response) = server
            .get_guidance(guidance_params(&["breathing-difficulty"], None))
            .await
            .unwrap();
        assert_eq!(response.guidance.primary_specialty, "Pulmonology");
        assert_eq!(
            response.specialists.first().map(|s| s.specialty.as_str()),
            Some("Pulmonology")
        );
    }

    #[tokio::test]
    async fn chat_reply_uses_shared_picker() {
        let server = MedGuideServer::with_picker(Box::new(ScriptedPicker::new([1, 2])));
        let params = || {
            Parameters(ChatReplyParams {
                message: "Fever symptoms".to_string(),
            })
        };

        let Json(first) = server.chat_reply(params()).await.unwrap();
        let Json(second) = server.clone().chat_reply(params()).await.unwrap();
        assert_eq!(first.category, ResponseCategory::Fever);
        assert_eq!(first.reply, ResponseCategory::Fever.bucket()[1]);
        assert_eq!(second.reply, ResponseCategory::Fever.bucket()[2]);
    }

    #[tokio::test]
    async fn chat_reply_rejects_blank_message() {
        let server = MedGuideServer::new(&Config::default());
        let result = server
            .chat_reply(Parameters(ChatReplyParams {
                message: "   ".to_string(),
            }))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn seeded_servers_reply_identically() {
        let config = Config {
            reply_seed: Some(9),
            ..Config::default()
        };
        let a = MedGuideServer::new(&config);
        let b = MedGuideServer::new(&config);
        for _ in 0..8 {
            let message = || {
                Parameters(ChatReplyParams {
                    message: "I feel dizzy".to_string(),
                })
            };
            let Json(left) = a.chat_reply(message()).await.unwrap();
            let Json(right) = b.chat_reply(message()).await.unwrap();
            assert_eq!(left.category, ResponseCategory::General);
            assert_eq!(left.reply, right.reply);
        }
    }

    #[tokio::test]
    async fn list_specialists_without_specialty() {
        let server = MedGuideServer::new(&Config::default());
        let Json(response) = server
            .list_specialists(Parameters(ListSpecialistsParams { specialty: None }))
            .await
            .unwrap();
        assert_eq!(response.specialists.len(), 3);
    }

    #[tokio::test]
    async fn list_symptoms_in_display_order() {
        let server = MedGuideServer::new(&Config::default());
        let Json(response) = server.list_symptoms().await.unwrap();
        let ids: Vec<&str> = response.symptoms.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(ids.first(), Some(&"fever"));
        assert_eq!(ids.last(), Some(&"breathing-difficulty"));
    }

    #[tokio::test]
    async fn list_quick_replies_includes_greeting() {
        let server = MedGuideServer::new(&Config::default());
        let Json(response) = server.list_quick_replies().await.unwrap();
        assert_eq!(response.greeting, GREETING);
        assert_eq!(response.quick_replies.len(), 6);
        assert_eq!(response.shown, 4);
        assert_eq!(response.quick_replies[0].text, "I have a headache");
    }

    #[tokio::test]
    async fn list_doctors_filters_by_specialty() {
        let server = MedGuideServer::new(&Config::default());
        let Json(response) = server
            .list_doctors(Parameters(ListDoctorsParams {
                specialty: Some("cardio".to_string()),
            }))
            .await
            .unwrap();
        let names: Vec<&str> = response.doctors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Dr. Priya Sharma"]);

        let Json(all) = server
            .list_doctors(Parameters(ListDoctorsParams { specialty: None }))
            .await
            .unwrap();
        assert_eq!(all.doctors.len(), 3);
    }

    #[tokio::test]
    async fn list_specialties_and_hospitals() {
        let server = MedGuideServer::new(&Config::default());
        let Json(specialties) = server.list_specialties().await.unwrap();
        assert_eq!(specialties.specialties.len(), 7);
        let Json(hospitals) = server.list_hospitals().await.unwrap();
        let names: Vec<&str> = hospitals.hospitals.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Apollo Hospital", "Fortis Hospital", "AIIMS Chennai"]);
    }

    #[tokio::test]
    async fn list_health_topics_filters_by_category() {
        let server = MedGuideServer::new(&Config::default());
        let params = |category: Option<&str>| {
            Parameters(ListHealthTopicsParams {
                category: category.map(str::to_string),
            })
        };

        let Json(all) = server.list_health_topics(params(None)).await.unwrap();
        assert_eq!(all.topics.len(), 8);
        let Json(also_all) = server.list_health_topics(params(Some("all"))).await.unwrap();
        assert_eq!(also_all.topics.len(), 8);

        let Json(pain) = server.list_health_topics(params(Some("Pain"))).await.unwrap();
        assert_eq!(pain.topics.len(), 2);
        assert!(pain.topics.iter().all(|t| t.category == TopicCategory::Pain));
    }

    #[tokio::test]
    async fn list_health_topics_rejects_unknown_category() {
        let server = MedGuideServer::new(&Config::default());
        let err = server
            .list_health_topics(Parameters(ListHealthTopicsParams {
                category: Some("Dental".to_string()),
            }))
            .await
            .err()
            .expect("unknown category should be rejected");
        assert!(err.starts_with("unknown topic category: Dental"));
        assert!(err.contains("Mental Health"));
    }
}
