//! Canned-reply selector for the health assistant chat.
//!
//! Input text is matched against keyword rules in declared order. The first rule
//! with a substring hit picks the category, and a [`Picker`] chooses one reply
//! from that category's bucket. Rule order breaks ties between categories.
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::picker::{Picker, RngPicker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseCategory {
    Headache,
    Fever,
    Nausea,
    Chest,
    Breathing,
    Skin,
    General,
}

impl ResponseCategory {
    pub const ALL: [ResponseCategory; 7] = [
        ResponseCategory::Headache,
        ResponseCategory::Fever,
        ResponseCategory::Nausea,
        ResponseCategory::Chest,
        ResponseCategory::Breathing,
        ResponseCategory::Skin,
        ResponseCategory::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResponseCategory::Headache => "headache",
            ResponseCategory::Fever => "fever",
            ResponseCategory::Nausea => "nausea",
            ResponseCategory::Chest => "chest",
            ResponseCategory::Breathing => "breathing",
            ResponseCategory::Skin => "skin",
            ResponseCategory::General => "general",
        }
    }

    /// The fixed reply bucket for this category. Never empty.
    pub fn bucket(self) -> &'static [&'static str] {
        match self {
            ResponseCategory::Headache => HEADACHE_REPLIES,
            ResponseCategory::Fever => FEVER_REPLIES,
            ResponseCategory::Nausea => NAUSEA_REPLIES,
            ResponseCategory::Chest => CHEST_REPLIES,
            ResponseCategory::Breathing => BREATHING_REPLIES,
            ResponseCategory::Skin => SKIN_REPLIES,
            ResponseCategory::General => GENERAL_REPLIES,
        }
    }
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pairs a category with the substrings that select it.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub category: ResponseCategory,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    /// `lowered` must already be lower-cased.
    fn hits(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Rules in match order. `General` has no rule; it is what nothing matching means.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: ResponseCategory::Headache,
        keywords: &["headache", "head pain"],
    },
    KeywordRule {
        category: ResponseCategory::Fever,
        keywords: &["fever", "temperature"],
    },
    KeywordRule {
        category: ResponseCategory::Nausea,
        keywords: &["nausea", "sick", "stomach"],
    },
    KeywordRule {
        category: ResponseCategory::Chest,
        keywords: &["chest", "heart"],
    },
    KeywordRule {
        category: ResponseCategory::Breathing,
        keywords: &["breath", "breathing"],
    },
    KeywordRule {
        category: ResponseCategory::Skin,
        keywords: &["rash", "skin", "itch"],
    },
];

const HEADACHE_REPLIES: &[&str] = &[
    "I understand you're experiencing a headache. Can you describe the type of pain - is it throbbing, sharp, or dull?",
    "For mild headaches, try resting in a dark, quiet room and staying hydrated. If pain persists or worsens, please consult a healthcare provider.",
    "Headaches can have various causes including stress, dehydration, or tension. Have you noticed any triggers?",
];

const FEVER_REPLIES: &[&str] = &[
    "Fever can be a sign your body is fighting an infection. What's your current temperature?",
    "For fever management, stay hydrated, rest, and consider paracetamol if needed. Monitor your temperature regularly.",
    "If fever exceeds 103°F (39.4°C) or persists for more than 3 days, seek immediate medical attention.",
];

const NAUSEA_REPLIES: &[&str] = &[
    "Nausea can be uncomfortable. Are you experiencing any other symptoms like vomiting or stomach pain?",
    "Try sipping clear fluids, eating bland foods like crackers, and avoiding strong odors. Ginger can also help.",
    "If nausea persists with severe symptoms, it's important to consult a healthcare provider.",
];

const CHEST_REPLIES: &[&str] = &[
    "⚠️ Chest pain requires immediate attention. If you're experiencing severe chest pain, difficulty breathing, or pain radiating to your arm or jaw, please call emergency services immediately.",
    "For mild chest discomfort, try to remain calm and avoid physical exertion. Monitor your symptoms closely.",
    "Chest pain can have various causes. Please seek medical evaluation to determine the underlying cause.",
];

const BREATHING_REPLIES: &[&str] = &[
    "⚠️ Difficulty breathing is a serious symptom. If you're having severe trouble breathing, please seek emergency medical care immediately.",
    "Try to stay calm and sit upright. Avoid any known triggers if you have asthma or allergies.",
    "Breathing difficulties should always be evaluated by a healthcare professional.",
];

const SKIN_REPLIES: &[&str] = &[
    "Skin rashes can have many causes. Can you describe the appearance - is it red, itchy, raised, or flat?",
    "Avoid scratching the area and keep it clean and dry. Cool compresses may provide relief.",
    "If the rash spreads rapidly, is accompanied by fever, or doesn't improve, please consult a dermatologist.",
];

const GENERAL_REPLIES: &[&str] = &[
    "I'm here to help with your health concerns. Can you tell me more about your symptoms?",
    "Based on your symptoms, I can provide general guidance, but please remember that this doesn't replace professional medical advice.",
    "How long have you been experiencing these symptoms? Any other details that might be relevant?",
];

/// Opening message of every chat.
pub const GREETING: &str = "Hello! I'm your AI Health Assistant. I can help you understand your symptoms and provide general health guidance. How are you feeling today?";

/// A suggested first message offered as a button.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QuickReply {
    pub id: String,
    pub text: String,
    /// Topic label, e.g. "emergency", "digestive"
    pub category: String,
}

const QUICK_REPLIES: &[(&str, &str, &str)] = &[
    ("1", "I have a headache", "pain"),
    ("2", "Feeling nauseous", "digestive"),
    ("3", "Chest pain", "emergency"),
    ("4", "Fever symptoms", "infection"),
    ("5", "Skin rash", "dermatology"),
    ("6", "Difficulty breathing", "respiratory"),
];

/// Number of quick replies the chat screen shows.
pub const QUICK_REPLIES_SHOWN: usize = 4;

pub fn quick_replies() -> Vec<QuickReply> {
    QUICK_REPLIES
        .iter()
        .map(|(id, text, category)| QuickReply {
            id: (*id).to_string(),
            text: (*text).to_string(),
            category: (*category).to_string(),
        })
        .collect()
}

/// Category for a message: first keyword rule with a hit, else `General`.
pub fn classify(user_text: &str) -> ResponseCategory {
    let lowered = user_text.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|rule| rule.hits(&lowered))
        .map_or(ResponseCategory::General, |rule| rule.category)
}

/// Classify `user_text` and let `picker` choose a reply from the matching bucket.
pub fn select_response_with<P: Picker + ?Sized>(
    user_text: &str,
    picker: &mut P,
) -> (ResponseCategory, &'static str) {
    let category = classify(user_text);
    let bucket = category.bucket();
    // buckets are never empty; an out-of-range pick wraps
    let index = picker.pick(bucket.len()) % bucket.len();
    (category, bucket[index])
}

/// Reply using the thread-local generator.
pub fn select_chat_response(user_text: &str) -> &'static str {
    let mut picker = RngPicker::new(rand::thread_rng());
    select_response_with(user_text, &mut picker).1
}
