//! Health education topics from the video guidance screen.
//!
//! Each topic carries a short description and an English explainer. Listing can be
//! narrowed to one [`TopicCategory`]; the label "All" means no narrowing.
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GuideError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TopicCategory {
    Fever,
    Pain,
    Digestion,
    Skin,
    #[serde(rename = "Mental Health")]
    MentalHealth,
    Respiratory,
    Cardiovascular,
}

impl TopicCategory {
    pub const ALL: [TopicCategory; 7] = [
        TopicCategory::Fever,
        TopicCategory::Pain,
        TopicCategory::Digestion,
        TopicCategory::Skin,
        TopicCategory::MentalHealth,
        TopicCategory::Respiratory,
        TopicCategory::Cardiovascular,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TopicCategory::Fever => "Fever",
            TopicCategory::Pain => "Pain",
            TopicCategory::Digestion => "Digestion",
            TopicCategory::Skin => "Skin",
            TopicCategory::MentalHealth => "Mental Health",
            TopicCategory::Respiratory => "Respiratory",
            TopicCategory::Cardiovascular => "Cardiovascular",
        }
    }
}

impl fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TopicCategory {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TopicCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GuideError::UnknownTopicCategory(wanted.to_string()))
    }
}

/// Label that lists every category.
pub const ALL_TOPICS: &str = "All";

/// Parse a category filter. Blank or "All" (any case) means no filter.
pub fn parse_topic_filter(label: &str) -> Result<Option<TopicCategory>, GuideError> {
    let label = label.trim();
    if label.is_empty() || label.eq_ignore_ascii_case(ALL_TOPICS) {
        return Ok(None);
    }
    label.parse().map(Some)
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthTopic {
    pub id: String,
    pub title: String,
    pub category: TopicCategory,
    /// One-line summary of the visualization
    pub description: String,
    /// English explainer text
    pub content: String,
    /// Display view count, e.g. "45.2K"
    pub views: String,
}

struct TopicEntry {
    id: &'static str,
    title: &'static str,
    category: TopicCategory,
    description: &'static str,
    content: &'static str,
    views: &'static str,
}

const TOPICS: &[TopicEntry] = &[
    TopicEntry {
        id: "1",
        title: "Fever Management: Understanding Body Temperature",
        category: TopicCategory::Fever,
        description: "Interactive 3D visualization of fever and body temperature regulation mechanisms.",
        content: "Fever is your body's natural defense mechanism against infections. Normal body temperature ranges from 97°F to 99°F (36.1°C to 37.2°C). A fever is generally considered when temperature exceeds 100.4°F (38°C). For adults, fever can be managed at home with adequate rest, increased fluid intake of 8-10 glasses per day, and over-the-counter medications like acetaminophen (500-1000mg every 6 hours) or ibuprofen (400-600mg every 6-8 hours). Use lukewarm sponge baths and dress in light clothing. However, seek immediate medical attention if fever exceeds 103°F (39.4°C), persists for more than 3 days, or is accompanied by severe symptoms like difficulty breathing, chest pain, severe headache, stiff neck, confusion, persistent vomiting, or signs of dehydration.",
        views: "45.2K",
    },
    TopicEntry {
        id: "2",
        title: "Brain and Nervous System: Understanding Pain Signals",
        category: TopicCategory::Pain,
        description: "3D brain model showing how pain signals travel through the nervous system.",
        content: "Pain signals help protect your body from harm. The nervous system processes pain through specialized receptors called nociceptors. Tension headaches feel like a tight band around your head, often bilateral, and are caused by stress, poor posture, eye strain, or muscle tension. Migraines are more severe, often unilateral, throbbing pain lasting 4-72 hours. Practice stress management, gentle exercise, and consult healthcare providers for persistent pain.",
        views: "32.8K",
    },
    TopicEntry {
        id: "3",
        title: "Digestive System: 3D Journey Through Your Gut",
        category: TopicCategory::Digestion,
        description: "Interactive 3D model of the digestive system showing how food is processed.",
        content: "The digestive system processes 2-3 liters of food and liquid daily. Your gut contains trillions of beneficial bacteria that help break down food and support immune function. Maintain digestive health with 25-35g fiber daily, 8-10 glasses of water, regular meal times, and stress management. Probiotics support gut microbiome health.",
        views: "28.5K",
    },
    TopicEntry {
        id: "4",
        title: "Skin Health Fundamentals: Care, Conditions, and Prevention",
        category: TopicCategory::Skin,
        description: "Essential skincare knowledge covering daily routines, common skin conditions, and when to consult a dermatologist.",
        content: "Healthy skin requires consistent care and protection. Basic routine: gentle cleanser twice daily, moisturizer with ceramides or hyaluronic acid, and broad-spectrum SPF 30+ sunscreen (reapply every 2 hours). Acne affects 85% of people aged 12-24, caused by excess oil, clogged pores, bacteria, and inflammation. Treatment includes salicylic acid (0.5-2%), benzoyl peroxide (2.5-10%), or retinoids.",
        views: "41.3K",
    },
    TopicEntry {
        id: "5",
        title: "Mental Health Awareness: Managing Stress, Anxiety, and Depression",
        category: TopicCategory::MentalHealth,
        description: "Comprehensive mental health guide covering stress management, anxiety coping strategies, and recognizing depression symptoms.",
        content: "Mental health affects 1 in 4 people annually. Stress activates fight-or-flight response; chronic stress increases cortisol, affecting immune function, sleep, and cardiovascular health. Effective stress management includes 150 minutes weekly moderate exercise, 7-9 hours sleep, balanced nutrition, and relaxation techniques. Practice 4-7-8 breathing: inhale 4 counts, hold 7, exhale 8.",
        views: "67.9K",
    },
    TopicEntry {
        id: "6",
        title: "Joint Pain Relief: Exercises and Treatment Options",
        category: TopicCategory::Pain,
        description: "Evidence-based approaches to managing joint pain through exercise, lifestyle modifications, and medical treatments.",
        content: "Joint pain affects 54 million adults in the US. Osteoarthritis, the most common form, involves cartilage breakdown typically affecting knees, hips, hands, and spine. Risk factors include age, obesity, previous injury, and genetics. Management includes maintaining healthy BMI, low-impact exercises like swimming, cycling, and walking 150 minutes weekly.",
        views: "35.7K",
    },
    TopicEntry {
        id: "7",
        title: "Respiratory Health: Breathing Techniques and Lung Care",
        category: TopicCategory::Respiratory,
        description: "Essential respiratory health information including breathing exercises, lung protection, and recognizing breathing difficulties.",
        content: "Healthy lungs process 12,000-15,000 liters of air daily. The respiratory system delivers oxygen and removes carbon dioxide through 300 million alveoli. Common conditions include asthma (affecting 25 million Americans), characterized by airway inflammation, bronchospasm, and mucus production. Maintain lung health by avoiding smoking and secondhand smoke, exercising regularly, and practicing breathing exercises.",
        views: "29.4K",
    },
    TopicEntry {
        id: "8",
        title: "Heart Health: Prevention and Early Warning Signs",
        category: TopicCategory::Cardiovascular,
        description: "Comprehensive guide to cardiovascular health, risk factors, prevention strategies, and recognizing heart attack symptoms.",
        content: "Cardiovascular disease causes 655,000 deaths annually in the US. Major risk factors include hypertension (>130/80 mmHg), high LDL cholesterol (>100 mg/dL), diabetes (HbA1c >7%), smoking, obesity (BMI >30), and sedentary lifestyle. Heart-healthy habits include 150 minutes weekly moderate aerobic exercise, Mediterranean diet rich in fruits, vegetables, whole grains, lean proteins, and healthy fats.",
        views: "52.1K",
    },
];

/// Topics in display order, optionally only those in `category`.
pub fn health_topics(category: Option<TopicCategory>) -> Vec<HealthTopic> {
    TOPICS
        .iter()
        .filter(|t| category.map_or(true, |c| t.category == c))
        .map(|t| HealthTopic {
            id: t.id.to_string(),
            title: t.title.to_string(),
            category: t.category,
            description: t.description.to_string(),
            content: t.content.to_string(),
            views: t.views.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(topics: &[HealthTopic]) -> Vec<&str> {
        topics.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn unfiltered_lists_every_topic_in_order() {
        let topics = health_topics(None);
        assert_eq!(ids(&topics), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert!(topics.iter().all(|t| !t.content.is_empty() && !t.description.is_empty()));
    }

    #[test]
    fn category_filter_is_exact() {
        assert_eq!(ids(&health_topics(Some(TopicCategory::Pain))), vec!["2", "6"]);
        assert_eq!(ids(&health_topics(Some(TopicCategory::MentalHealth))), vec!["5"]);
    }

    #[test]
    fn every_category_has_a_topic() {
        for category in TopicCategory::ALL {
            assert!(!health_topics(Some(category)).is_empty(), "{category} has no topics");
        }
    }

    #[test]
    fn filter_labels_parse_case_insensitively() {
        assert_eq!(parse_topic_filter("All"), Ok(None));
        assert_eq!(parse_topic_filter("  "), Ok(None));
        assert_eq!(parse_topic_filter("mental health"), Ok(Some(TopicCategory::MentalHealth)));
        assert_eq!(
            parse_topic_filter("Dental"),
            Err(GuideError::UnknownTopicCategory("Dental".to_string()))
        );
    }

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_string(&TopicCategory::MentalHealth).unwrap();
        assert_eq!(json, "\"Mental Health\"");
    }
}
