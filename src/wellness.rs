//! Canned wellness tip lists per topic and language. These are fixed
//! catalogs, separate from the stored tip library the chat engine
//! matches against.

use crate::models::enums::Language;

static GENERAL_EN: &[&str] = &[
    "Stay hydrated by drinking at least 8 glasses of water daily",
    "Aim for 7-9 hours of quality sleep each night",
    "Include fruits and vegetables in every meal",
    "Take short breaks from sitting every 30 minutes",
];

static GENERAL_HI: &[&str] = &[
    "रोज़ कम से कम 8 गिलास पानी पीकर हाइड्रेटेड रहें",
    "हर रात 7-9 घंटे की अच्छी नींद लेने का लक्ष्य रखें",
    "हर भोजन में फल और सब्ज़ियाँ शामिल करें",
    "हर 30 मिनट में बैठने से छोटा ब्रेक लें",
];

static EXERCISE_EN: &[&str] = &[
    "Start with 30 minutes of moderate exercise daily",
    "Include both cardio and strength training",
    "Stretch before and after workouts",
    "Find activities you enjoy to stay motivated",
];

/// Wellness tips for a topic in the requested language. Unknown topics
/// fall back to the general list; a topic that exists but has no form
/// in the requested language falls back to the general English list.
pub fn wellness_tips(topic: &str, lang: &Language) -> &'static [&'static str] {
    match (topic, lang) {
        ("general", Language::English) => GENERAL_EN,
        ("general", Language::Hindi) => GENERAL_HI,
        ("exercise", Language::English) => EXERCISE_EN,
        ("exercise", Language::Hindi) => GENERAL_EN,
        (_, Language::English) => GENERAL_EN,
        (_, Language::Hindi) => GENERAL_HI,
    }
}
