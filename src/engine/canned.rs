//! Pre-written bilingual response text.
//!
//! Everything a response can say without consulting the live translator
//! lives here: disclaimers, greetings, the zero-match advice map, and
//! Hindi renderings of the starter tip categories. Hindi strings are
//! curated by hand, never machine-translated at build or run time.

use crate::models::enums::{Language, TipCategory};

// ── Disclaimer ──────────────────────────────────────────────

/// Safety disclaimer appended to every composed response.
pub fn disclaimer(lang: &Language) -> &'static str {
    match lang {
        Language::English =>
            "Disclaimer: This advice is for general information only and is not a substitute \
             for professional medical care. Please consult a qualified doctor for diagnosis \
             and treatment.",
        Language::Hindi =>
            "अस्वीकरण: यह सलाह केवल सामान्य जानकारी के लिए है और पेशेवर चिकित्सा देखभाल का विकल्प नहीं है। \
             निदान और उपचार के लिए कृपया योग्य डॉक्टर से परामर्श करें।",
    }
}

// ── Greetings and fallback ──────────────────────────────────

/// Salutations checked (as substrings) when nothing else matched.
pub fn greeting_words() -> &'static [&'static str] {
    &[
        "hello", "hi", "hey",
        "नमस्ते", "नमस्कार", "हैलो", "हेलो", "हाय",
    ]
}

/// Personalized greeting for salutation-only messages.
pub fn greeting(lang: &Language, name: &str) -> String {
    match lang {
        Language::English => format!("Hello {name}! How can I help with your health today?"),
        Language::Hindi => format!("नमस्ते {name}! आज मैं आपके स्वास्थ्य में कैसे मदद कर सकता हूँ?"),
    }
}

/// Prompt for more detail when nothing in the message was recognized.
pub fn fallback_prompt(lang: &Language) -> &'static str {
    match lang {
        Language::English =>
            "I understand you're not feeling well. Could you describe your symptoms in more detail?",
        Language::Hindi =>
            "मैं समझता हूँ कि आपकी तबीयत ठीक नहीं है। कृपया अपने लक्षण थोड़े विस्तार से बताएं?",
    }
}

// ── Zero-match default advice ───────────────────────────────

/// One entry of the fixed symptom → advice map used when no library tip
/// matched. Keywords cover both scripts; the advice text is picked by
/// detected language.
pub struct DefaultAdvice {
    pub keywords: &'static [&'static str],
    pub advice_en: &'static str,
    pub advice_hi: &'static str,
}

pub static DEFAULT_ADVICE: &[DefaultAdvice] = &[
    DefaultAdvice {
        keywords: &["fever", "बुखार", "बुख़ार"],
        advice_en: "For fever: Rest, drink fluids, take medication, use cool compress. \
                    See doctor if high fever persists.",
        advice_hi: "बुखार के लिए: आराम करें, खूब तरल पदार्थ पिएं, दवा लें, ठंडी पट्टी रखें। \
                    तेज़ बुखार बना रहे तो डॉक्टर को दिखाएं।",
    },
    DefaultAdvice {
        keywords: &["headache", "सिरदर्द"],
        advice_en: "For headache: Rest in dark room, stay hydrated, avoid triggers. \
                    Consider pain relief medication.",
        advice_hi: "सिरदर्द के लिए: अंधेरे कमरे में आराम करें, पानी पीते रहें, ट्रिगर से बचें। \
                    ज़रूरत हो तो दर्द की दवा लें।",
    },
    DefaultAdvice {
        keywords: &["migraine", "माइग्रेन"],
        advice_en: "For migraine: Rest in quiet dark room, cold compress, hydration, \
                    avoid lights/sounds. Medication if needed.",
        advice_hi: "माइग्रेन के लिए: शांत अंधेरे कमरे में आराम करें, ठंडी पट्टी रखें, पानी पिएं, \
                    तेज़ रोशनी और आवाज़ से बचें। ज़रूरत पर दवा लें।",
    },
    DefaultAdvice {
        keywords: &["cold", "सर्दी", "ज़ुकाम", "जुकाम"],
        advice_en: "For cold: Rest, fluids, humidifier, over-the-counter meds. \
                    See doctor if symptoms worsen.",
        advice_hi: "सर्दी-ज़ुकाम के लिए: आराम करें, तरल पदार्थ लें, भाप लें, सामान्य दवाएं लें। \
                    लक्षण बढ़ें तो डॉक्टर को दिखाएं।",
    },
    DefaultAdvice {
        keywords: &["cough", "खांसी", "खाँसी"],
        advice_en: "For cough: Honey tea, humidifier, rest. See doctor if persistent \
                    or with fever.",
        advice_hi: "खांसी के लिए: शहद वाली चाय पिएं, भाप लें, आराम करें। खांसी बनी रहे या \
                    बुखार हो तो डॉक्टर को दिखाएं।",
    },
];

/// First default-advice entry whose keywords occur in the (lowercased)
/// message, rendered in the requested language.
pub fn default_advice_for(message_lower: &str, lang: &Language) -> Option<&'static str> {
    for entry in DEFAULT_ADVICE {
        if entry.keywords.iter().any(|kw| message_lower.contains(kw)) {
            return Some(match lang {
                Language::English => entry.advice_en,
                Language::Hindi => entry.advice_hi,
            });
        }
    }
    None
}

// ── Canned Hindi tip renderings ─────────────────────────────

/// Hand-written Hindi rendering of a tip category's advice. Categories
/// covered here never hit the live translator; the rest fall through to
/// best-effort translation of the stored English content.
pub fn tip_translation(category: &TipCategory) -> Option<&'static str> {
    match category {
        TipCategory::HeadPain => Some(
            "सिरदर्द और माइग्रेन से राहत के लिए:\n\
             • शांत, अंधेरे कमरे में आराम करें\n\
             • सिर पर ठंडी पट्टी रखें\n\
             • पर्याप्त पानी पिएं\n\
             • तेज़ रोशनी और तेज़ आवाज़ से बचें\n\
             • ज़रूरत हो तो सामान्य दर्द निवारक दवा लें\n\
             • तनाव कम करने के उपाय अपनाएं",
        ),
        TipCategory::Fever => Some(
            "बुखार के प्रबंधन के लिए:\n\
             • आराम करें और खूब तरल पदार्थ पिएं\n\
             • डॉक्टर के निर्देशानुसार पैरासिटामोल या आइबुप्रोफेन लें\n\
             • माथे पर ठंडी पट्टी रखें\n\
             • नियमित रूप से तापमान जांचें\n\
             • बुखार 103°F से अधिक हो या 3 दिन से ज़्यादा रहे तो तुरंत डॉक्टर से मिलें",
        ),
        TipCategory::Cold => Some(
            "सर्दी-ज़ुकाम और फ्लू के लिए:\n\
             • भरपूर आराम करें\n\
             • चाय या सूप जैसे गर्म तरल पदार्थ पिएं\n\
             • भाप लें या ह्यूमिडिफायर का उपयोग करें\n\
             • गले की खराश के लिए नमक के पानी से गरारे करें\n\
             • सामान्य सर्दी की दवाएं ले सकते हैं\n\
             • संक्रमण फैलने से रोकने के लिए हाथ धोते रहें",
        ),
        TipCategory::Stomach => Some(
            "उल्टी और पेट की गड़बड़ी के लिए:\n\
             • थोड़ी-थोड़ी मात्रा में पानी या ओआरएस घोल पिएं\n\
             • कुछ घंटों के लिए ठोस भोजन से परहेज़ करें\n\
             • हल्का भोजन (केला, चावल, टोस्ट) धीरे-धीरे शुरू करें\n\
             • आराम करें और तेज़ गंध से बचें\n\
             • उल्टी बनी रहे या खून दिखे तो तुरंत डॉक्टर से मिलें",
        ),
        TipCategory::General | TipCategory::Other => None,
    }
}

// ── Multi-symptom framing ───────────────────────────────────

/// Opening line when several tips matched. `symptom_list` is the
/// already-joined human list ("Migraine and Fever").
pub fn multi_match_intro(lang: &Language, symptom_list: &str) -> String {
    match lang {
        Language::English => format!(
            "It looks like you're dealing with {symptom_list}. Here's what you can do for each:"
        ),
        Language::Hindi => format!(
            "लगता है आपको {symptom_list} की समस्या है। हर एक के लिए आप ये कर सकते हैं:"
        ),
    }
}

/// Joiner for the final pair in a symptom list.
pub fn list_conjunction(lang: &Language) -> &'static str {
    match lang {
        Language::English => " and ",
        Language::Hindi => " और ",
    }
}

/// Shared self-care advice appended after the per-tip sections.
pub fn general_care_block(lang: &Language) -> &'static str {
    match lang {
        Language::English =>
            "General advice for multiple symptoms:\n\
             • Rest as much as possible\n\
             • Stay well hydrated\n\
             • Eat light, easy-to-digest food\n\
             • Monitor your symptoms and note any changes",
        Language::Hindi =>
            "एक साथ कई लक्षणों के लिए सामान्य सलाह:\n\
             • जितना हो सके आराम करें\n\
             • खूब पानी और तरल पदार्थ लें\n\
             • हल्का और सुपाच्य भोजन करें\n\
             • अपने लक्षणों पर नज़र रखें और बदलाव नोट करें",
    }
}

/// Escalation guidance appended at the end of multi-symptom responses.
pub fn seek_help_block(lang: &Language) -> &'static str {
    match lang {
        Language::English =>
            "When to seek medical attention:\n\
             • Symptoms last more than 3 days or keep getting worse\n\
             • High fever above 103°F (39.4°C)\n\
             • Difficulty breathing, chest pain, or confusion\n\
             • You cannot keep fluids down",
        Language::Hindi =>
            "डॉक्टर से कब मिलें:\n\
             • लक्षण 3 दिन से अधिक रहें या बिगड़ते जाएं\n\
             • 103°F (39.4°C) से अधिक तेज़ बुखार हो\n\
             • सांस लेने में तकलीफ, सीने में दर्द या भ्रम हो\n\
             • तरल पदार्थ भी न टिक पा रहे हों",
    }
}
