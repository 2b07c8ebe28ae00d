//! Keyword matching between chat messages and the tip library.
//!
//! Matching is deliberately simple: lowercase substring containment of
//! each tip's comma-separated keywords. No stemming, no ranking; tips
//! surface in library order, and the composer decides how to present
//! zero, one, or many of them.

use crate::models::HealthTip;

use super::types::TipMatch;

/// Collect every tip whose keyword list matches the message, in the
/// order the tips appear in the library. The first matching keyword is
/// recorded and the rest of the tip's keywords are skipped, so a tip is
/// never surfaced twice for one message.
pub fn match_tips(message: &str, tips: &[HealthTip]) -> Vec<TipMatch> {
    let message_lower = message.to_lowercase();
    let mut matches = Vec::new();

    for tip in tips {
        let Some(symptoms) = &tip.symptoms else { continue };

        for keyword in symptoms.split(',') {
            let keyword = keyword.trim().to_lowercase();
            if !keyword.is_empty() && message_lower.contains(&keyword) {
                matches.push(TipMatch {
                    tip: tip.clone(),
                    keyword,
                });
                break;
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::TipCategory;
    use uuid::Uuid;

    fn tip(title: &str, symptoms: Option<&str>) -> HealthTip {
        HealthTip {
            id: Uuid::new_v4(),
            title: title.into(),
            content: format!("{title} advice"),
            category: TipCategory::Other,
            symptoms: symptoms.map(String::from),
            created_at: Default::default(),
            created_by: None,
        }
    }

    #[test]
    fn matches_single_keyword() {
        let tips = vec![tip("Fever Management", Some("fever,temperature,hot"))];
        let matches = match_tips("I think I have a fever", &tips);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].keyword, "fever");
        assert_eq!(matches[0].tip.title, "Fever Management");
    }

    #[test]
    fn tip_matched_once_even_with_multiple_keyword_hits() {
        let tips = vec![tip("Fever Management", Some("fever,temperature,hot"))];
        let matches = match_tips("fever and high temperature, feeling hot", &tips);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn first_keyword_in_list_order_is_recorded() {
        let tips = vec![tip("Migraine Relief", Some("migraine,headache"))];
        // Both keywords occur; the keyword list order decides
        let matches = match_tips("headache turning into migraine", &tips);
        assert_eq!(matches[0].keyword, "migraine");
    }

    #[test]
    fn library_order_preserved_over_message_order() {
        let tips = vec![
            tip("Migraine Relief", Some("headache")),
            tip("Fever Management", Some("fever")),
        ];
        // "fever" appears first in the message, but the library order wins
        let matches = match_tips("fever and headache", &tips);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].tip.title, "Migraine Relief");
        assert_eq!(matches[1].tip.title, "Fever Management");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let tips = vec![tip("Fever Management", Some("Fever"))];
        let matches = match_tips("FEVER won't go away", &tips);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].keyword, "fever");
    }

    #[test]
    fn keywords_are_trimmed() {
        let tips = vec![tip("Cold Care", Some(" cold ,  flu "))];
        let matches = match_tips("caught a flu", &tips);
        assert_eq!(matches[0].keyword, "flu");
    }

    #[test]
    fn substring_containment_matches_inside_words() {
        // Plain substring semantics: "hot" matches "hottest"
        let tips = vec![tip("Fever Management", Some("hot"))];
        assert_eq!(match_tips("the hottest day of the year", &tips).len(), 1);
    }

    #[test]
    fn empty_and_blank_keywords_are_skipped() {
        let tips = vec![tip("Broken", Some(",, ,  ,"))];
        assert!(match_tips("anything at all", &tips).is_empty());
    }

    #[test]
    fn tips_without_keywords_never_match() {
        let tips = vec![tip("Orphan", None)];
        assert!(match_tips("orphan", &tips).is_empty());
    }

    #[test]
    fn empty_message_matches_nothing() {
        let tips = vec![tip("Fever Management", Some("fever"))];
        assert!(match_tips("", &tips).is_empty());
    }

    #[test]
    fn hindi_keywords_match_devanagari_messages() {
        let tips = vec![tip("Fever Management", Some("fever,बुखार"))];
        let matches = match_tips("मुझे बुखार है", &tips);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].keyword, "बुखार");
    }
}
