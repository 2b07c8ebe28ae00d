//! Response composition: turn matched tips into one reply.
//!
//! Three shapes, by match count: the zero-match ladder (default advice
//! map, then greeting, then fallback prompt), a single tip's content,
//! or a framed multi-symptom response. Every shape ends with the safety
//! disclaimer in the detected language.

use crate::models::enums::Language;
use crate::models::UserAccount;

use super::canned;
use super::translate::{BestEffort, Translate};
use super::types::TipMatch;

/// Compose the full reply for a message given its tip matches.
pub fn compose_response<T: Translate>(
    message: &str,
    matches: &[TipMatch],
    lang: &Language,
    user: &UserAccount,
    translator: &BestEffort<T>,
) -> String {
    let body = match matches {
        [] => zero_match_body(message, lang, user),
        [only] => tip_body(only, lang, translator),
        many => multi_match_body(many, lang, translator),
    };

    format!("{body}\n\n{}", canned::disclaimer(lang))
}

/// No tip matched: try the fixed advice map, then greet, then ask for
/// more detail. Same check order in both languages.
fn zero_match_body(message: &str, lang: &Language, user: &UserAccount) -> String {
    let message_lower = message.to_lowercase();

    if let Some(advice) = canned::default_advice_for(&message_lower, lang) {
        return advice.to_string();
    }

    if canned::greeting_words().iter().any(|w| message_lower.contains(w)) {
        return canned::greeting(lang, &user.name);
    }

    canned::fallback_prompt(lang).to_string()
}

/// A single tip's content in the requested language. Hindi prefers the
/// canned category rendering; categories without one go through the
/// best-effort translator.
fn tip_body<T: Translate>(m: &TipMatch, lang: &Language, translator: &BestEffort<T>) -> String {
    match lang {
        Language::English => m.tip.content.clone(),
        Language::Hindi => match canned::tip_translation(&m.tip.category) {
            Some(hindi) => hindi.to_string(),
            None => translator.translate_or_original(&m.tip.content),
        },
    }
}

fn multi_match_body<T: Translate>(
    matches: &[TipMatch],
    lang: &Language,
    translator: &BestEffort<T>,
) -> String {
    let names: Vec<String> = matches.iter().map(|m| symptom_name(&m.tip.title)).collect();
    let mut body = canned::multi_match_intro(lang, &join_names(&names, lang));

    for m in matches {
        body.push_str("\n\n");
        body.push_str(&m.tip.title);
        body.push_str(":\n");
        body.push_str(&tip_body(m, lang, translator));
    }

    body.push_str("\n\n");
    body.push_str(canned::general_care_block(lang));
    body.push_str("\n\n");
    body.push_str(canned::seek_help_block(lang));
    body
}

/// Derive a short symptom name from a tip title by dropping trailing
/// filler words: "Migraine Relief" becomes "Migraine", "Cold and Flu
/// Care" becomes "Cold and Flu".
fn symptom_name(title: &str) -> String {
    const FILLER: &[&str] = &["relief", "management", "care", "tips", "guide"];

    let mut words: Vec<&str> = title.split_whitespace().collect();
    while words.len() > 1 {
        let last = words[words.len() - 1].to_lowercase();
        if FILLER.contains(&last.as_str()) {
            words.pop();
        } else {
            break;
        }
    }
    words.join(" ")
}

/// Join symptom names into a human list: "A", "A and B", "A, B and C".
fn join_names(names: &[String], lang: &Language) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        _ => {
            let (last, rest) = names.split_last().unwrap_or((&names[0], &[]));
            format!(
                "{}{}{}",
                rest.join(", "),
                canned::list_conjunction(lang),
                last
            )
        }
    }
}
