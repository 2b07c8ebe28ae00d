//! Script-based language detection for chat messages.
//!
//! A single Devanagari code point anywhere in the message selects Hindi;
//! everything else (Latin, digits, punctuation, emoji) reads as English.
//! No frequency heuristics, no model: script presence is the whole
//! signal.

use crate::models::enums::Language;

/// Unicode Devanagari block bounds (includes the danda '।').
const DEVANAGARI_START: char = '\u{0900}';
const DEVANAGARI_END: char = '\u{097F}';

/// Detect the language of a chat message. Empty input reads as English,
/// which routes it to the zero-match fallback prompt.
pub fn detect_language(text: &str) -> Language {
    if text.chars().any(is_devanagari) {
        Language::Hindi
    } else {
        Language::English
    }
}

/// Whether a character falls in the Devanagari Unicode block.
pub fn is_devanagari(ch: char) -> bool {
    (DEVANAGARI_START..=DEVANAGARI_END).contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_hindi_message() {
        assert_eq!(detect_language("मुझे बुखार है"), Language::Hindi);
    }

    #[test]
    fn detects_english_message() {
        assert_eq!(detect_language("I have a headache and fever"), Language::English);
    }

    #[test]
    fn single_devanagari_word_selects_hindi() {
        // Mixed-script messages follow the target script
        assert_eq!(detect_language("I think I have बुखार today"), Language::Hindi);
    }

    #[test]
    fn empty_and_whitespace_read_as_english() {
        assert_eq!(detect_language(""), Language::English);
        assert_eq!(detect_language("   "), Language::English);
    }

    #[test]
    fn punctuation_digits_emoji_read_as_english() {
        assert_eq!(detect_language("102.4!! :("), Language::English);
        assert_eq!(detect_language("😷🤒"), Language::English);
    }

    #[test]
    fn devanagari_danda_counts_as_hindi() {
        assert_eq!(detect_language("help।"), Language::Hindi);
    }

    #[test]
    fn romanized_hindi_reads_as_english() {
        // No Devanagari characters, so the transliteration reads as English
        assert_eq!(detect_language("mujhe bukhar hai"), Language::English);
    }

    #[test]
    fn block_boundaries() {
        assert!(is_devanagari('\u{0900}'));
        assert!(is_devanagari('\u{097F}'));
        assert!(!is_devanagari('\u{08FF}'));
        assert!(!is_devanagari('\u{0980}'));
    }
}
