// src/core/lexicon.rs
use crate::core::script::is_devanagari;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Small Hindi words written in Latin letters (Hinglish markers).
pub static HI_LATIN_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "aaj", "aj", "kal", "hai", "h", "nahi", "nhi", "yaar", "raat", "subah", "theek", "thik",
        "dard", "dimag", "mujhe", "muje", "badh", "gaya", "gayi", "ho", "raha", "rahi", "thakan",
        "thak", "bahut", "bhut", "thi", "tha", "ko",
    ])
});

/// Common English words / stopwords for the diary domain.
pub static EN_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "today", "yesterday", "headache", "cramps", "stress", "meeting", "meetings", "work",
        "was", "is", "are", "feeling", "very", "tired", "pain", "bloated", "after", "dinner",
        "need", "book", "appointment", "period", "morning", "evening", "ok", "fine", "energy",
        "low", "late", "no", "back", "skip", "better", "gyno", "anxiety", "emotional", "stressed",
        "intense", "felt", "again", "early",
    ])
});

/// Lowercases the text and extracts maximal runs of Latin or Devanagari
/// letters. Every other character separates tokens and is discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_alphabetic() || is_devanagari(ch) {
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("12345 !!!").is_empty());
    }

    #[test]
    fn tokenization_is_case_insensitive() {
        assert_eq!(tokenize("HAI"), tokenize("hai"));
        assert_eq!(tokenize("Aaj Headache"), vec!["aaj", "headache"]);
    }

    #[test]
    fn punctuation_and_digits_separate_tokens() {
        assert_eq!(
            tokenize("mood off, hai2yaar."),
            vec!["mood", "off", "hai", "yaar"]
        );
    }

    #[test]
    fn devanagari_runs_are_tokens() {
        assert_eq!(tokenize("आज बहुत थकान"), vec!["आज", "बहुत", "थकान"]);
    }

    #[test]
    fn mixed_script_runs_stay_joined() {
        // No separator between the scripts, so the run is one token.
        assert_eq!(tokenize("okआज"), vec!["okआज"]);
    }
}
