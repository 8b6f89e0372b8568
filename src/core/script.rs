// src/core/script.rs
use crate::core::types::{Script, ScriptCounts, ScriptDecision};

/// Punctuation that never counts toward any script.
const NEUTRAL_PUNCT: &str = ".,!?;:-_()[]{}'\"/\\+";

pub fn is_devanagari(ch: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&ch)
}

/// Counts characters by script class. Whitespace, digits and the neutral
/// punctuation set are excluded from all counts; any remaining character
/// (emoji, other scripts) lands in `other`.
pub fn char_script_counts(text: &str) -> ScriptCounts {
    let mut latin = 0;
    let mut devanagari = 0;
    let mut other = 0;
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            latin += 1;
        } else if is_devanagari(ch) {
            devanagari += 1;
        } else if ch.is_whitespace() || ch.is_numeric() || NEUTRAL_PUNCT.contains(ch) {
            continue;
        } else {
            other += 1;
        }
    }
    ScriptCounts {
        latin,
        devanagari,
        other,
        total_letters: latin + devanagari + other,
    }
}

/// Derives the script label and per-script ratios from the counts.
/// The 0.9 thresholds and the check order (latin, then devanagari, then
/// mixed) are part of the contract.
pub fn decide_script(counts: &ScriptCounts) -> ScriptDecision {
    if counts.total_letters == 0 {
        // No alphabetic content, treat script as 'other'
        return ScriptDecision {
            script: Script::Other,
            latin_ratio: 0.0,
            devanagari_ratio: 0.0,
        };
    }

    let total = counts.total_letters as f64;
    let latin_ratio = counts.latin as f64 / total;
    let devanagari_ratio = counts.devanagari as f64 / total;

    let script = if latin_ratio > 0.9 {
        Script::Latin
    } else if devanagari_ratio > 0.9 {
        Script::Devanagari
    } else if counts.latin > 0 && counts.devanagari > 0 {
        Script::Mixed
    } else {
        Script::Other
    };

    ScriptDecision {
        script,
        latin_ratio,
        devanagari_ratio,
    }
}
