// src/core/types.rs
use serde::{Deserialize, Serialize};

/// The writing system detected in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Devanagari,
    Mixed,
    Other,
}

/// The primary language assigned to a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryLanguage {
    En,
    Hi,
    Hinglish,
    Mixed,
    Other,
    Unknown,
}

/// Per-script character counts over one input text.
/// Invariant: `total_letters == latin + devanagari + other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptCounts {
    pub latin: usize,
    pub devanagari: usize,
    pub other: usize,
    pub total_letters: usize,
}

/// Script label plus the ratios it was derived from.
/// Ratios are 0.0 when the text has no countable letters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptDecision {
    pub script: Script,
    pub latin_ratio: f64,
    pub devanagari_ratio: f64,
}

/// Lexicon hit counts over the token stream.
/// A token may count toward both hit sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEvidence {
    pub hi_lexicon_hits: usize,
    pub en_word_hits: usize,
    pub n_tokens: usize,
}

/// The signals backing a classification, echoed in the output record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub latin_ratio: f64,
    pub devanagari_ratio: f64,
    pub hi_lexicon_hits: usize,
    pub en_word_hits: usize,
    pub n_tokens: usize,
}

/// One classification result, immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub id: String,
    pub primary_language: PrimaryLanguage,
    pub script: Script,
    /// Rounded to 2 decimal places, in [0.0, 1.0].
    pub confidence: f64,
    pub evidence: Evidence,
}
