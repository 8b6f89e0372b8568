use crate::core::confidence::compute_confidence;
use crate::core::decision::decide_primary_language;
use crate::core::evidence::word_evidence;
use crate::core::lexicon::tokenize;
use crate::core::script::{char_script_counts, decide_script};
use crate::core::types::{DetectionResult, Evidence};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Runs the full classification pipeline over one text. Total for any input:
/// empty text yields script `other`, language `unknown`, confidence 0.2.
pub fn detect(id: &str, text: &str) -> DetectionResult {
    let counts = char_script_counts(text);
    let decision = decide_script(&counts);
    let tokens = tokenize(text);
    let ev = word_evidence(&tokens);
    let primary_language = decide_primary_language(
        decision.script,
        decision.latin_ratio,
        decision.devanagari_ratio,
        &ev,
    );
    let confidence = compute_confidence(
        primary_language,
        decision.latin_ratio,
        decision.devanagari_ratio,
        &ev,
    );

    DetectionResult {
        id: id.to_string(),
        primary_language,
        script: decision.script,
        confidence: round2(confidence),
        evidence: Evidence {
            latin_ratio: decision.latin_ratio,
            devanagari_ratio: decision.devanagari_ratio,
            hi_lexicon_hits: ev.hi_lexicon_hits,
            en_word_hits: ev.en_word_hits,
            n_tokens: ev.n_tokens,
        },
    }
}
