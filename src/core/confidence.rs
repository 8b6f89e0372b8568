// src/core/confidence.rs
use crate::core::types::{PrimaryLanguage, WordEvidence};

/// Turns script purity and lexicon coverage into a bounded confidence value.
/// `unknown` always scores a flat 0.2. The mixed penalty and the weights are
/// tuned constants, not derived from a model.
pub fn compute_confidence(
    primary_language: PrimaryLanguage,
    latin_ratio: f64,
    devanagari_ratio: f64,
    ev: &WordEvidence,
) -> f64 {
    if primary_language == PrimaryLanguage::Unknown {
        return 0.2;
    }

    let purity = latin_ratio.max(devanagari_ratio);
    let recognized = ev.hi_lexicon_hits + ev.en_word_hits;
    let lex_frac = if ev.n_tokens > 0 {
        recognized as f64 / ev.n_tokens as f64
    } else {
        0.0
    };

    let mut conf = 0.3 + 0.4 * purity + 0.3 * lex_frac;

    if primary_language == PrimaryLanguage::Mixed {
        // Mixed is inherently uncertain, slightly reduce
        conf -= 0.05;
    }

    conf.clamp(0.0, 1.0)
}
