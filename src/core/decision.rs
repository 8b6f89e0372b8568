// src/core/decision.rs
use crate::core::types::{PrimaryLanguage, Script, WordEvidence};

/// Rule cascade combining script label, ratios and word evidence into one
/// primary-language label. Evaluated top to bottom, first match wins; the
/// order is load-bearing (e.g. co-occurring hi + en hits decide `mixed`
/// before the latin-only branch is reached).
pub fn decide_primary_language(
    script: Script,
    _latin_ratio: f64,
    devanagari_ratio: f64,
    ev: &WordEvidence,
) -> PrimaryLanguage {
    let n_tokens = ev.n_tokens;
    let hi_hits = ev.hi_lexicon_hits;
    let en_hits = ev.en_word_hits;

    // 1. Very short or no tokens => unknown
    if n_tokens == 0 {
        return PrimaryLanguage::Unknown;
    }
    if n_tokens <= 1 && hi_hits == 0 && en_hits == 0 {
        return PrimaryLanguage::Unknown;
    }

    // 2. Dominantly Devanagari => hi
    if script == Script::Devanagari && devanagari_ratio > 0.9 {
        return PrimaryLanguage::Hi;
    }

    // 3. Mixed scripts or strong mix of hi + en => mixed
    if script == Script::Mixed {
        return PrimaryLanguage::Mixed;
    }
    if hi_hits > 0 && en_hits > 0 {
        return PrimaryLanguage::Mixed;
    }

    // 4. Latin-only logic
    if script == Script::Latin {
        // Mainly Hindi words in Latin => hinglish
        if hi_hits >= 2 && hi_hits >= en_hits {
            return PrimaryLanguage::Hinglish;
        }
        // Mainly English words => en
        if en_hits >= 2 && en_hits > hi_hits {
            return PrimaryLanguage::En;
        }
        // One Hindi word in a very short sentence => hinglish
        if hi_hits == 1 && n_tokens <= 4 {
            return PrimaryLanguage::Hinglish;
        }
        // No lexicon hits
        if en_hits == 0 && hi_hits == 0 {
            if n_tokens >= 2 {
                return PrimaryLanguage::En;
            }
            return PrimaryLanguage::Unknown;
        }
        // A single hi hit in a longer sentence falls through to unknown.
    }

    // 5. Other script: try to infer from words, else unknown
    if script == Script::Other {
        if en_hits > hi_hits && en_hits >= 1 {
            return PrimaryLanguage::En;
        }
        if hi_hits > en_hits && hi_hits >= 1 {
            return PrimaryLanguage::Hinglish;
        }
        return PrimaryLanguage::Unknown;
    }

    PrimaryLanguage::Unknown
}
