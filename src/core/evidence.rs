// src/core/evidence.rs
use crate::core::lexicon::{EN_WORDS, HI_LATIN_WORDS};
use crate::core::types::WordEvidence;

/// Counts tokens matching each lexicon. The two checks are independent, so
/// a single token may increment both hit counts.
pub fn word_evidence(tokens: &[String]) -> WordEvidence {
    let mut hi_lexicon_hits = 0;
    let mut en_word_hits = 0;
    for tok in tokens {
        if HI_LATIN_WORDS.contains(tok.as_str()) {
            hi_lexicon_hits += 1;
        }
        if EN_WORDS.contains(tok.as_str()) {
            en_word_hits += 1;
        }
    }
    WordEvidence {
        hi_lexicon_hits,
        en_word_hits,
        n_tokens: tokens.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lexicon::tokenize;

    #[test]
    fn counts_hits_per_lexicon() {
        let ev = word_evidence(&tokenize("aaj headache hai yaar"));
        assert_eq!(ev.hi_lexicon_hits, 3);
        assert_eq!(ev.en_word_hits, 1);
        assert_eq!(ev.n_tokens, 4);
    }

    #[test]
    fn repeated_tokens_count_each_time() {
        let ev = word_evidence(&tokenize("hai hai hai"));
        assert_eq!(ev.hi_lexicon_hits, 3);
        assert_eq!(ev.n_tokens, 3);
    }

    #[test]
    fn hits_never_exceed_token_count() {
        let ev = word_evidence(&tokenize("aaj headache hai mood off"));
        assert!(ev.hi_lexicon_hits <= ev.n_tokens);
        assert!(ev.en_word_hits <= ev.n_tokens);
    }

    #[test]
    fn unknown_tokens_hit_nothing() {
        let ev = word_evidence(&tokenize("zzz qqq"));
        assert_eq!(ev.hi_lexicon_hits, 0);
        assert_eq!(ev.en_word_hits, 0);
        assert_eq!(ev.n_tokens, 2);
    }
}
