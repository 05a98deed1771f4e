// Extractor and phrase-counter traits: swap-ready abstractions.
//
// The benchmark model and the ranking only ever see a FeatureExtractor, so a
// different set of heuristics (or a different language profile) can be
// dropped in without touching the scoring code. The repeated-phrase matcher
// sits behind its own trait because its boundary semantics are a judgment
// call that may need tuning against real lyrics.

use super::vector::FeatureVector;

/// Trait for mapping a text to its feature vector.
///
/// Implementations must be pure: the same text always yields the same vector.
pub trait FeatureExtractor {
    fn extract(&self, text: &str) -> FeatureVector;
}

/// Trait for counting structural refrains in a text.
pub trait PhraseCounter {
    /// Count non-overlapping repeated phrases in the original (unnormalized) text.
    fn count_repeated_phrases(&self, text: &str) -> usize;
}
