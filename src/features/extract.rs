// Stylometric feature extractor.
//
// Four cheap, explainable heuristics for song lyrics:
// - ttr: lexical diversity (distinct words / words)
// - repetition density: how many word types recur (repeated types / words)
// - theme score: share of the profile's theme words present in the text
// - structure score: refrain-like repeated phrases per sentence
//
// Word-level features work on the normalized text. Sentence segmentation and
// the refrain matcher work on the original text, where punctuation and line
// breaks are still present.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use super::phrases::RefrainMatcher;
use super::traits::{FeatureExtractor, PhraseCounter};
use super::vector::FeatureVector;
use crate::config::StylometryProfile;

// regex-lite's `\s` is ASCII-only, so the Unicode spaces found in pasted
// lyrics (no-break space, ideographic space, line separators) are listed.
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\s\x{a0}\x{1680}\x{2000}-\x{200a}\x{2028}\x{2029}\x{202f}\x{205f}\x{3000}\x{feff}]{2,}",
    )
    .expect("whitespace pattern is valid")
});

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));

/// Lowercase, blank out punctuation, collapse whitespace runs and trim.
///
/// Only runs of two or more whitespace characters are collapsed, so a lone
/// newline survives normalization and glues the words on either side of it.
pub fn normalize(text: &str, punctuation: &str) -> String {
    let blanked: String = text
        .to_lowercase()
        .chars()
        .map(|c| if punctuation.contains(c) { ' ' } else { c })
        .collect();
    WHITESPACE_RUN
        .replace_all(&blanked, " ")
        .trim_matches(is_whitespace)
        .to_string()
}

/// Whitespace as matched by `WHITESPACE_RUN`.
fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\x0b' | '\x0c' | '\r' | ' ' | '\u{a0}' | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}' | '\u{3000}' | '\u{feff}'
    )
}

/// Split normalized text on single spaces.
///
/// Never empty: an empty text yields one empty word.
pub fn words(normalized: &str) -> Vec<&str> {
    normalized.split(' ').collect()
}

/// Number of non-empty segments between runs of `.`, `!` and `?`.
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_BREAK
        .split(text)
        .filter(|segment| !segment.is_empty())
        .count()
}

/// The default extractor, configured by a StylometryProfile.
pub struct StylometricExtractor<P: PhraseCounter = RefrainMatcher> {
    /// Theme words, lowercased to match the normalized text
    themes: Vec<String>,
    punctuation: String,
    structure_multiplier: f64,
    phrases: P,
}

impl StylometricExtractor<RefrainMatcher> {
    pub fn new(profile: &StylometryProfile) -> Self {
        let phrases = RefrainMatcher {
            min_len: profile.min_phrase_len,
            cross_lines: profile.cross_lines,
        };
        Self::with_phrase_counter(profile, phrases)
    }
}

impl Default for StylometricExtractor<RefrainMatcher> {
    fn default() -> Self {
        Self::new(&StylometryProfile::default())
    }
}

impl<P: PhraseCounter> StylometricExtractor<P> {
    /// Build an extractor with a custom refrain matcher.
    pub fn with_phrase_counter(profile: &StylometryProfile, phrases: P) -> Self {
        Self {
            themes: profile.themes.iter().map(|t| t.to_lowercase()).collect(),
            punctuation: profile.punctuation.clone(),
            structure_multiplier: profile.structure_multiplier,
            phrases,
        }
    }

    fn theme_score(&self, normalized: &str) -> f64 {
        if self.themes.is_empty() {
            return 0.0;
        }
        let matched = self
            .themes
            .iter()
            .filter(|theme| normalized.contains(theme.as_str()))
            .count();
        matched as f64 / self.themes.len() as f64
    }

    fn structure_score(&self, text: &str) -> f64 {
        let repeated = self.phrases.count_repeated_phrases(text);
        // A text made only of terminators has no sentences; count it as one.
        let sentences = sentence_count(text).max(1);
        ((repeated as f64 / sentences as f64) * self.structure_multiplier).min(1.0)
    }
}

impl<P: PhraseCounter> FeatureExtractor for StylometricExtractor<P> {
    fn extract(&self, text: &str) -> FeatureVector {
        let normalized = normalize(text, &self.punctuation);
        let words = words(&normalized);
        let total = words.len() as f64;

        let mut frequencies: HashMap<&str, usize> = HashMap::new();
        for word in &words {
            *frequencies.entry(*word).or_insert(0) += 1;
        }
        let distinct = frequencies.len();
        let repeated_types = frequencies.values().filter(|&&n| n > 1).count();

        let vector = FeatureVector {
            ttr: distinct as f64 / total,
            repetition_density: repeated_types as f64 / total,
            theme_score: self.theme_score(&normalized),
            structure_score: self.structure_score(text),
        };

        debug!(
            words = words.len(),
            distinct,
            repeated_types,
            ttr = vector.ttr,
            theme = vector.theme_score,
            structure = vector.structure_score,
            "Extracted features"
        );

        vector
    }
}
