use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Thematic vocabulary of the Italian festival profile.
pub const DEFAULT_THEMES: [&str; 24] = [
    "amore", "vita", "tempo", "cuore", "mondo", "solitudine", "memoria", "famiglia", "notte",
    "cielo", "strada", "luce", "mare", "sole", "casa", "occhi", "mano", "silenzio", "vento",
    "anima", "dolore", "stelle", "luna", "sogno",
];

/// Characters replaced by a space before tokenizing.
pub const DEFAULT_PUNCTUATION: &str = ".,/#!?$%^&*;:{}=-_`~()";

/// How much each per-feature similarity contributes to the final score.
///
/// The four weights must sum to 1.0 so that a perfect match scores exactly 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    pub ttr: f64,
    pub repetition_density: f64,
    pub theme_score: f64,
    pub structure_score: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            ttr: 0.25,
            repetition_density: 0.25,
            theme_score: 0.30,
            structure_score: 0.20,
        }
    }
}

impl FeatureWeights {
    /// Weights in feature order: ttr, repetition density, theme, structure.
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.ttr,
            self.repetition_density,
            self.theme_score,
            self.structure_score,
        ]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

/// Tunable constants of the stylometric pipeline.
///
/// The default is the Italian song-contest profile. Other languages or
/// genres can be scored by loading a different profile from JSON without
/// touching the extractor or the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylometryProfile {
    /// Theme words matched as substrings of the normalized text
    pub themes: Vec<String>,
    /// Every character in this string is replaced by a space during normalization
    pub punctuation: String,
    /// Per-feature weights for the combined similarity
    pub weights: FeatureWeights,
    /// Replaces a benchmark standard deviation that comes out as 0 or NaN
    pub stddev_fallback: f64,
    /// Scales repeated phrases per sentence before capping at 1.0
    pub structure_multiplier: f64,
    /// Shortest run of characters that counts as a repeated phrase
    pub min_phrase_len: usize,
    /// Whether a repeated phrase may span a line break
    pub cross_lines: bool,
}

impl Default for StylometryProfile {
    fn default() -> Self {
        Self {
            themes: DEFAULT_THEMES.iter().map(|t| t.to_string()).collect(),
            punctuation: DEFAULT_PUNCTUATION.to_string(),
            weights: FeatureWeights::default(),
            stddev_fallback: 0.1,
            structure_multiplier: 1.5,
            min_phrase_len: 10,
            cross_lines: false,
        }
    }
}

impl StylometryProfile {
    /// Load a profile from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile {}", path.display()))?;
        let profile: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid profile JSON in {}", path.display()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Reject profiles that would break the scoring invariants.
    pub fn validate(&self) -> Result<()> {
        if self.themes.is_empty() {
            anyhow::bail!("Profile has no theme words; themeScore would be undefined");
        }
        if self.themes.iter().any(|t| t.is_empty()) {
            anyhow::bail!("Profile contains an empty theme word");
        }
        if self.weights.as_array().iter().any(|w| *w < 0.0 || !w.is_finite()) {
            anyhow::bail!("Feature weights must be finite and non-negative");
        }
        let total = self.weights.total();
        if (total - 1.0).abs() > 1e-6 {
            anyhow::bail!("Feature weights must sum to 1.0 (got {total:.6})");
        }
        if !(self.stddev_fallback > 0.0 && self.stddev_fallback.is_finite()) {
            anyhow::bail!(
                "stddev_fallback must be a positive number (got {})",
                self.stddev_fallback
            );
        }
        if self.min_phrase_len == 0 {
            anyhow::bail!("min_phrase_len must be at least 1");
        }
        if !(self.structure_multiplier >= 0.0 && self.structure_multiplier.is_finite()) {
            anyhow::bail!("structure_multiplier must be finite and non-negative");
        }
        Ok(())
    }
}

/// Runtime configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; CLI flags take
/// precedence over anything set here.
pub struct Config {
    /// Benchmark corpus of past winners (LYRICBENCH_WINNERS)
    pub winners_path: Option<PathBuf>,
    /// Candidates to rank (LYRICBENCH_CANDIDATES)
    pub candidates_path: Option<PathBuf>,
    /// Optional alternate profile JSON (LYRICBENCH_PROFILE)
    pub profile_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            winners_path: env::var("LYRICBENCH_WINNERS").ok().map(PathBuf::from),
            candidates_path: env::var("LYRICBENCH_CANDIDATES").ok().map(PathBuf::from),
            profile_path: env::var("LYRICBENCH_PROFILE").ok().map(PathBuf::from),
        })
    }

    /// Apply CLI overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        winners: Option<PathBuf>,
        candidates: Option<PathBuf>,
        profile: Option<PathBuf>,
    ) -> Self {
        if winners.is_some() {
            self.winners_path = winners;
        }
        if candidates.is_some() {
            self.candidates_path = candidates;
        }
        if profile.is_some() {
            self.profile_path = profile;
        }
        self
    }

    /// Check that the winners corpus is configured.
    pub fn require_winners(&self) -> Result<&Path> {
        self.winners_path.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "No winners corpus given. Pass --winners <path> or set LYRICBENCH_WINNERS \
                 in your .env file."
            )
        })
    }

    /// Check that both corpora are configured.
    pub fn require_corpora(&self) -> Result<(&Path, &Path)> {
        let winners = self.require_winners()?;
        let candidates = self.candidates_path.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "No candidate corpus given. Pass --candidates <path> or set \
                 LYRICBENCH_CANDIDATES in your .env file."
            )
        })?;
        Ok((winners, candidates))
    }

    /// The profile to score with: the configured file, or the default.
    pub fn profile(&self) -> Result<StylometryProfile> {
        match &self.profile_path {
            Some(path) => StylometryProfile::from_json_file(path),
            None => Ok(StylometryProfile::default()),
        }
    }
}
