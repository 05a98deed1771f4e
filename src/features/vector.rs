// FeatureVector: the stylometric representation of a single text.
//
// Four unitless scores, in practice all within [0, 1]. Vectors are produced
// once per text and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One of the four stylometric features, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Ttr,
    RepetitionDensity,
    ThemeScore,
    StructureScore,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Ttr,
        Feature::RepetitionDensity,
        Feature::ThemeScore,
        Feature::StructureScore,
    ];

    /// Label used in the detailed report.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Ttr => "TTR",
            Feature::RepetitionDensity => "Densità ripetizioni",
            Feature::ThemeScore => "Score temi",
            Feature::StructureScore => "Score struttura",
        }
    }

    fn index(&self) -> usize {
        match self {
            Feature::Ttr => 0,
            Feature::RepetitionDensity => 1,
            Feature::ThemeScore => 2,
            Feature::StructureScore => 3,
        }
    }
}

/// Stylometric feature vector of a text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    /// Type-token ratio: distinct words / total words
    pub ttr: f64,
    /// Distinct words occurring more than once / total words
    pub repetition_density: f64,
    /// Fraction of profile theme words found in the normalized text
    pub theme_score: f64,
    /// Repeated phrases per sentence, scaled and capped at 1.0
    pub structure_score: f64,
}

impl FeatureVector {
    pub fn zero() -> Self {
        Self::from_array([0.0; 4])
    }

    pub fn from_array(values: [f64; 4]) -> Self {
        Self {
            ttr: values[0],
            repetition_density: values[1],
            theme_score: values[2],
            structure_score: values[3],
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [
            self.ttr,
            self.repetition_density,
            self.theme_score,
            self.structure_score,
        ]
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.as_array()[feature.index()]
    }
}
