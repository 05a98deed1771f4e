// Benchmark model: what a "typical winner" looks like, feature by feature.
//
// The model is the per-feature mean and population standard deviation of the
// winners' feature vectors. A candidate is compared feature by feature:
//
//   z = |x - mean| / stddev,   similarity = exp(-z)
//
// and the four similarities are combined with the profile weights. Because
// the weights sum to 1.0, a candidate sitting exactly on the mean scores 1.0,
// and every score stays in (0, 1].
//
// The model is built once per run and only read afterwards.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{FeatureWeights, StylometryProfile};
use crate::corpus::Corpus;
use crate::features::traits::FeatureExtractor;
use crate::features::vector::{Feature, FeatureVector};

/// Mean and standard deviation of each feature across the benchmark corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkModel {
    pub mean: FeatureVector,
    /// Never 0: degenerate components are replaced by the profile fallback
    pub stddev: FeatureVector,
    /// Number of texts the statistics were computed from
    pub corpus_size: usize,
}

impl BenchmarkModel {
    /// Extract every text in the corpus and summarize the resulting vectors.
    pub fn build(
        corpus: &Corpus,
        extractor: &dyn FeatureExtractor,
        profile: &StylometryProfile,
    ) -> Self {
        let vectors: Vec<FeatureVector> = corpus
            .iter()
            .map(|(_, text)| extractor.extract(text))
            .collect();
        let model = Self::from_vectors(&vectors, profile);

        info!(
            winners = model.corpus_size,
            mean_ttr = format!("{:.3}", model.mean.ttr),
            mean_theme = format!("{:.3}", model.mean.theme_score),
            "Built benchmark model"
        );

        model
    }

    /// Summarize precomputed feature vectors.
    ///
    /// An empty slice yields a zero mean and fallback deviations rather than NaN.
    pub fn from_vectors(vectors: &[FeatureVector], profile: &StylometryProfile) -> Self {
        if vectors.is_empty() {
            warn!("Benchmark corpus is empty; using a zero mean and fallback deviations");
            return Self {
                mean: FeatureVector::zero(),
                stddev: FeatureVector::from_array([profile.stddev_fallback; 4]),
                corpus_size: 0,
            };
        }

        let n = vectors.len() as f64;
        let mut mean = [0.0; 4];
        for vector in vectors {
            for (acc, value) in mean.iter_mut().zip(vector.as_array()) {
                *acc += value;
            }
        }
        for acc in &mut mean {
            *acc /= n;
        }

        let mut variance = [0.0; 4];
        for vector in vectors {
            for ((acc, value), m) in variance.iter_mut().zip(vector.as_array()).zip(mean) {
                *acc += (value - m).powi(2);
            }
        }

        let stddev = variance.map(|v| {
            let sd = (v / n).sqrt();
            if sd > 0.0 && sd.is_finite() {
                sd
            } else {
                profile.stddev_fallback
            }
        });

        Self {
            mean: FeatureVector::from_array(mean),
            stddev: FeatureVector::from_array(stddev),
            corpus_size: vectors.len(),
        }
    }

    /// Per-feature similarity `exp(-z)`, before weighting.
    pub fn feature_similarities(&self, vector: &FeatureVector) -> FeatureVector {
        let mut out = [0.0; 4];
        for (i, feature) in Feature::ALL.iter().enumerate() {
            let z = (vector.get(*feature) - self.mean.get(*feature)).abs()
                / self.stddev.get(*feature);
            out[i] = (-z).exp();
        }
        FeatureVector::from_array(out)
    }

    /// Weighted similarity of a feature vector to the benchmark, in (0, 1].
    pub fn score(&self, vector: &FeatureVector, weights: &FeatureWeights) -> f64 {
        self.feature_similarities(vector)
            .as_array()
            .iter()
            .zip(weights.as_array())
            .map(|(similarity, weight)| similarity * weight)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> StylometryProfile {
        StylometryProfile::default()
    }

    #[test]
    fn test_single_vector_uses_fallback() {
        let v = FeatureVector::from_array([0.5, 0.25, 0.1, 0.0]);
        let model = BenchmarkModel::from_vectors(&[v], &profile());
        assert_eq!(model.mean, v);
        assert_eq!(model.stddev, FeatureVector::from_array([0.1; 4]));
        assert_eq!(model.corpus_size, 1);
    }

    #[test]
    fn test_population_stddev() {
        let vectors = [
            FeatureVector::from_array([0.2, 0.0, 0.5, 0.0]),
            FeatureVector::from_array([0.6, 0.0, 0.5, 1.0]),
        ];
        let model = BenchmarkModel::from_vectors(&vectors, &profile());
        assert!((model.mean.ttr - 0.4).abs() < 1e-12);
        // Population (not sample) deviation: sqrt(((0.2)^2 + (0.2)^2) / 2) = 0.2
        assert!((model.stddev.ttr - 0.2).abs() < 1e-12);
        assert!((model.stddev.structure_score - 0.5).abs() < 1e-12);
        // Constant features fall back
        assert_eq!(model.stddev.repetition_density, 0.1);
        assert_eq!(model.stddev.theme_score, 0.1);
    }

    #[test]
    fn test_small_nonzero_stddev_is_kept() {
        let vectors = [
            FeatureVector::from_array([0.50, 0.0, 0.0, 0.0]),
            FeatureVector::from_array([0.52, 0.0, 0.0, 0.0]),
        ];
        let model = BenchmarkModel::from_vectors(&vectors, &profile());
        assert!((model.stddev.ttr - 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_empty_corpus_is_finite() {
        let model = BenchmarkModel::from_vectors(&[], &profile());
        assert_eq!(model.mean, FeatureVector::zero());
        assert_eq!(model.stddev, FeatureVector::from_array([0.1; 4]));
        let score = model.score(
            &FeatureVector::from_array([1.0, 0.5, 0.2, 0.0]),
            &FeatureWeights::default(),
        );
        assert!(score.is_finite());
        assert!(score > 0.0 && score <= 1.0);
    }

    #[test]
    fn test_score_at_mean_is_one() {
        let v = FeatureVector::from_array([0.7, 0.1, 0.25, 0.3]);
        let model = BenchmarkModel::from_vectors(&[v], &profile());
        let score = model.score(&v, &FeatureWeights::default());
        assert!((score - 1.0).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn test_score_weights_each_feature() {
        let model = BenchmarkModel::from_vectors(&[FeatureVector::zero()], &profile());
        // Only the theme feature deviates, by one stddev
        let v = FeatureVector::from_array([0.0, 0.0, 0.1, 0.0]);
        let score = model.score(&v, &FeatureWeights::default());
        let expected = 0.25 + 0.25 + 0.30 * (-1.0f64).exp() + 0.20;
        assert!((score - expected).abs() < 1e-12, "got {score}, expected {expected}");
    }

    #[test]
    fn test_feature_similarities_decay_with_distance() {
        let model = BenchmarkModel::from_vectors(&[FeatureVector::zero()], &profile());
        let near = model.feature_similarities(&FeatureVector::from_array([0.05; 4]));
        let far = model.feature_similarities(&FeatureVector::from_array([0.5; 4]));
        for feature in Feature::ALL {
            assert!(near.get(feature) > far.get(feature));
            assert!(far.get(feature) > 0.0);
        }
    }
}
