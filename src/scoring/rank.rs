// Candidate ranking: score every candidate against the benchmark, best first.
//
// Candidates are independent: each one is extracted and scored on its own
// against the read-only model. The final ordering is a stable descending sort
// on similarity, so equal scores keep their input order.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::benchmark::BenchmarkModel;
use crate::config::FeatureWeights;
use crate::corpus::Corpus;
use crate::features::traits::FeatureExtractor;
use crate::features::vector::FeatureVector;

/// A candidate text with its features and similarity to the winners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub id: String,
    pub features: FeatureVector,
    /// Weighted similarity in (0, 1]
    pub similarity: f64,
}

/// Score and rank every candidate, highest similarity first.
pub fn rank(
    candidates: &Corpus,
    model: &BenchmarkModel,
    extractor: &dyn FeatureExtractor,
    weights: &FeatureWeights,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|(id, text)| {
            let features = extractor.extract(text);
            ScoredCandidate {
                id: id.to_string(),
                features,
                similarity: model.score(&features, weights),
            }
        })
        .collect();

    sort_by_similarity(&mut scored);

    if let Some(top) = scored.first() {
        info!(
            candidates = scored.len(),
            top = top.id.as_str(),
            top_similarity = format!("{:.3}", top.similarity),
            "Ranked candidates"
        );
    }

    scored
}

/// Stable descending sort on similarity.
pub fn sort_by_similarity(scored: &mut [ScoredCandidate]) {
    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
