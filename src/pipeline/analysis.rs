// Single-pass benchmark analysis.
//
// Strategy: extract every winner once to build the benchmark model, then
// extract and score each candidate independently against that read-only
// model and rank them. No state survives between runs, so the same inputs
// always produce the same output.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::StylometryProfile;
use crate::corpus::Corpus;
use crate::features::extract::StylometricExtractor;
use crate::scoring::benchmark::BenchmarkModel;
use crate::scoring::rank::{self, ScoredCandidate};

/// Result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub benchmark: BenchmarkModel,
    /// Candidates ordered by descending similarity
    pub ranked: Vec<ScoredCandidate>,
}

/// Build the benchmark from `winners` and rank `candidates` against it.
pub fn run(winners: &Corpus, candidates: &Corpus, profile: &StylometryProfile) -> Analysis {
    info!(
        winners = winners.len(),
        candidates = candidates.len(),
        themes = profile.themes.len(),
        "Starting analysis"
    );

    let extractor = StylometricExtractor::new(profile);
    let benchmark = BenchmarkModel::build(winners, &extractor, profile);
    let ranked = rank::rank(candidates, &benchmark, &extractor, &profile.weights);

    Analysis { benchmark, ranked }
}
