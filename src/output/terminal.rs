// Colored terminal output for rankings, feature tables and the benchmark.
//
// Everything here is presentation only. The CSV and detailed report renderers
// stay plain text so they can be redirected to files unchanged.

use colored::Colorize;

use crate::features::vector::{Feature, FeatureVector};
use crate::scoring::benchmark::BenchmarkModel;
use crate::scoring::rank::ScoredCandidate;

/// Display a ranked table of candidates with per-feature values.
pub fn display_ranking(ranked: &[ScoredCandidate]) {
    if ranked.is_empty() {
        println!("No candidates to rank.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Similarity to winners ({} candidates) ===", ranked.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<30} {:>6}  {:>5}  {:>5}  {:>5}  {:>5}",
        "Rank".dimmed(),
        "Artist".dimmed(),
        "Score".dimmed(),
        "TTR".dimmed(),
        "Rep".dimmed(),
        "Theme".dimmed(),
        "Struct".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for (i, candidate) in ranked.iter().enumerate() {
        let f = &candidate.features;
        println!(
            "  {:>4}. {:<30} {}  {:>5.3}  {:>5.3}  {:>5.3}  {:>5.3}",
            i + 1,
            super::truncate_chars(&candidate.id, 27),
            colorize_similarity(candidate.similarity),
            f.ttr,
            f.repetition_density,
            f.theme_score,
            f.structure_score,
        );
    }
    println!();
}

/// Display feature vectors for a set of texts, in input order.
pub fn display_features(rows: &[(String, FeatureVector)]) {
    for (id, vector) in rows {
        println!("{}", id.bold());
        for feature in Feature::ALL {
            println!("  {:<22} {}", feature.label(), super::fixed3(vector.get(feature)));
        }
    }
}

/// Display the benchmark statistics as a mean ± stddev table.
pub fn display_benchmark(model: &BenchmarkModel) {
    println!(
        "\n{}",
        format!("=== Benchmark ({} winners) ===", model.corpus_size).bold()
    );
    println!();
    println!(
        "  {:<22} {:>6}  {:>6}",
        "Feature".dimmed(),
        "Mean".dimmed(),
        "Stddev".dimmed()
    );
    for feature in Feature::ALL {
        println!(
            "  {:<22} {:>6.3}  {:>6.3}",
            feature.label(),
            model.mean.get(feature),
            model.stddev.get(feature)
        );
    }
    println!();
}

/// Color a similarity score by how close it is to the winners.
fn colorize_similarity(similarity: f64) -> colored::ColoredString {
    let text = format!("{similarity:>6.3}");
    if similarity >= 0.75 {
        text.green().bold()
    } else if similarity >= 0.5 {
        text.yellow()
    } else {
        text.dimmed()
    }
}
