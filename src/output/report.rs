// Detailed plain-text report: similarity and the four raw features per artist.

use std::fmt::Write;

use super::fixed3;
use crate::features::vector::Feature;
use crate::scoring::rank::ScoredCandidate;

/// Render the detailed analysis, in ranking order, values to three decimals.
pub fn render_details(ranked: &[ScoredCandidate]) -> String {
    let mut out = String::from("DETTAGLI ANALISI:\n");
    for candidate in ranked {
        // Writing to a String cannot fail
        let _ = writeln!(out, "\n{}:", candidate.id);
        let _ = writeln!(
            out,
            "- Similarità con i vincitori: {}",
            fixed3(candidate.similarity)
        );
        for feature in Feature::ALL {
            let _ = writeln!(
                out,
                "- {}: {}",
                feature.label(),
                fixed3(candidate.features.get(feature))
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::vector::FeatureVector;

    #[test]
    fn test_render_details() {
        let ranked = vec![ScoredCandidate {
            id: "Brunori Sas".to_string(),
            features: FeatureVector::from_array([0.5, 0.25, 2.0 / 24.0, 0.0]),
            similarity: 1.0,
        }];
        let expected = "DETTAGLI ANALISI:\n\
                        \n\
                        Brunori Sas:\n\
                        - Similarità con i vincitori: 1.000\n\
                        - TTR: 0.500\n\
                        - Densità ripetizioni: 0.250\n\
                        - Score temi: 0.083\n\
                        - Score struttura: 0.000\n";
        assert_eq!(render_details(&ranked), expected);
    }

    #[test]
    fn test_render_details_rounds_ties_up() {
        // 160 words, 50 distinct: ttr 0.3125; 10 repeated types: 0.0625
        let ranked = vec![ScoredCandidate {
            id: "Irama".to_string(),
            features: FeatureVector::from_array([50.0 / 160.0, 10.0 / 160.0, 0.0, 0.0]),
            similarity: 0.5,
        }];
        let details = render_details(&ranked);
        assert!(details.contains("- TTR: 0.313\n"), "{details}");
        assert!(details.contains("- Densità ripetizioni: 0.063\n"), "{details}");
    }
}
