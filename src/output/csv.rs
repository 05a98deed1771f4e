// CSV rendering of the ranking: one `artist,score` row per candidate.

use super::fixed3;
use crate::scoring::rank::ScoredCandidate;

pub const HEADER: &str = "Artista,Similarità con i vincitori";

/// Render the ranking as CSV, scores to three decimals.
pub fn render_ranking(ranked: &[ScoredCandidate]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    for candidate in ranked {
        out.push_str(&escape_field(&candidate.id));
        out.push(',');
        out.push_str(&fixed3(candidate.similarity));
        out.push('\n');
    }
    out
}

/// Quote a field only when it would otherwise break the row.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
