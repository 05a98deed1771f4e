// Output formatting: CSV ranking, detailed report and terminal display.

pub mod csv;
pub mod report;
pub mod terminal;

/// Format a score with three decimals, rounding exact halves up.
///
/// `{:.3}` rounds an exact half to even, so 0.0625 would print as 0.062. An
/// f64 lands exactly halfway between two thousandths only when it is an odd
/// multiple of 1/16, and those are the values rounded away from zero here.
pub fn fixed3(value: f64) -> String {
    // Scaling by 16 is exact, so this only matches true ties
    let sixteenths = value.abs() * 16.0;
    if sixteenths.fract() == 0.0 && sixteenths % 2.0 == 1.0 {
        let thousandths = (value.abs() * 1000.0).ceil();
        format!("{:.3}", value.signum() * thousandths / 1000.0)
    } else {
        format!("{value:.3}")
    }
}

/// Shorten an artist name for the table column, marking the cut with "...".
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars).collect();
    format!("{kept}...")
}
