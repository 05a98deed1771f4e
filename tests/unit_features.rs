// Unit tests for the feature extractor.
//
// Tests isolated pure functions: feature ranges, the reference winner
// scenario, theme-score monotonicity and custom profiles.

use lyricbench::config::StylometryProfile;
use lyricbench::features::extract::StylometricExtractor;
use lyricbench::features::traits::FeatureExtractor;

fn extract(text: &str) -> lyricbench::features::vector::FeatureVector {
    StylometricExtractor::default().extract(text)
}

// ============================================================
// Ranges
// ============================================================

#[test]
fn ttr_in_unit_interval_for_varied_texts() {
    let texts = [
        "",
        "ciao",
        "ciao ciao ciao ciao",
        "Nel blu dipinto di blu, felice di stare lassù.",
        "E la luna bussò alle porte del buio\nfammi entrare gli disse lui",
    ];
    for text in texts {
        let v = extract(text);
        assert!(v.ttr > 0.0 && v.ttr <= 1.0, "ttr {} for {text:?}", v.ttr);
        assert!((0.0..=1.0).contains(&v.repetition_density));
        assert!((0.0..=1.0).contains(&v.theme_score));
        assert!((0.0..=1.0).contains(&v.structure_score));
    }
}

#[test]
fn ttr_is_one_only_without_repeats() {
    assert_eq!(extract("uno due tre").ttr, 1.0);
    assert!(extract("uno due uno").ttr < 1.0);
}

#[test]
fn repetition_density_zero_without_repeats() {
    assert_eq!(extract("uno due tre").repetition_density, 0.0);
}

#[test]
fn repetition_density_counts_types_not_occurrences() {
    // "la" five times is still one repeated type among 6 words
    let v = extract("la la la la la vita");
    assert!((v.repetition_density - 1.0 / 6.0).abs() < 1e-12);
}

#[test]
fn punctuation_splits_words() {
    // "cuore,cuore" normalizes to two words
    let v = extract("cuore,cuore");
    assert!((v.ttr - 0.5).abs() < 1e-12);
    assert!((v.repetition_density - 0.5).abs() < 1e-12);
}

// ============================================================
// Reference scenario
// ============================================================

#[test]
fn reference_winner_features() {
    let v = extract("amore amore vita amore");
    assert!((v.ttr - 0.5).abs() < 1e-12);
    assert!((v.repetition_density - 0.25).abs() < 1e-12);
    assert!((v.theme_score - 2.0 / 24.0).abs() < 1e-12);
    assert_eq!(v.structure_score, 0.0);
}

// ============================================================
// Theme score
// ============================================================

#[test]
fn theme_score_monotonic_as_themes_are_added() {
    let mut text = String::from("una canzone qualunque");
    let mut previous = extract(&text).theme_score;
    for theme in ["notte", "mare", "amorevole", "stelle", "notte", "luna"] {
        text.push(' ');
        text.push_str(theme);
        let current = extract(&text).theme_score;
        assert!(current >= previous, "{current} < {previous} after {theme}");
        previous = current;
    }
    // notte, mare, amore (in amorevole), stelle, luna
    assert!((previous - 5.0 / 24.0).abs() < 1e-12);
}

#[test]
fn theme_score_all_themes_is_one() {
    let text = StylometryProfile::default().themes.join(" ");
    assert_eq!(extract(&text).theme_score, 1.0);
}

#[test]
fn custom_profile_themes() {
    let profile = StylometryProfile {
        themes: vec!["love".to_string(), "Heart".to_string()],
        ..Default::default()
    };
    let extractor = StylometricExtractor::new(&profile);
    let v = extractor.extract("All you need is love");
    assert!((v.theme_score - 0.5).abs() < 1e-12);
    // Theme words are lowercased to match normalized text
    let v = extractor.extract("HEART of glass, love");
    assert_eq!(v.theme_score, 1.0);
}

// ============================================================
// Structure score
// ============================================================

#[test]
fn refrain_on_same_line_scores() {
    let v = extract("vieni via con me, vieni via con me");
    assert_eq!(v.structure_score, 1.0);
}

#[test]
fn refrain_on_separate_lines_ignored_by_default() {
    let v = extract("vieni via con me\nvieni via con me");
    assert_eq!(v.structure_score, 0.0);
}

#[test]
fn refrain_across_lines_with_profile_flag() {
    let profile = StylometryProfile {
        cross_lines: true,
        ..Default::default()
    };
    let v = StylometricExtractor::new(&profile).extract("vieni via con me\nvieni via con me");
    assert_eq!(v.structure_score, 1.0);
}

#[test]
fn extraction_is_deterministic() {
    let text = "Volare, oh oh. Cantare, oh oh oh oh! Nel blu dipinto di blu.";
    assert_eq!(extract(text), extract(text));
}
