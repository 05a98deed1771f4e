// Corpus loading: the in-memory collections of lyrics the pipeline reads.
//
// A corpus is an ordered list of (identifier, text) pairs. Order matters:
// ranking breaks ties by input order, so loaders must be deterministic.
//
// Two on-disk layouts are accepted:
// - a JSON object mapping identifier to text, read in file order
// - a directory of `.txt` files, identifier = file stem, sorted by file name

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::info;

/// Ordered collection of identified texts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    entries: Vec<(String, String)>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.entries.push((id.into(), text.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries as `(identifier, text)` in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, text)| (id.as_str(), text.as_str()))
    }
}

impl<I: Into<String>, T: Into<String>> FromIterator<(I, T)> for Corpus {
    fn from_iter<It: IntoIterator<Item = (I, T)>>(iter: It) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(id, text)| (id.into(), text.into()))
                .collect(),
        }
    }
}

/// Load a corpus from a JSON file or a directory of `.txt` files.
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let corpus = if path.is_dir() {
        load_dir(path)?
    } else {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read corpus {}", path.display()))?;
        parse_json(&raw).with_context(|| format!("Invalid corpus JSON in {}", path.display()))?
    };

    info!(path = %path.display(), texts = corpus.len(), "Loaded corpus");
    Ok(corpus)
}

/// Parse a JSON object of `{"identifier": "text"}` pairs, keeping key order.
pub fn parse_json(raw: &str) -> Result<Corpus> {
    let object: Map<String, Value> =
        serde_json::from_str(raw).context("Corpus must be a JSON object of identifier -> text")?;

    let mut corpus = Corpus::new();
    for (id, value) in object {
        match value {
            Value::String(text) => corpus.push(id, text),
            other => anyhow::bail!(
                "Entry {id:?} must be a string of lyrics, found {}",
                json_kind(&other)
            ),
        }
    }
    Ok(corpus)
}

fn load_dir(dir: &Path) -> Result<Corpus> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut corpus = Corpus::new();
    for path in paths {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            anyhow::bail!("File name is not valid UTF-8: {}", path.display());
        };
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        corpus.push(stem, text);
    }
    Ok(corpus)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_preserves_order() {
        let corpus = parse_json(r#"{"Zeta": "a", "Alfa": "b", "Mu": "c"}"#).unwrap();
        let ids: Vec<&str> = corpus.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["Zeta", "Alfa", "Mu"]);
    }

    #[test]
    fn test_parse_json_rejects_non_string() {
        let err = parse_json(r#"{"A": 3}"#).unwrap_err();
        assert!(err.to_string().contains("a number"), "{err}");
    }

    #[test]
    fn test_parse_json_rejects_array() {
        assert!(parse_json(r#"["a", "b"]"#).is_err());
    }

    #[test]
    fn test_parse_empty_object() {
        assert!(parse_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_load_dir_sorted_by_name() {
        let dir = std::env::temp_dir().join(format!("lyricbench-corpus-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("b.txt"), "secondo").unwrap();
        fs::write(dir.join("a.txt"), "primo").unwrap();
        fs::write(dir.join("notes.md"), "ignored").unwrap();

        let corpus = load_corpus(&dir).unwrap();
        let entries: Vec<(&str, &str)> = corpus.iter().collect();
        assert_eq!(entries, vec![("a", "primo"), ("b", "secondo")]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_corpus(Path::new("/nonexistent/winners.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read corpus"));
    }
}
