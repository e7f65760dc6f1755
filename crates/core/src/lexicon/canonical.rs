//! The canonical dictionary: word → stress-marked spelling(s).
//!
//! Built once from raw entries, read-only afterwards. On disk it is a JSON
//! object keyed by uppercase word:
//!
//! ```json
//! {
//!   "CAT": "cát",
//!   "CONTENT": { "contént": ["v."], "cóntent": ["n."] }
//! }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::types::{CanonicalEntry, RawEntry, WordPronunciationSet};

use super::diacritic::place_stress;
use super::disambiguate::disambiguate;
use super::entry::parse_entry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalDictionary {
    entries: BTreeMap<String, CanonicalEntry>,
}

impl CanonicalDictionary {
    /// Build the dictionary from raw `(word-line, gloss-line)` entries.
    pub fn build(entries: &[RawEntry]) -> Self {
        let collected = collect_pronunciations(entries);
        log::info!(
            "Collected pronunciations for {} words from {} entries",
            collected.len(),
            entries.len()
        );

        let mut dict = Self::default();
        let mut ambiguous = 0usize;
        for (word, set) in &collected {
            let reduced = disambiguate(set);
            if let Some(entry) = canonicalize(word, &reduced) {
                if matches!(entry, CanonicalEntry::ByPartOfSpeech(_)) {
                    ambiguous += 1;
                }
                dict.entries.insert(word.clone(), entry);
            }
        }
        log::info!(
            "Built canonical dictionary: {} words ({} keyed by part of speech)",
            dict.len(),
            ambiguous
        );
        dict
    }

    /// Look up a word (case-insensitive).
    pub fn get(&self, word: &str) -> Option<&CanonicalEntry> {
        self.entries.get(&word.to_uppercase())
    }

    pub fn insert(&mut self, word: &str, entry: CanonicalEntry) {
        self.entries.insert(word.to_uppercase(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CanonicalEntry)> {
        self.entries.iter()
    }

    /// Write the dictionary as pretty JSON, atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

        let tmp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, self)?;
            writer.flush()?;
        }
        tmp.persist(path)
            .with_context(|| format!("Failed to write dictionary: {}", path.display()))?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;
        let dict: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid dictionary JSON: {}", path.display()))?;
        log::debug!("Loaded {} words from {}", dict.len(), path.display());
        Ok(dict)
    }
}

/// Group every entry's respellings by word, merging duplicates.
///
/// Entries that fail to parse, and words no respelling spells, are skipped.
pub fn collect_pronunciations(entries: &[RawEntry]) -> BTreeMap<String, WordPronunciationSet> {
    let mut words: BTreeMap<String, WordPronunciationSet> = BTreeMap::new();
    for entry in entries {
        let parsed = match parse_entry(entry) {
            Ok(p) => p,
            Err(e) => {
                log::debug!("Skipping entry '{}': {}", entry.word_line(), e);
                continue;
            }
        };
        for word in &parsed.words {
            match parsed.respelling_for(word) {
                Ok(respelling) => words
                    .entry(word.clone())
                    .or_default()
                    .merge(respelling, &parsed.pos),
                Err(e) => log::debug!("{}", e),
            }
        }
    }
    words
}

/// Turn a reduced candidate set into its dictionary value.
pub fn canonicalize(word: &str, set: &WordPronunciationSet) -> Option<CanonicalEntry> {
    match set.candidates.as_slice() {
        [] => None,
        [only] => Some(CanonicalEntry::Single(place_stress(&only.respelling))),
        many => {
            let mut variants: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for candidate in many {
                let tags = variants.entry(place_stress(&candidate.respelling)).or_default();
                for tag in &candidate.pos {
                    if !tags.contains(tag) {
                        tags.push(tag.clone());
                    }
                }
            }
            let mut seen = HashSet::new();
            if variants.values().flatten().any(|tag| !seen.insert(tag)) {
                log::warn!("{}: several variants share a part-of-speech tag", word);
            }
            Some(CanonicalEntry::ByPartOfSpeech(variants))
        }
    }
}

/// Read a JSON array of `[word_line, gloss_line]` pairs.
///
/// Elements that are not a pair of strings are skipped.
pub fn load_entries(path: &Path) -> Result<Vec<RawEntry>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open entries: {}", path.display()))?;
    let values: Vec<serde_json::Value> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid entries JSON: {}", path.display()))?;

    let total = values.len();
    let mut entries = Vec::with_capacity(total);
    for (i, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<RawEntry>(value) {
            Ok(entry) => entries.push(entry),
            Err(e) => log::debug!("Skipping malformed entry {}: {}", i, e),
        }
    }
    if entries.len() < total {
        log::info!("Skipped {} malformed entries", total - entries.len());
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::shape::ACUTE;

    fn sample_entries() -> Vec<RawEntry> {
        vec![
            RawEntry::new("CAT", "Cat, n. [AS. cat.]"),
            RawEntry::new("CONTENT", "Con*tent\", a. [F. content.]"),
            RawEntry::new("CONTENT", "Con\"tent, n."),
            RawEntry::new("CONTENT", "Con*tent\", v. t."),
            RawEntry::new("TEENY", "Tee\"ny, a."),
            RawEntry::new("TEENY", "Teen\"y, a."),
            RawEntry::new("A-1", "A-1, a."),
        ]
    }

    #[test]
    fn test_collect_merges_entries() {
        let words = collect_pronunciations(&sample_entries());
        let content = &words["CONTENT"];
        assert_eq!(content.len(), 2);
        assert_eq!(content.candidates[0].respelling, "Con*tent\"");
        assert_eq!(content.candidates[0].pos.len(), 2);
        assert!(!words.contains_key("A-1"));
    }

    #[test]
    fn test_build_single_and_mapping() {
        let dict = CanonicalDictionary::build(&sample_entries());
        assert_eq!(dict.get("cat"), Some(&CanonicalEntry::Single("cat".into())));
        assert_eq!(
            dict.get("TEENY"),
            Some(&CanonicalEntry::Single(format!("te{}eny", ACUTE)))
        );
        match dict.get("content") {
            Some(CanonicalEntry::ByPartOfSpeech(m)) => {
                assert_eq!(m[&format!("conte{}nt", ACUTE)], vec!["a.", "v."]);
                assert_eq!(m[&format!("co{}ntent", ACUTE)], vec!["n."]);
            }
            other => panic!("expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_canonicalize_empty() {
        assert!(canonicalize("X", &WordPronunciationSet::default()).is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.json");
        let dict = CanonicalDictionary::build(&sample_entries());
        dict.save(&path).unwrap();

        let reloaded = CanonicalDictionary::load(&path).unwrap();
        assert_eq!(reloaded, dict);
    }

    #[test]
    fn test_load_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(&path, r#"[["CAT", "Cat, n."], ["DOG", "Dog, n."]]"#).unwrap();
        let entries = load_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].word_line(), "DOG");
    }

    #[test]
    fn test_load_entries_skips_malformed_pair() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(
            &path,
            r#"[["CAT", "Cat\", n."], ["BROKEN"], ["A", "B", "C"], [1, "x"], ["DOG", "Dog\", n."]]"#,
        )
        .unwrap();

        let entries = load_entries(&path).unwrap();
        assert_eq!(
            entries,
            vec![RawEntry::new("CAT", "Cat\", n."), RawEntry::new("DOG", "Dog\", n.")]
        );

        let dict = CanonicalDictionary::build(&entries);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("dog"), Some(&CanonicalEntry::Single(format!("do{}g", ACUTE))));
    }

    #[test]
    fn test_load_entries_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(&path, r#"{"CAT": "Cat, n."}"#).unwrap();
        let err = load_entries(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid entries JSON"));
    }

    #[test]
    fn test_collect_skips_alias_without_respelling() {
        let entries = vec![
            RawEntry::new("COLOUR; COLOR", "Col\"or, n."),
            RawEntry::new("CAT", "Cat, n."),
        ];
        let words = collect_pronunciations(&entries);
        assert_eq!(words["COLOR"].candidates[0].respelling, "Col\"or");
        assert!(!words.contains_key("COLOUR"));
        assert!(words.contains_key("CAT"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CanonicalDictionary::load(Path::new("/nonexistent/dict.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to open dictionary"));
    }
}
