use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Part-of-speech tags attached to one respelling (e.g. `{"n.", "v."}`).
pub type PosSet = BTreeSet<String>;

/// One raw dictionary entry as produced by the document extractor.
///
/// Serialized as a two-element JSON array `[word_line, gloss_line]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawEntry(pub String, pub String);

impl RawEntry {
    pub fn new(word_line: &str, gloss_line: &str) -> Self {
        Self(word_line.to_string(), gloss_line.to_string())
    }

    /// Word aliases separated by `"; "`, e.g. "ACETONAEMIA; ACETONEMIA".
    pub fn word_line(&self) -> &str {
        &self.0
    }

    /// Free text holding the respellings and part-of-speech qualifiers.
    pub fn gloss_line(&self) -> &str {
        &self.1
    }
}

/// A single respelling candidate for a word, with its grammatical evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Typographic respelling, e.g. `Con"tent`
    pub respelling: String,
    /// Tags accumulated across every entry carrying this respelling
    pub pos: PosSet,
}

impl Candidate {
    pub fn new<I, S>(respelling: &str, pos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            respelling: respelling.to_string(),
            pos: pos.into_iter().map(Into::into).collect(),
        }
    }
}

/// All candidate respellings collected for one word, in first-seen order.
///
/// Order matters: the pairwise disambiguation passes resolve ties by it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPronunciationSet {
    pub candidates: Vec<Candidate>,
}

impl WordPronunciationSet {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Merge a respelling into the set: identical respellings union their tags,
    /// new respellings are appended.
    pub fn merge(&mut self, respelling: &str, pos: &PosSet) {
        match self
            .candidates
            .iter_mut()
            .find(|c| c.respelling == respelling)
        {
            Some(existing) => existing.pos.extend(pos.iter().cloned()),
            None => self.candidates.push(Candidate {
                respelling: respelling.to_string(),
                pos: pos.clone(),
            }),
        }
    }
}

/// A word's entry in the canonical dictionary.
///
/// On disk this is either a bare string or an object mapping each
/// stress-marked spelling to the tags it applies to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CanonicalEntry {
    Single(String),
    ByPartOfSpeech(BTreeMap<String, Vec<String>>),
}

impl CanonicalEntry {
    /// Pick the spelling for a dictionary tag such as `"n."`.
    ///
    /// A `Single` entry ignores the tag.
    pub fn spelling_for(&self, tag: Option<&str>) -> Option<&str> {
        match self {
            CanonicalEntry::Single(spelling) => Some(spelling.as_str()),
            CanonicalEntry::ByPartOfSpeech(variants) => {
                let tag = tag?;
                variants
                    .iter()
                    .find(|(_, tags)| tags.iter().any(|t| t == tag))
                    .map(|(spelling, _)| spelling.as_str())
            }
        }
    }
}
