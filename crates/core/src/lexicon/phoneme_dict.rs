//! Phoneme-coded pronouncing dictionary (CMU format).
//!
//! Format: one entry per line, `WORD  PH1 PH2 PH3 ...`, vowels carrying a
//! stress digit (0 none, 1 primary, 2 secondary). Lines starting with
//! ";;;" are comments; extra pronunciations are listed as `word(2)`,
//! `word(3)`, ...

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::ParseError;
use crate::language::shape::{phoneme_clusters, PhonemeClusters};

/// Extended shapes of single-syllable pronunciations.
const MONOSYLLABLE_SHAPES: &[&str] = &["C0", "C1", "C0C", "C1C"];

/// Lookup filters.
#[derive(Debug, Clone)]
pub struct PhonemeDictConfig {
    /// Hide monosyllables (is, it, for, ...)
    pub ignore_mono: bool,
    /// Hide words whose variants differ in stress (record: noun vs verb)
    pub ignore_dupls: bool,
}

impl Default for PhonemeDictConfig {
    fn default() -> Self {
        Self {
            ignore_mono: true,
            ignore_dupls: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PhonemeDictionary {
    /// Lowercased key (with any `(n)` suffix) → phoneme string
    entries: HashMap<String, String>,
    config: PhonemeDictConfig,
}

impl PhonemeDictionary {
    pub fn open(path: &Path, config: PhonemeDictConfig) -> Result<Self> {
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to open phoneme dictionary: {}", path.display()))?;
        let dict = Self::from_reader(file, config)?;
        log::info!("Loaded {} pronunciations from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Parse from any byte source. Lines that are not valid UTF-8 or have no
    /// phoneme field are skipped.
    pub fn from_reader(mut reader: impl Read, config: PhonemeDictConfig) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let mut entries = HashMap::new();
        for (i, raw) in bytes.split(|&b| b == b'\n').enumerate() {
            match parse_line(raw, i + 1) {
                Ok(Some((word, pronunciation))) => {
                    entries.insert(word, pronunciation);
                }
                Ok(None) => {}
                Err(e) => log::debug!("Skipping phoneme line: {}", e),
            }
        }
        Ok(Self { entries, config })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw phoneme string for an exact key such as "record" or "record(2)".
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_lowercase()).map(String::as_str)
    }

    /// The word's pronunciation after the configured filters.
    pub fn pronunciation(&self, word: &str) -> Option<&str> {
        let word = word.to_lowercase();
        let pronunciation = self.entries.get(&word)?;
        let clusters = phoneme_clusters(pronunciation)?;

        if self.config.ignore_mono && is_monosyllable(&clusters.shape) {
            return None;
        }
        if self.config.ignore_dupls && self.has_stress_variants(&word, &clusters.shape) {
            return None;
        }
        Some(pronunciation)
    }

    /// Extended stress shape of the filtered pronunciation.
    pub fn stress_shape(&self, word: &str) -> Option<String> {
        self.pronunciation(word)
            .and_then(phoneme_clusters)
            .map(|c| c.shape)
    }

    pub fn clusters(&self, word: &str) -> Option<PhonemeClusters> {
        self.pronunciation(word).and_then(phoneme_clusters)
    }

    /// True when an indexed variant `word(n)` has a different shape.
    ///
    /// Depending on the dictionary release the first variant is `(1)` or
    /// `(2)`, so a missing `(1)` falls through to `(2)`.
    pub fn has_stress_variants(&self, word: &str, shape: &str) -> bool {
        let word = word.to_lowercase();
        let mut i = 1;
        loop {
            let key = format!("{}({})", word, i);
            let Some(variant) = self.entries.get(&key) else {
                if i == 1 {
                    i += 1;
                    continue;
                }
                return false;
            };
            let variant_shape = phoneme_clusters(variant).map(|c| c.shape);
            if variant_shape.as_deref() != Some(shape) {
                return true;
            }
            i += 1;
        }
    }
}

/// Parse one line into `(key, phonemes)`. Comments and blank lines give `None`.
fn parse_line(raw: &[u8], line: usize) -> Result<Option<(String, String)>, ParseError> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let text = std::str::from_utf8(raw).map_err(|_| ParseError::InvalidEncoding { line })?;
    if text.trim().is_empty() || text.starts_with(";;;") {
        return Ok(None);
    }

    let (word, rest) = text
        .split_once(' ')
        .ok_or(ParseError::MissingFields { line })?;
    let pronunciation = rest.split('#').next().unwrap_or("").trim();
    if word.is_empty() || pronunciation.is_empty() {
        return Err(ParseError::MissingFields { line });
    }
    Ok(Some((word.to_lowercase(), pronunciation.to_string())))
}

pub fn is_monosyllable(shape: &str) -> bool {
    MONOSYLLABLE_SHAPES.contains(&shape)
}
