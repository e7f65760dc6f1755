//! Stress-shape classification.
//!
//! A shape is one digit per syllable: '2' primary, '1' secondary, '0'
//! unstressed. Respellings mark syllables with typographic glyphs
//! (`"` primary, `` ` `` secondary, `*` unstressed), so the respelling of
//! "guarantee" has shape "201". Phoneme strings produce an extended shape
//! where each consonant run contributes a literal 'C'.

use std::fmt;

use super::arpabet::{self, SymbolClass};

/// Diacritic for primary stress (combining acute accent).
pub const ACUTE: char = '\u{0301}';
/// Diacritic for secondary stress (combining grave accent).
pub const GRAVE: char = '\u{0300}';

/// A typographic stress glyph closing a syllable cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressGlyph {
    Primary,
    Secondary,
    Unstressed,
}

impl StressGlyph {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '"' => Some(StressGlyph::Primary),
            '`' => Some(StressGlyph::Secondary),
            '*' => Some(StressGlyph::Unstressed),
            _ => None,
        }
    }

    pub fn digit(self) -> char {
        match self {
            StressGlyph::Primary => '2',
            StressGlyph::Secondary => '1',
            StressGlyph::Unstressed => '0',
        }
    }

    /// The combining mark fused onto a stressed vowel, if any.
    pub fn diacritic(self) -> Option<char> {
        match self {
            StressGlyph::Primary => Some(ACUTE),
            StressGlyph::Secondary => Some(GRAVE),
            StressGlyph::Unstressed => None,
        }
    }
}

pub fn is_stress_glyph(c: char) -> bool {
    StressGlyph::from_char(c).is_some()
}

pub fn is_stress_diacritic(c: char) -> bool {
    c == ACUTE || c == GRAVE
}

/// Syllable stress signature of a typographic respelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StressShape(String);

impl StressShape {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of syllable clusters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when no syllable carries any stress.
    pub fn is_unstressed(&self) -> bool {
        self.0.chars().all(|d| d == '0')
    }

    pub fn primary_count(&self) -> usize {
        self.0.chars().filter(|&d| d == '2').count()
    }

    /// The shape with every secondary stress read as unstressed.
    pub fn downgrade_secondary(&self) -> StressShape {
        StressShape(self.0.replace('1', "0"))
    }

    /// The shape with every secondary stress read as primary.
    pub fn upgrade_secondary(&self) -> StressShape {
        StressShape(self.0.replace('1', "2"))
    }

    /// The shape minus its final syllable.
    pub fn without_last(&self) -> StressShape {
        let mut s = self.0.clone();
        s.pop();
        StressShape(s)
    }
}

impl fmt::Display for StressShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the stress shape of a typographic respelling.
///
/// Each glyph closes one cluster. A final cluster with no glyph after it is
/// unstressed. Returns `None` for an empty respelling.
pub fn shape(respelling: &str) -> Option<StressShape> {
    let last = respelling.chars().last()?;

    let mut digits: String = respelling
        .chars()
        .filter_map(StressGlyph::from_char)
        .map(StressGlyph::digit)
        .collect();
    if !is_stress_glyph(last) {
        digits.push('0');
    }
    Some(StressShape(digits))
}

/// Phoneme clusters of one pronunciation and their extended shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeClusters {
    /// Space-joined symbols per cluster, e.g. `["K L", "AH1", "S T", "ER0"]`
    pub clusters: Vec<String>,
    /// One character per cluster: 'C' for a consonant run, else the vowel's digit
    pub shape: String,
}

/// Split a phoneme string into clusters.
///
/// Consecutive consonants merge into one cluster; each vowel stands alone.
/// The walk starts inside an (empty) consonant cluster, so a vowel-initial
/// word begins with an empty 'C' cluster: `AY1 D AH0 L` gives "C1C0C".
pub fn phoneme_clusters(pronunciation: &str) -> Option<PhonemeClusters> {
    let symbols: Vec<&str> = pronunciation.split_whitespace().collect();
    if symbols.is_empty() {
        return None;
    }

    let mut clusters = Vec::new();
    let mut shape = String::new();
    let mut cluster: Vec<&str> = Vec::new();
    let mut prev = SymbolClass::Consonant;

    for symbol in symbols {
        let current = arpabet::classify(symbol);
        if prev == SymbolClass::Consonant && current == SymbolClass::Consonant {
            cluster.push(symbol);
        } else {
            close_cluster(&cluster, prev, &mut clusters, &mut shape);
            cluster = vec![symbol];
        }
        prev = current;
    }
    close_cluster(&cluster, prev, &mut clusters, &mut shape);

    Some(PhonemeClusters { clusters, shape })
}

fn close_cluster(
    cluster: &[&str],
    class: SymbolClass,
    clusters: &mut Vec<String>,
    shape: &mut String,
) {
    clusters.push(cluster.join(" "));
    match class {
        SymbolClass::Consonant => shape.push('C'),
        SymbolClass::Vowel => {
            let digit = cluster
                .first()
                .and_then(|v| arpabet::stress_digit(v))
                .unwrap_or('0');
            shape.push(digit);
        }
    }
}
