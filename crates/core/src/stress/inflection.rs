//! Inflection rules and surface-form restoration.
//!
//! A rule strips a suffix from an inflected word to find its root
//! ("skies" → "sky") and later re-attaches it to the root's stress-marked
//! spelling ("ský" → "skíes"). This is a fixed suffix table, not a stemmer.

use std::ops::Range;

use crate::language::shape::is_stress_diacritic;

/// `(suffix, replacement)`: "skies" minus "ies" plus "y" gives "sky".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InflectionRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
}

const fn rule(suffix: &'static str, replacement: &'static str) -> InflectionRule {
    InflectionRule {
        suffix,
        replacement,
    }
}

/// Tried in order; the first rule whose root is in the dictionary wins.
pub static INFLECTION_RULES: [InflectionRule; 12] = [
    rule("s", ""),
    rule("es", ""),
    rule("ies", "y"),
    rule("ing", ""),
    rule("ed", "e"),
    rule("ed", ""),
    rule("er", ""),
    rule("est", ""),
    rule("er", "e"),
    rule("est", "e"),
    rule("ier", "y"),
    rule("iest", "y"),
];

impl InflectionRule {
    /// Candidate root of a lowercased word, if the word carries this suffix.
    pub fn root_of(&self, word: &str) -> Option<String> {
        let stem = word.strip_suffix(self.suffix)?;
        if stem.is_empty() {
            return None;
        }
        Some(format!("{}{}", stem, self.replacement))
    }

    /// Re-attach the suffix to a stress-marked root spelling.
    ///
    /// The replacement letters are dropped from the root and the full suffix
    /// appended. A stress mark carried by a dropped letter moves onto the
    /// first letter of the suffix, so "ský" + ies gives "skíes" while
    /// "báke" + ed gives "báked". Marks earlier in the root stay put.
    pub fn restore(&self, root_form: &str) -> String {
        let replaced = self.replacement.chars().count();
        if replaced == 0 {
            return format!("{}{}", root_form, self.suffix);
        }

        let spans = letter_spans(root_form);
        if spans.len() < replaced {
            return format!("{}{}", root_form, self.suffix);
        }
        let kept = spans[spans.len() - replaced].start;
        let tail = &root_form[kept..];

        let tail_letters: String = tail.chars().filter(|&c| !is_stress_diacritic(c)).collect();
        if !tail_letters.eq_ignore_ascii_case(self.replacement) {
            log::debug!(
                "'{}' does not end with '{}'; appending '{}'",
                root_form,
                self.replacement,
                self.suffix
            );
            return format!("{}{}", root_form, self.suffix);
        }

        let mut out = root_form[..kept].to_string();
        let marks: String = tail.chars().filter(|&c| is_stress_diacritic(c)).collect();
        let mut suffix = self.suffix.chars();
        if let Some(first) = suffix.next() {
            out.push(first);
            out.push_str(&marks);
        }
        out.extend(suffix);
        out
    }
}

/// Byte range of each letter in `s` together with the stress marks after it.
///
/// This is the alignment between a plain surface word and its stress-marked
/// form: the n-th span of the marked form holds the n-th surface letter.
pub fn letter_spans(s: &str) -> Vec<Range<usize>> {
    let mut spans: Vec<Range<usize>> = Vec::new();
    for (i, c) in s.char_indices() {
        let end = i + c.len_utf8();
        match spans.last_mut() {
            Some(last) if is_stress_diacritic(c) => last.end = end,
            _ => spans.push(i..end),
        }
    }
    spans
}

/// Copy the surface word's capitalisation onto a resolved spelling.
pub fn recase(surface: &str, resolved: &str) -> String {
    let mut out = String::with_capacity(resolved.len());
    let mut surface_letters = surface.chars();

    for span in letter_spans(resolved) {
        let piece = &resolved[span];
        match surface_letters.next() {
            Some(c) if c.is_uppercase() => {
                let mut chars = piece.chars();
                if let Some(base) = chars.next() {
                    out.extend(base.to_uppercase());
                }
                out.push_str(chars.as_str());
            }
            _ => out.push_str(piece),
        }
    }
    out
}
