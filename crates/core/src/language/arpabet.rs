//! ARPABET symbol classes used by the phoneme dictionary.

use std::collections::HashSet;

lazy_static::lazy_static! {
    /// Vowel bases; every other symbol is treated as a consonant.
    static ref VOWEL_BASES: HashSet<&'static str> = {
        [
            "AA", "AE", "AH", "AO", "AW", "AY", "EH", "ER", "EY",
            "IH", "IY", "OW", "OY", "UH", "UW",
        ].into_iter().collect()
    };
}

/// Whether a symbol is a consonant or a vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    Consonant,
    Vowel,
}

/// Strip the trailing stress digit from an ARPABET phoneme.
pub fn strip_stress(phoneme: &str) -> &str {
    phoneme.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// Check if a phoneme is a vowel (with or without a stress digit).
pub fn is_vowel(phoneme: &str) -> bool {
    VOWEL_BASES.contains(strip_stress(phoneme))
}

pub fn classify(phoneme: &str) -> SymbolClass {
    if is_vowel(phoneme) {
        SymbolClass::Vowel
    } else {
        SymbolClass::Consonant
    }
}

/// Stress digit carried by a vowel symbol: '0', '1' or '2'.
///
/// Vowels written without a digit count as unstressed. Consonants have no
/// stress and return `None`.
pub fn stress_digit(phoneme: &str) -> Option<char> {
    if !is_vowel(phoneme) {
        return None;
    }
    match phoneme.chars().last() {
        Some(d @ ('0' | '1' | '2')) => Some(d),
        _ => Some('0'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_vowel() {
        assert!(is_vowel("AE1"));
        assert!(is_vowel("IY0"));
        assert!(is_vowel("ER"));
        assert!(!is_vowel("K"));
        assert!(!is_vowel("TH"));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("AH0"), SymbolClass::Vowel);
        assert_eq!(classify("NG"), SymbolClass::Consonant);
    }

    #[test]
    fn test_stress_digit() {
        assert_eq!(stress_digit("AE1"), Some('1'));
        assert_eq!(stress_digit("AY2"), Some('2'));
        assert_eq!(stress_digit("AH0"), Some('0'));
        assert_eq!(stress_digit("AH"), Some('0'));
        assert_eq!(stress_digit("S"), None);
    }

    #[test]
    fn test_strip_stress() {
        assert_eq!(strip_stress("AE1"), "AE");
        assert_eq!(strip_stress("K"), "K");
    }
}
