//! Fuse stress glyphs into a plain spelling with combining diacritics.
//!
//! `Con*tent"` becomes "contént": every cluster closed by a primary or
//! secondary glyph gets an acute or grave on its first vowel.

use crate::language::shape::StressGlyph;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Convert a respelling into a lowercase spelling with stress diacritics.
///
/// A trailing cluster with no glyph after it is copied unchanged, so the
/// output of this function passes through it a second time untouched.
pub fn place_stress(respelling: &str) -> String {
    let mut out = String::with_capacity(respelling.len() + 4);
    let mut cluster = String::new();

    for c in respelling.to_lowercase().chars() {
        match StressGlyph::from_char(c) {
            Some(glyph) => {
                out.push_str(&stress_cluster(&cluster, glyph));
                cluster.clear();
            }
            None => cluster.push(c),
        }
    }
    out.push_str(&cluster);
    out
}

/// Put the glyph's diacritic after the cluster's stress-bearing vowel.
///
/// The carrier is the earliest of a/e/i/o/u; failing that the first 'y';
/// failing that the last letter of the cluster.
pub fn stress_cluster(cluster: &str, glyph: StressGlyph) -> String {
    let Some(mark) = glyph.diacritic() else {
        return cluster.to_string();
    };
    let chars: Vec<char> = cluster.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let carrier = chars
        .iter()
        .position(|c| VOWELS.contains(c))
        .or_else(|| chars.iter().position(|&c| c == 'y'))
        .unwrap_or(chars.len() - 1);

    let mut out: String = chars[..=carrier].iter().collect();
    out.push(mark);
    out.extend(&chars[carrier + 1..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::shape::{ACUTE, GRAVE};

    #[test]
    fn test_place_stress_primary() {
        assert_eq!(place_stress("Con\"tent"), format!("co{}ntent", ACUTE));
        assert_eq!(place_stress("Con*tent\""), format!("conte{}nt", ACUTE));
    }

    #[test]
    fn test_place_stress_secondary() {
        assert_eq!(
            place_stress("Guar\"an*tee`"),
            format!("gu{}arante{}e", ACUTE, GRAVE)
        );
    }

    #[test]
    fn test_place_stress_unstressed_only() {
        assert_eq!(place_stress("Con*tent"), "content");
        assert_eq!(place_stress("Stress"), "stress");
    }

    #[test]
    fn test_place_stress_y_carrier() {
        assert_eq!(place_stress("Sky\""), format!("sky{}", ACUTE));
        assert_eq!(place_stress("Tee\"ny"), format!("te{}eny", ACUTE));
    }

    #[test]
    fn test_place_stress_idempotent() {
        let once = place_stress("Ac`e*to*ne\"mi*a");
        assert_eq!(place_stress(&once), once);
    }

    #[test]
    fn test_stress_cluster_vowel_priority() {
        // Earliest vowel wins regardless of which vowel it is.
        assert_eq!(stress_cluster("str", StressGlyph::Primary), format!("str{}", ACUTE));
        assert_eq!(stress_cluster("boa", StressGlyph::Primary), format!("bo{}a", ACUTE));
        assert_eq!(stress_cluster("on", StressGlyph::Unstressed), "on");
        assert_eq!(stress_cluster("", StressGlyph::Primary), "");
    }
}
