//! Entry parsing: gloss text → respellings + part-of-speech tags.
//!
//! A gloss line starts with one or more respellings, followed by
//! grammatical qualifiers:
//!
//! ```text
//! ACETONAEMIA; ACETONEMIA
//! Ac`e*to*næ"mi*a, Ac`e*to*ne"mi*a, n. [NL. See Acetone; Hæma-.] (Med.)
//! ```

use crate::error::ParseError;
use crate::types::{PosSet, RawEntry};

/// Qualifiers recognised in a gloss line.
pub const VALID_POS: &[&str] = &[
    "n.", "a.", "v.t.", "v.i.", "adv.", "p.p.", "prep.", "v.", "p.", "t.", "i.", "pret.",
    "imp.", "pl.", "obs.", "conj.", "interj.", "pron.",
];

/// Qualifiers kept as part-of-speech evidence.
pub const MEANINGFUL_POS: &[&str] = &["n.", "v.", "a.", "adv."];

/// Qualifier tokens that open an etymology rather than a part of speech.
const ETYMOLOGY_MARKERS: &[&str] = &["L.", "E."];

/// Doubled-glyph typos and their corrections, applied in order.
const GLYPH_TYPOS: &[(&str, &str)] = &[("\"\"", "\""), ("\"`", "`"), ("*\"", "\""), ("*`", "`")];

/// One dictionary entry split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    /// Word aliases sharing the gloss, uppercased
    pub words: Vec<String>,
    /// Cleaned respellings, in gloss order
    pub respellings: Vec<String>,
    /// Meaningful tags shared by every respelling of the entry
    pub pos: PosSet,
}

impl ParsedEntry {
    /// The respelling whose letters spell `word`.
    pub fn respelling_for(&self, word: &str) -> Result<&str, ParseError> {
        match_respelling(word, &self.respellings)
            .ok_or_else(|| ParseError::NoPronunciation(word.to_string()))
    }
}

/// Parse one raw entry.
///
/// Fails when any word alias contains a non-letter: such entries are
/// phrases or abbreviations and are skipped wholesale.
pub fn parse_entry(entry: &RawEntry) -> Result<ParsedEntry, ParseError> {
    let mut words = Vec::new();
    for word in entry.word_line().split("; ") {
        if !word.chars().all(char::is_alphabetic) {
            return Err(ParseError::NonAlphabeticWord(word.to_string()));
        }
        if !word.is_empty() {
            words.push(word.to_uppercase());
        }
    }

    let (respellings, pos) = split_gloss(entry.gloss_line());
    Ok(ParsedEntry {
        words,
        respellings,
        pos,
    })
}

/// Split a gloss line into respellings and meaningful part-of-speech tags.
pub fn split_gloss(gloss: &str) -> (Vec<String>, PosSet) {
    let tokens: Vec<&str> = gloss.split_whitespace().collect();

    let mut respellings = Vec::new();
    let mut idx = 0;
    while idx < tokens.len() {
        let token = tokens[idx];
        if VALID_POS.iter().any(|p| token.starts_with(p)) {
            break;
        }
        idx += 1;

        if token.starts_with('(') || token.ends_with(')') || token.ends_with("),") || token == "or"
        {
            continue;
        }
        let cleaned = clean_respelling(token);
        if !cleaned.is_empty() {
            respellings.push(cleaned);
        }
    }

    let pos = scan_qualifiers(&tokens[idx..]);
    (respellings, pos)
}

/// Strip trailing punctuation and repair digraphs and doubled glyphs.
pub fn clean_respelling(token: &str) -> String {
    let mut token = token;
    for c in [',', '.', ';'] {
        token = token.strip_suffix(c).unwrap_or(token);
    }

    let mut cleaned = token.replace('æ', "ae").replace('Æ', "Ae");
    for (typo, fix) in GLYPH_TYPOS {
        cleaned = cleaned.replace(typo, fix);
    }
    cleaned
}

fn scan_qualifiers(tokens: &[&str]) -> PosSet {
    let mut found: Vec<&str> = Vec::new();
    for &token in tokens {
        if ETYMOLOGY_MARKERS.contains(&token) {
            break;
        }
        let starts_alpha = token.chars().next().map_or(false, char::is_alphabetic);
        if !starts_alpha || !(token.ends_with('.') || token.ends_with(".;")) {
            break;
        }
        let token = token.strip_suffix(';').unwrap_or(token);
        if VALID_POS.contains(&token) {
            found.push(token);
        }
    }

    if found.last() == Some(&"pl.") {
        found.pop();
    }
    if let Some(i) = found.iter().position(|&t| t == "v.t.") {
        found.remove(i);
        found.extend(["v.", "t."]);
    }

    found
        .into_iter()
        .filter(|t| MEANINGFUL_POS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Find the respelling whose letters, uppercased, equal `word`.
///
/// `The*or"ic` matches "THEORIC".
pub fn match_respelling<'a>(word: &str, respellings: &'a [String]) -> Option<&'a str> {
    let target = word.to_uppercase();
    respellings
        .iter()
        .find(|r| letters_upper(r) == target)
        .map(String::as_str)
}

fn letters_upper(respelling: &str) -> String {
    respelling
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(tags: &[&str]) -> PosSet {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_split_gloss_simple() {
        let (resp, p) = split_gloss("Stress, n. Etym: [Abbrev. fr. distress]");
        assert_eq!(resp, vec!["Stress"]);
        assert_eq!(p, pos(&["n."]));
    }

    #[test]
    fn test_split_gloss_aliases_and_digraph() {
        let (resp, p) = split_gloss(
            "Ac`e*to*næ\"mi*a, Ac`e*to*ne\"mi*a, n. [NL. See Acetone; Hæma-.] (Med.)",
        );
        assert_eq!(resp, vec!["Ac`e*to*nae\"mi*a", "Ac`e*to*ne\"mi*a"]);
        assert_eq!(p, pos(&["n."]));
    }

    #[test]
    fn test_split_gloss_verb_transitive() {
        let (_, p) = split_gloss("Stress, v. t.");
        assert_eq!(p, pos(&["v."]));

        let (_, p) = split_gloss("Con*tent\", v.t. [imp. & p. p. Contented]");
        assert_eq!(p, pos(&["v."]));
    }

    #[test]
    fn test_split_gloss_skips_parentheticals_and_or() {
        let (resp, _) = split_gloss("Ra\"ther (Brit.) or Ra*ther\", adv.");
        assert_eq!(resp, vec!["Ra\"ther", "Ra*ther\""]);
    }

    #[test]
    fn test_split_gloss_stops_at_etymology() {
        let (_, p) = split_gloss("Cat, n. L. catus");
        assert_eq!(p, pos(&["n."]));
    }

    #[test]
    fn test_split_gloss_drops_trailing_plural() {
        let (_, p) = split_gloss("Ox\"en, n. pl.");
        assert_eq!(p, pos(&["n."]));
    }

    #[test]
    fn test_split_gloss_semicolon_qualifier() {
        // Qualifier scanning ends at the next respelling.
        let (resp, p) = split_gloss("Pro\"gress, n.; Pro*gress\", v. i.");
        assert_eq!(resp, vec!["Pro\"gress"]);
        assert_eq!(p, pos(&["n."]));
    }

    #[test]
    fn test_clean_respelling_typos() {
        assert_eq!(clean_respelling("Ac\"\"cent,"), "Ac\"cent");
        assert_eq!(clean_respelling("Non\"plus*`"), "Non\"plus`");
        assert_eq!(clean_respelling("Ba*\"nal;"), "Ba\"nal");
        assert_eq!(clean_respelling("Æ\"on."), "Ae\"on");
    }

    #[test]
    fn test_match_respelling() {
        let resp = vec!["The*or\"ic".to_string(), "The*or\"ic*al".to_string()];
        assert_eq!(match_respelling("THEORICAL", &resp), Some("The*or\"ic*al"));
        assert_eq!(match_respelling("theoric", &resp), Some("The*or\"ic"));
        assert_eq!(match_respelling("THEORY", &resp), None);
    }

    #[test]
    fn test_parse_entry_rejects_non_letters() {
        let e = RawEntry::new("A-1", "A-1, a.");
        assert_eq!(
            parse_entry(&e),
            Err(ParseError::NonAlphabeticWord("A-1".into()))
        );
    }

    #[test]
    fn test_parse_entry_aliases() {
        let e = RawEntry::new(
            "ACETONAEMIA; ACETONEMIA",
            "Ac`e*to*næ\"mi*a, Ac`e*to*ne\"mi*a, n.",
        );
        let parsed = parse_entry(&e).unwrap();
        assert_eq!(parsed.words, vec!["ACETONAEMIA", "ACETONEMIA"]);
        assert_eq!(parsed.respelling_for("ACETONEMIA").unwrap(), "Ac`e*to*ne\"mi*a");
        assert_eq!(
            parsed.respelling_for("ACETONAEMIA").unwrap(),
            "Ac`e*to*nae\"mi*a"
        );
        assert!(matches!(
            parsed.respelling_for("ACETONE"),
            Err(ParseError::NoPronunciation(_))
        ));
    }
}
