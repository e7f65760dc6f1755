//! Stress marking over running text.
//!
//! Alphabetic runs are words; every other character (spaces, punctuation,
//! digits, apostrophes, hyphens) is copied through where it stands.

use super::resolver::Resolver;

/// Supplies a part-of-speech tag for each word of a text.
///
/// The returned vector lines up with `words`; a short vector or a `None`
/// leaves the remaining words untagged.
pub trait PosTagger {
    fn tag(&self, words: &[&str]) -> Vec<Option<String>>;
}

impl<F> PosTagger for F
where
    F: Fn(&[&str]) -> Vec<Option<String>>,
{
    fn tag(&self, words: &[&str]) -> Vec<Option<String>> {
        self(words)
    }
}

/// A piece of input text: a word or a run of anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Other(&'a str),
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_word = false;

    for (i, c) in text.char_indices() {
        let alpha = c.is_alphabetic();
        if i > start && alpha != in_word {
            let piece = &text[start..i];
            tokens.push(if in_word { Token::Word(piece) } else { Token::Other(piece) });
            start = i;
        }
        in_word = alpha;
    }
    if start < text.len() {
        let piece = &text[start..];
        tokens.push(if in_word { Token::Word(piece) } else { Token::Other(piece) });
    }
    tokens
}

impl Resolver {
    /// Stress-mark every word of `text` without part-of-speech guidance.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 8);
        for token in tokenize(text) {
            match token {
                Token::Word(w) => out.push_str(&self.resolve(w, None)),
                Token::Other(s) => out.push_str(s),
            }
        }
        out
    }

    /// Like [`Resolver::apply`], with tags from an external tagger.
    pub fn apply_tagged(&self, text: &str, tagger: &dyn PosTagger) -> String {
        let tokens = tokenize(text);
        let words: Vec<&str> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Word(w) => Some(*w),
                Token::Other(_) => None,
            })
            .collect();

        let tags = tagger.tag(&words);
        if tags.len() != words.len() {
            log::debug!("Tagger returned {} tags for {} words", tags.len(), words.len());
        }

        let mut out = String::with_capacity(text.len() + text.len() / 8);
        let mut index = 0;
        for token in tokens {
            match token {
                Token::Word(w) => {
                    let tag = tags.get(index).and_then(|t| t.as_deref());
                    out.push_str(&self.resolve(w, tag));
                    index += 1;
                }
                Token::Other(s) => out.push_str(s),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::shape::ACUTE;
    use crate::lexicon::canonical::CanonicalDictionary;
    use crate::stress::resolver::StressConfig;
    use crate::types::CanonicalEntry;
    use std::collections::BTreeMap;

    fn resolver() -> Resolver {
        let mut dict = CanonicalDictionary::default();
        dict.insert("CAT", CanonicalEntry::Single(format!("ca{}t", ACUTE)));
        dict.insert("HAPPY", CanonicalEntry::Single(format!("ha{}ppy", ACUTE)));

        let mut record = BTreeMap::new();
        record.insert(format!("re{}cord", ACUTE), vec!["n.".to_string()]);
        record.insert(format!("reco{}rd", ACUTE), vec!["v.".to_string()]);
        dict.insert("RECORD", CanonicalEntry::ByPartOfSpeech(record));

        Resolver::new(dict, StressConfig::default())
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Hi, 2 cats!"),
            vec![
                Token::Word("Hi"),
                Token::Other(", 2 "),
                Token::Word("cats"),
                Token::Other("!"),
            ]
        );
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_unknown_words_pass_through() {
        assert_eq!(resolver().apply("The STRESS."), "The STRESS.");
    }

    #[test]
    fn test_apply_marks_known_words() {
        let out = resolver().apply("Happy cats, 3 of them.");
        assert_eq!(out, format!("Ha{}ppy ca{}ts, 3 of them.", ACUTE, ACUTE));
    }

    #[test]
    fn test_apply_preserves_non_alphabetic() {
        let text = "  cat--cat's\t(42)\ncat";
        let out = resolver().apply(text);
        let stripped: String = out.chars().filter(|&c| c != ACUTE).collect();
        assert_eq!(stripped, text);
        assert!(out.chars().count() >= text.chars().count());
    }

    #[test]
    fn test_apply_leaves_pos_keyed_words_untagged() {
        assert_eq!(resolver().apply("record"), "record");
    }

    #[test]
    fn test_apply_tagged() {
        let tagger = |words: &[&str]| -> Vec<Option<String>> {
            words
                .iter()
                .map(|w| match *w {
                    "record" => Some("VB".to_string()),
                    "records" => Some("NNS".to_string()),
                    _ => None,
                })
                .collect()
        };
        let out = resolver().apply_tagged("record the records.", &tagger);
        assert_eq!(
            out,
            format!("reco{}rd the re{}cords.", ACUTE, ACUTE)
        );
    }

    #[test]
    fn test_apply_tagged_short_tag_list() {
        let tagger = |_: &[&str]| -> Vec<Option<String>> { vec![Some("NN".to_string())] };
        let out = resolver().apply_tagged("record record", &tagger);
        assert_eq!(out, format!("re{}cord record", ACUTE));
    }
}
