//! Surface word → stress-marked surface word.

use crate::language::shape::GRAVE;
use crate::lexicon::canonical::CanonicalDictionary;
use crate::types::CanonicalEntry;

use super::inflection::{recase, InflectionRule, INFLECTION_RULES};

/// Resolver options.
#[derive(Debug, Clone, Default)]
pub struct StressConfig {
    /// Drop secondary-stress marks from every resolved form
    pub no_secondary: bool,
}

/// Map a Penn-style tag (NN, VBD, JJ, RB, ...) to a dictionary tag.
///
/// Only the first letter matters; other tag families have no counterpart.
pub fn dictionary_tag(tag: &str) -> Option<&'static str> {
    match tag.chars().next()? {
        'N' => Some("n."),
        'V' => Some("v."),
        'J' => Some("a."),
        'R' => Some("adv."),
        _ => None,
    }
}

/// Looks words up in a canonical dictionary, falling back to inflection
/// rules. Unknown or unresolvable words come back unchanged.
#[derive(Debug, Clone)]
pub struct Resolver {
    dict: CanonicalDictionary,
    config: StressConfig,
}

impl Resolver {
    pub fn new(dict: CanonicalDictionary, config: StressConfig) -> Self {
        Self { dict, config }
    }

    pub fn dictionary(&self) -> &CanonicalDictionary {
        &self.dict
    }

    /// Resolve one word, optionally guided by a part-of-speech tag.
    ///
    /// Entries keyed by part of speech need a tag that maps onto one of
    /// their variants; otherwise the word is returned as given.
    pub fn resolve(&self, word: &str, pos: Option<&str>) -> String {
        let Some((entry, rule)) = self.find(word) else {
            return word.to_string();
        };

        let tag = pos.and_then(dictionary_tag);
        let Some(spelling) = entry.spelling_for(tag) else {
            return word.to_string();
        };

        let mut form = spelling.to_string();
        if self.config.no_secondary {
            form.retain(|c| c != GRAVE);
        }
        if let Some(rule) = rule {
            form = rule.restore(&form);
        }
        recase(word, &form)
    }

    /// Direct hit first, then the first inflection rule whose root is known.
    fn find(&self, word: &str) -> Option<(&CanonicalEntry, Option<&'static InflectionRule>)> {
        if word.is_empty() {
            return None;
        }
        if let Some(entry) = self.dict.get(word) {
            return Some((entry, None));
        }

        let lower = word.to_lowercase();
        INFLECTION_RULES.iter().find_map(|rule| {
            let root = rule.root_of(&lower)?;
            self.dict.get(&root).map(|entry| (entry, Some(rule)))
        })
    }
}
