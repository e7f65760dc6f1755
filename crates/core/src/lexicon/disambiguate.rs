//! Collapse a word's respelling variants to the ones that really differ.
//!
//! Source noise (alternate spellings, inconsistent stress notation, parse
//! artifacts) yields several respellings for words with one pronunciation.
//! Eight ordered passes each pick at most a few victims; a round applies
//! them in sequence and rounds repeat until one candidate is left, nothing
//! changes, or `MAX_ROUNDS` is reached.
//!
//! Tie-break policy for pairwise passes: candidates are scanned in
//! first-seen order and the first matching pair wins. No pass may remove
//! every remaining candidate.

use crate::error::ParseError;
use crate::language::shape::{self, StressShape};
use crate::types::{Candidate, WordPronunciationSet};

pub const MAX_ROUNDS: usize = 8;

/// A candidate with its precomputed shape.
#[derive(Debug, Clone)]
pub struct Scored<'a> {
    pub candidate: &'a Candidate,
    pub shape: StressShape,
}

/// The heuristic passes, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Drop respellings with no stressed syllable at all.
    Unstressed,
    /// Same shape, different spelling (`Tee"ny` / `Teen"y`): drop the later.
    IdenticalShape,
    /// `Non"plus` / `Non"plus\``: drop the one carrying the extra secondary.
    SecondaryDowngrade,
    /// Secondary written where another variant has primary: drop it.
    SecondaryUpgrade,
    /// One extra trailing syllable (`A*ca"ci*a` / `A*ca"cia`): drop the longer.
    ExtraSyllable,
    /// Two or more primary stresses signal a mis-parse.
    DoublePrimary,
    /// Same tag set means no grammatical distinction: drop the later.
    IdenticalPos,
    /// No grammatical evidence at all.
    EmptyPos,
}

impl Pass {
    pub const ALL: [Pass; 8] = [
        Pass::Unstressed,
        Pass::IdenticalShape,
        Pass::SecondaryDowngrade,
        Pass::SecondaryUpgrade,
        Pass::ExtraSyllable,
        Pass::DoublePrimary,
        Pass::IdenticalPos,
        Pass::EmptyPos,
    ];

    /// Indices of the candidates this pass discards, ascending.
    pub fn victims(self, scored: &[Scored]) -> Vec<usize> {
        match self {
            Pass::Unstressed => scored
                .iter()
                .enumerate()
                .filter(|(_, s)| s.shape.is_unstressed())
                .map(|(i, _)| i)
                .collect(),
            Pass::IdenticalShape => first_combination(scored, |a, b| a.shape == b.shape),
            Pass::SecondaryDowngrade => {
                first_permutation(scored, |a, b| a.shape == b.shape.downgrade_secondary())
            }
            Pass::SecondaryUpgrade => {
                first_permutation(scored, |a, b| a.shape == b.shape.upgrade_secondary())
            }
            Pass::ExtraSyllable => {
                first_permutation(scored, |a, b| a.shape == b.shape.without_last())
            }
            Pass::DoublePrimary => first_single(scored, |s| s.shape.primary_count() >= 2),
            Pass::IdenticalPos => {
                first_combination(scored, |a, b| a.candidate.pos == b.candidate.pos)
            }
            Pass::EmptyPos => first_single(scored, |s| s.candidate.pos.is_empty()),
        }
    }
}

fn first_single(scored: &[Scored], pred: impl Fn(&Scored) -> bool) -> Vec<usize> {
    scored.iter().position(pred).into_iter().collect()
}

/// Unordered pairs (i < j); the later candidate of the first match is the victim.
fn first_combination(scored: &[Scored], pred: impl Fn(&Scored, &Scored) -> bool) -> Vec<usize> {
    for i in 0..scored.len() {
        for j in i + 1..scored.len() {
            if pred(&scored[i], &scored[j]) {
                return vec![j];
            }
        }
    }
    Vec::new()
}

/// Ordered pairs (i != j); `b` of the first matching `(a, b)` is the victim.
fn first_permutation(scored: &[Scored], pred: impl Fn(&Scored, &Scored) -> bool) -> Vec<usize> {
    for i in 0..scored.len() {
        for j in 0..scored.len() {
            if i != j && pred(&scored[i], &scored[j]) {
                return vec![j];
            }
        }
    }
    Vec::new()
}

fn score(set: &WordPronunciationSet) -> Vec<Scored<'_>> {
    set.candidates
        .iter()
        .filter_map(|candidate| match shape::shape(&candidate.respelling) {
            Some(shape) => Some(Scored { candidate, shape }),
            None => {
                log::debug!("Skipping candidate: {}", ParseError::EmptyRespelling);
                None
            }
        })
        .collect()
}

/// Apply one pass, returning the reduced set.
pub fn apply_pass(set: &WordPronunciationSet, pass: Pass) -> WordPronunciationSet {
    let scored = score(set);
    let victims = pass.victims(&scored);
    if victims.is_empty() || victims.len() >= scored.len() {
        return WordPronunciationSet {
            candidates: scored.iter().map(|s| s.candidate.clone()).collect(),
        };
    }

    let candidates = scored
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            if victims.contains(&i) {
                log::debug!("{:?}: discarding '{}'", pass, s.candidate.respelling);
                None
            } else {
                Some(s.candidate.clone())
            }
        })
        .collect();
    WordPronunciationSet { candidates }
}

/// Run every pass once, stopping as soon as one candidate remains.
pub fn reduce_round(set: &WordPronunciationSet) -> WordPronunciationSet {
    let mut current = set.clone();
    for pass in Pass::ALL {
        if current.len() <= 1 {
            break;
        }
        current = apply_pass(&current, pass);
    }
    current
}

/// Reduce a word's candidates to the minimal set of genuine variants.
///
/// Survivors of all rounds are considered distinct pronunciations
/// distinguished by part of speech.
pub fn disambiguate(set: &WordPronunciationSet) -> WordPronunciationSet {
    let mut current = set.clone();
    for _ in 0..MAX_ROUNDS {
        if current.len() <= 1 {
            break;
        }
        let next = reduce_round(&current);
        let settled = next.len() == current.len();
        current = next;
        if settled {
            break;
        }
    }
    current
}
