//! Stress-annotated pronouncing dictionary: build, look up, apply.

pub mod cache;
pub mod error;
pub mod language;
pub mod lexicon;
pub mod stress;
pub mod types;

pub use error::ParseError;
pub use lexicon::CanonicalDictionary;
pub use stress::{PosTagger, Resolver, StressConfig};
