//! Building the canonical stress dictionary from raw sources.

pub mod canonical;
pub mod diacritic;
pub mod disambiguate;
pub mod entry;
pub mod phoneme_dict;

pub use canonical::CanonicalDictionary;
pub use phoneme_dict::{PhonemeDictConfig, PhonemeDictionary};
