//! Word and text stress resolution against a canonical dictionary.

pub mod corpus;
pub mod inflection;
pub mod resolver;

pub use corpus::PosTagger;
pub use resolver::{Resolver, StressConfig};
