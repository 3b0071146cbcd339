//! Errors raised while reading contract descriptors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContractError {
    /// An element declares more than one marshalled XML name.
    #[error("Element '{element}' declares multiple xml tag names: {names:?}")]
    ConflictingXmlNames { element: String, names: Vec<String> },
}
