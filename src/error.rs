//! Error types for tree construction and queries.

use thiserror::Error;

/// Errors reported by the location tree.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocTreeError {
    /// Input rejected before any work was done
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A nearest-neighbour search was given no reference locations
    #[error("no reference locations passed in")]
    NoReferenceLocations,

    /// A nearest-neighbour search was run against a tree with no locations
    #[error("no locations in the tree passed in")]
    EmptyTree,
}

pub type Result<T> = std::result::Result<T, LocTreeError>;
