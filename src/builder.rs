//! Configurable tree construction
//!
//! [`TreeBuilder`] wraps [`build_tree_with`] with input validation, a
//! choice of split strategy and logging.

use crate::compute::validation::validate_locations;
use crate::config::{Config, SplitStrategy};
use crate::error::Result;
use crate::tree::LocationTree;
use crate::tree::build::build_tree_with;
use loctree_types::point::Location;

/// Builder for location trees with a custom split strategy and validation.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    config: Config,
}

impl TreeBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Choose how split points are picked.
    pub fn split_strategy(mut self, strategy: SplitStrategy) -> Self {
        self.config = self.config.with_split_strategy(strategy);
        self
    }

    /// Turn the finite-coordinate check on or off.
    pub fn validate_input(mut self, enabled: bool) -> Self {
        self.config = self.config.with_validation(enabled);
        self
    }

    /// Build a tree holding exactly `locs`.
    ///
    /// Fails only when validation is enabled and a location has a NaN or
    /// infinite coordinate.
    pub fn build(&self, locs: &[Location]) -> Result<LocationTree> {
        if self.config.validate_input
            && let Err(e) = validate_locations(locs)
        {
            log::warn!("Rejecting {} locations for tree build: {}", locs.len(), e);
            return Err(e);
        }

        let tree = build_tree_with(locs, self.config.split_strategy);
        log::debug!(
            "Built location tree with {} locations, height {} ({:?} split)",
            tree.len(),
            tree.height(),
            self.config.split_strategy
        );
        Ok(tree)
    }
}
