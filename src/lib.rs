//! Immutable 2D location tree with region and nearest-neighbour queries.
//!
//! ```rust
//! use loctree::{Location, LocationTree, Region};
//!
//! let tree = LocationTree::builder().build(&[
//!     Location::new(1.0, 1.0),
//!     Location::new(1.0, 5.0),
//!     Location::new(5.0, 1.0),
//!     Location::new(5.0, 5.0),
//! ])?;
//!
//! let inside = tree.find_in_region(&Region::new(0.0, 2.0, 0.0, 6.0));
//! assert_eq!(inside.len(), 2);
//!
//! let (closest, dist) = tree.find_closest(&[Location::new(2.0, 1.0)])?;
//! assert_eq!(closest, Location::new(1.0, 1.0));
//! assert_eq!(dist, 1.0);
//! # Ok::<(), loctree::LocTreeError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod tree;

pub use builder::TreeBuilder;
pub use config::{Config, SplitStrategy};
pub use error::{LocTreeError, Result};

pub use loctree_types::point::{Axis, Location};
pub use loctree_types::region::Region;

pub use tree::build::{build_tree, build_tree_with};
pub use tree::nearest::{ClosestInfo, closest_in_tree, find_closest_in_tree};
pub use tree::region::find_locations_in_region;
pub use tree::{LocationTree, Quadrant, Quadrants};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{LocTreeError, Result, TreeBuilder};

    pub use crate::{Location, LocationTree, Region};

    pub use crate::{ClosestInfo, build_tree, find_closest_in_tree, find_locations_in_region};

    pub use crate::{Config, SplitStrategy};
}
