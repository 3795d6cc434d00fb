//! Immutable quadrant-split location tree.
//!
//! A [`LocationTree`] is built once from a fixed set of locations by
//! recursively splitting them into four quadrants around a split point, and
//! is read-only afterwards. No bounding rectangle is stored per node: queries
//! start from [`Region::EVERYWHERE`] and narrow it with [`Quadrant::bounds`]
//! as they descend.
//!
//! ## Quadrant convention
//!
//! For a split point `at`, a location goes to
//!
//! - `nw` when `x < at.x` and `y < at.y`
//! - `ne` when `x >= at.x` and `y < at.y`
//! - `sw` when `x < at.x` and `y >= at.y`
//! - `se` when `x >= at.x` and `y >= at.y`
//!
//! so a location on either split line lands in exactly one child.
//!
//! ## Example
//!
//! ```rust
//! use loctree::{Location, LocationTree, Region};
//!
//! let tree = LocationTree::build(&[Location::new(1.0, 1.0), Location::new(3.0, 3.0)]);
//! assert_eq!(tree.len(), 2);
//!
//! let found = tree.find_in_region(&Region::new(2.0, 4.0, 2.0, 4.0));
//! assert_eq!(found, vec![Location::new(3.0, 3.0)]);
//!
//! let (closest, dist) = tree.find_closest(&[Location::new(0.0, 1.0)])?;
//! assert_eq!(closest, Location::new(1.0, 1.0));
//! assert_eq!(dist, 1.0);
//! # Ok::<(), loctree::LocTreeError>(())
//! ```

pub mod build;
pub mod nearest;
pub mod region;

use crate::builder::TreeBuilder;
use crate::compute::validation::validate_region;
use crate::error::Result;
use geo::{BoundingRect, MultiPoint, Rect};
use loctree_types::point::Location;
use loctree_types::region::Region;

/// One of the four children of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Nw = 0,
    Ne = 1,
    Sw = 2,
    Se = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::Nw, Quadrant::Ne, Quadrant::Sw, Quadrant::Se];

    /// The quadrant `loc` belongs to when splitting around `at`.
    pub fn of(loc: &Location, at: &Location) -> Quadrant {
        let east = loc.x() >= at.x();
        let south = loc.y() >= at.y();
        match (east, south) {
            (false, false) => Quadrant::Nw,
            (true, false) => Quadrant::Ne,
            (false, true) => Quadrant::Sw,
            (true, true) => Quadrant::Se,
        }
    }

    /// Bounds of this child, given the bounds of its parent split at `at`.
    pub fn bounds(self, at: &Location, outer: &Region) -> Region {
        match self {
            Quadrant::Nw => Region::new(outer.x1, at.x(), outer.y1, at.y()),
            Quadrant::Ne => Region::new(at.x(), outer.x2, outer.y1, at.y()),
            Quadrant::Sw => Region::new(outer.x1, at.x(), at.y(), outer.y2),
            Quadrant::Se => Region::new(at.x(), outer.x2, at.y(), outer.y2),
        }
    }

    /// The neighbour across the vertical split line.
    pub fn across_x(self) -> Quadrant {
        match self {
            Quadrant::Nw => Quadrant::Ne,
            Quadrant::Ne => Quadrant::Nw,
            Quadrant::Sw => Quadrant::Se,
            Quadrant::Se => Quadrant::Sw,
        }
    }

    /// The neighbour across the horizontal split line.
    pub fn across_y(self) -> Quadrant {
        match self {
            Quadrant::Nw => Quadrant::Sw,
            Quadrant::Ne => Quadrant::Se,
            Quadrant::Sw => Quadrant::Nw,
            Quadrant::Se => Quadrant::Ne,
        }
    }

    /// The diagonally opposite quadrant.
    pub fn opposite(self) -> Quadrant {
        self.across_x().across_y()
    }
}

/// The four children of a split node.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrants {
    pub nw: LocationTree,
    pub ne: LocationTree,
    pub sw: LocationTree,
    pub se: LocationTree,
}

impl Quadrants {
    pub fn get(&self, quadrant: Quadrant) -> &LocationTree {
        match quadrant {
            Quadrant::Nw => &self.nw,
            Quadrant::Ne => &self.ne,
            Quadrant::Sw => &self.sw,
            Quadrant::Se => &self.se,
        }
    }

    /// Children in `nw, ne, sw, se` order.
    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &LocationTree)> {
        Quadrant::ALL.into_iter().map(move |q| (q, self.get(q)))
    }
}

/// A tree partitioning a fixed set of locations by quadrant.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationTree {
    /// No locations.
    #[default]
    Empty,
    /// A single location, repeated `count` times.
    ///
    /// `count` is 1 unless the input held locations the quadrant rule cannot
    /// tell apart, which for finite coordinates means exact duplicates.
    Single { loc: Location, count: usize },
    /// Locations split into four quadrants around `at`.
    Split {
        at: Location,
        children: Box<Quadrants>,
    },
}

impl LocationTree {
    /// Build a tree holding exactly the given locations, splitting at centroids.
    ///
    /// See [`build::build_tree`].
    pub fn build(locs: &[Location]) -> Self {
        build::build_tree(locs)
    }

    /// Start a configurable, validating build.
    pub fn builder() -> TreeBuilder {
        TreeBuilder::new()
    }

    /// A leaf holding one location.
    pub fn single(loc: Location) -> Self {
        LocationTree::Single { loc, count: 1 }
    }

    pub fn split(
        at: Location,
        nw: LocationTree,
        ne: LocationTree,
        sw: LocationTree,
        se: LocationTree,
    ) -> Self {
        LocationTree::Split {
            at,
            children: Box::new(Quadrants { nw, ne, sw, se }),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LocationTree::Empty)
    }

    /// Number of locations stored, duplicates included.
    pub fn len(&self) -> usize {
        match self {
            LocationTree::Empty => 0,
            LocationTree::Single { count, .. } => *count,
            LocationTree::Split { children, .. } => {
                children.iter().map(|(_, child)| child.len()).sum()
            }
        }
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        match self {
            LocationTree::Empty => 0,
            LocationTree::Single { .. } => 1,
            LocationTree::Split { children, .. } => {
                1 + children
                    .iter()
                    .map(|(_, child)| child.height())
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Every location in the tree, duplicates included, in no particular order.
    pub fn locations(&self) -> Vec<Location> {
        region::find_locations_in_region(self, &Region::EVERYWHERE)
    }

    /// Smallest rectangle holding every location; `None` for an empty tree.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        MultiPoint::from(self.locations()).bounding_rect()
    }

    /// Locations inside `region`. See [`region::find_locations_in_region`].
    pub fn find_in_region(&self, region: &Region) -> Vec<Location> {
        region::find_locations_in_region(self, region)
    }

    /// Like [`LocationTree::find_in_region`], but rejects a region with a NaN
    /// bound or a minimum above its maximum instead of matching nothing.
    pub fn try_find_in_region(&self, region: &Region) -> Result<Vec<Location>> {
        validate_region(region)?;
        Ok(region::find_locations_in_region(self, region))
    }

    /// Closest location to any of `refs`. See [`nearest::find_closest_in_tree`].
    pub fn find_closest(&self, refs: &[Location]) -> Result<(Location, f64)> {
        nearest::find_closest_in_tree(self, refs)
    }
}
