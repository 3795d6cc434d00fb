//! Rectangular region queries over a [`LocationTree`].

use super::LocationTree;
use crate::compute::geometry::{is_in_region, overlap};
use loctree_types::point::Location;
use loctree_types::region::Region;
use std::iter;

/// Returns all the locations in the tree that fall within the region.
///
/// Order is unspecified. Duplicate input locations are returned as many
/// times as they were given to the builder.
pub fn find_locations_in_region(tree: &LocationTree, region: &Region) -> Vec<Location> {
    let mut locs = Vec::new();
    add_locations_in_region(tree, region, &Region::EVERYWHERE, &mut locs);
    locs
}

/// Appends the locations of `tree` inside `region` to `locs`.
///
/// `bounds` contains every location `tree` can hold; subtrees whose bounds
/// miss the region are skipped whole.
fn add_locations_in_region(
    tree: &LocationTree,
    region: &Region,
    bounds: &Region,
    locs: &mut Vec<Location>,
) {
    match tree {
        LocationTree::Empty => {}
        LocationTree::Single { loc, count } => {
            if is_in_region(loc, region) {
                locs.extend(iter::repeat_n(*loc, *count));
            }
        }
        LocationTree::Split { .. } if !overlap(bounds, region) => {}
        LocationTree::Split { at, children } => {
            for (quadrant, child) in children.iter() {
                add_locations_in_region(child, region, &quadrant.bounds(at, bounds), locs);
            }
        }
    }
}
