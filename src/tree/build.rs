//! Recursive construction of a [`LocationTree`].

use super::{LocationTree, Quadrant};
use crate::compute::geometry::{centroid, same_location, sorted_locations};
use crate::config::SplitStrategy;
use loctree_types::point::{Axis, Location};

/// Returns a tree containing exactly the given locations, splitting each
/// group at its centroid.
///
/// Splitting around the mean usually divides a group roughly evenly, but
/// nothing rebalances the result: a few far-away locations pull the mean
/// away from the bulk and can make the tree deep.
///
/// Coordinates are expected to be finite; [`crate::TreeBuilder`] checks this.
pub fn build_tree(locs: &[Location]) -> LocationTree {
    build_tree_with(locs, SplitStrategy::Mean)
}

/// Like [`build_tree`], choosing split points with `strategy`.
pub fn build_tree_with(locs: &[Location], strategy: SplitStrategy) -> LocationTree {
    match locs {
        [] => LocationTree::Empty,
        [loc] => LocationTree::single(*loc),
        [first, rest @ ..] if rest.iter().all(|loc| same_location(loc, first)) => {
            LocationTree::Single {
                loc: *first,
                count: locs.len(),
            }
        }
        [first, ..] => {
            let Some((at, groups)) = split(locs, strategy) else {
                return LocationTree::Single {
                    loc: *first,
                    count: locs.len(),
                };
            };

            let [nw, ne, sw, se] = groups;
            LocationTree::split(
                at,
                build_tree_with(&nw, strategy),
                build_tree_with(&ne, strategy),
                build_tree_with(&sw, strategy),
                build_tree_with(&se, strategy),
            )
        }
    }
}

/// Picks a split point that leaves no child holding the whole group, and
/// the resulting groups. `None` if the group cannot be separated at all.
fn split(locs: &[Location], strategy: SplitStrategy) -> Option<(Location, [Vec<Location>; 4])> {
    let preferred = match strategy {
        SplitStrategy::Mean => centroid(locs)?,
        SplitStrategy::Median => upper_median(locs)?,
    };
    let groups = partition(locs, &preferred);
    if separates(&groups, locs.len()) {
        return Some((preferred, groups));
    }

    // Rounding in the mean, or a median sitting on a run of equal
    // coordinates, can put every location on the same side of both lines.
    // Splitting at the maximum coordinates moves everything below either
    // maximum out of `se`.
    let fallback = max_corner(locs);
    log::trace!(
        "split at ({}, {}) does not separate {} locations, retrying at ({}, {})",
        preferred.x(),
        preferred.y(),
        locs.len(),
        fallback.x(),
        fallback.y()
    );
    let groups = partition(locs, &fallback);
    separates(&groups, locs.len()).then_some((fallback, groups))
}

/// Groups locations by [`Quadrant::of`], keeping input order within each group.
fn partition(locs: &[Location], at: &Location) -> [Vec<Location>; 4] {
    let mut groups: [Vec<Location>; 4] = Default::default();
    for loc in locs {
        groups[Quadrant::of(loc, at) as usize].push(*loc);
    }
    groups
}

fn separates(groups: &[Vec<Location>; 4], total: usize) -> bool {
    groups.iter().all(|g| g.len() < total)
}

fn upper_median(locs: &[Location]) -> Option<Location> {
    let mid = locs.len() / 2;
    let x = Axis::X.coord(sorted_locations(locs, Axis::X).get(mid)?);
    let y = Axis::Y.coord(sorted_locations(locs, Axis::Y).get(mid)?);
    Some(Location::new(x, y))
}

fn max_corner(locs: &[Location]) -> Location {
    let (x, y) = locs.iter().fold(
        (f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(x, y), loc| (x.max(loc.x()), y.max(loc.y())),
    );
    Location::new(x, y)
}
