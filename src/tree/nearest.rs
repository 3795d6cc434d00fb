//! Branch-and-bound nearest-neighbour search over a [`LocationTree`].
//!
//! The search is a pure fold: a [`ClosestInfo`] record goes into each
//! recursive call and a possibly better one comes out, so one built tree can
//! serve any number of searches at once without locking.
//!
//! A subtree is skipped whole when its bounds are provably farther from the
//! reference location than the best distance found so far. Children of a
//! split are visited nearest-first so the best distance shrinks early and
//! more of the remaining subtrees get skipped.

use super::{LocationTree, Quadrant};
use crate::compute::geometry::{distance, distance_more_than};
use crate::compute::validation::validate_locations;
use crate::error::{LocTreeError, Result};
use loctree_types::point::Location;
use loctree_types::region::Region;

/// Best location found so far by a nearest-neighbour search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestInfo {
    /// Closest location found, if any
    pub loc: Option<Location>,
    /// Distance from the reference location to `loc`; infinite if none
    pub dist: f64,
    /// Number of location distances that improved the result
    pub evaluations: usize,
}

impl ClosestInfo {
    /// No closest location and no evaluations performed.
    pub const NONE: ClosestInfo = ClosestInfo {
        loc: None,
        dist: f64::INFINITY,
        evaluations: 0,
    };

    /// Seed a search with a known location and its distance.
    pub fn new(loc: Location, dist: f64, evaluations: usize) -> Self {
        Self {
            loc: Some(loc),
            dist,
            evaluations,
        }
    }
}

impl Default for ClosestInfo {
    fn default() -> Self {
        Self::NONE
    }
}

/// Returns the closer of `closest` and the nearest location in `tree` to `loc`.
///
/// `bounds` must contain every location `tree` can hold. The evaluation
/// count goes up by one each time a location in the tree replaces the best
/// result; subtrees skipped by the bounds test add nothing.
///
/// Locations at exactly the same distance are ordered by x, then y, so the
/// answer does not depend on how the tree was split.
///
/// # Examples
///
/// ```rust
/// use loctree::{ClosestInfo, Location, LocationTree, Region};
/// use loctree::tree::nearest::closest_in_tree;
///
/// let tree = LocationTree::build(&[Location::new(1.0, 1.0), Location::new(5.0, 5.0)]);
/// let info = closest_in_tree(&tree, &Location::new(2.0, 1.0), &Region::EVERYWHERE, ClosestInfo::NONE);
/// assert_eq!(info.loc, Some(Location::new(1.0, 1.0)));
/// assert_eq!(info.dist, 1.0);
/// assert_eq!(info.evaluations, 1);
/// ```
pub fn closest_in_tree(
    tree: &LocationTree,
    loc: &Location,
    bounds: &Region,
    closest: ClosestInfo,
) -> ClosestInfo {
    if distance_more_than(loc, bounds, closest.dist) {
        return closest;
    }

    match tree {
        LocationTree::Empty => closest,
        LocationTree::Single { loc: candidate, .. } => {
            let d = distance(loc, candidate);
            if beats(candidate, d, &closest) {
                ClosestInfo::new(*candidate, d, closest.evaluations + 1)
            } else {
                closest
            }
        }
        LocationTree::Split { at, children } => {
            visit_order(at, loc)
                .into_iter()
                .fold(closest, |best, quadrant| {
                    let child_bounds = quadrant.bounds(at, bounds);
                    closest_in_tree(children.get(quadrant), loc, &child_bounds, best)
                })
        }
    }
}

/// Whether `candidate` at distance `d` should replace the current best.
fn beats(candidate: &Location, d: f64, closest: &ClosestInfo) -> bool {
    if d != closest.dist {
        return d < closest.dist;
    }
    closest.loc.is_some_and(|best| {
        candidate.x() < best.x() || (candidate.x() == best.x() && candidate.y() < best.y())
    })
}

/// Children of a split at `at`, most promising first for a search from `loc`.
///
/// The quadrant holding `loc` comes first and the diagonally opposite one
/// last. In between, the neighbour across the nearer split line goes first.
fn visit_order(at: &Location, loc: &Location) -> [Quadrant; 4] {
    let home = Quadrant::of(loc, at);
    let dx = (loc.x() - at.x()).abs();
    let dy = (loc.y() - at.y()).abs();

    if dx < dy {
        [home, home.across_x(), home.across_y(), home.opposite()]
    } else {
        [home, home.across_y(), home.across_x(), home.opposite()]
    }
}

/// Returns the location in the tree closest to any of `refs`, paired with
/// its distance to the nearest of them.
///
/// On ties between reference locations, the one listed first wins.
/// Reference locations are always checked for finite coordinates, whatever
/// configuration built the tree.
///
/// # Errors
///
/// - [`LocTreeError::NoReferenceLocations`] if `refs` is empty
/// - [`LocTreeError::EmptyTree`] if the tree holds no locations
/// - [`LocTreeError::InvalidInput`] if a reference location is not finite
pub fn find_closest_in_tree(tree: &LocationTree, refs: &[Location]) -> Result<(Location, f64)> {
    if refs.is_empty() {
        return Err(LocTreeError::NoReferenceLocations);
    }
    if tree.is_empty() {
        return Err(LocTreeError::EmptyTree);
    }
    validate_locations(refs)?;

    let mut best = ClosestInfo::NONE;
    let mut evaluations = 0;
    for r in refs {
        let found = closest_in_tree(tree, r, &Region::EVERYWHERE, ClosestInfo::NONE);
        evaluations += found.evaluations;
        if found.dist < best.dist {
            best = found;
        }
    }
    log::debug!(
        "closest search over {} reference locations took {} evaluations",
        refs.len(),
        evaluations
    );

    let loc = best.loc.ok_or_else(|| {
        LocTreeError::InvalidInput("tree holds no location at a finite distance".to_string())
    })?;
    Ok((loc, best.dist))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SplitStrategy;
    use crate::tree::build::{build_tree, build_tree_with};

    fn loc(x: f64, y: f64) -> Location {
        Location::new(x, y)
    }

    /// One location per quadrant around the origin.
    fn cross() -> LocationTree {
        LocationTree::split(
            loc(0.0, 0.0),
            LocationTree::single(loc(-1.0, -1.0)),
            LocationTree::single(loc(2.0, -2.0)),
            LocationTree::single(loc(-2.0, 2.0)),
            LocationTree::single(loc(1.0, 1.0)),
        )
    }

    const BOUNDS: Region = Region::new(-2.0, 2.0, -2.0, 2.0);

    #[test]
    fn test_pruned_by_bounds() {
        let seeded = ClosestInfo::new(loc(3.0, 0.0), 0.0, 0);
        assert_eq!(closest_in_tree(&cross(), &loc(3.0, 0.0), &BOUNDS, seeded), seeded);
    }

    #[test]
    fn test_empty_subtree() {
        let seeded = ClosestInfo::new(loc(3.0, 0.0), 0.5, 7);
        assert_eq!(
            closest_in_tree(&LocationTree::Empty, &loc(3.0, 0.0), &Region::EVERYWHERE, seeded),
            seeded
        );
        assert_eq!(
            closest_in_tree(
                &LocationTree::Empty,
                &loc(3.0, 0.0),
                &Region::EVERYWHERE,
                ClosestInfo::NONE
            ),
            ClosestInfo::NONE
        );
    }

    #[test]
    fn test_single_improves() {
        let leaf = LocationTree::single(loc(1.0, 0.0));
        assert_eq!(
            closest_in_tree(&leaf, &loc(3.0, 0.0), &BOUNDS, ClosestInfo::NONE),
            ClosestInfo::new(loc(1.0, 0.0), 2.0, 1)
        );
    }

    #[test]
    fn test_single_not_better() {
        let leaf = LocationTree::single(loc(1.0, 0.0));
        let seeded = ClosestInfo::new(loc(3.0, 0.0), 0.5, 4);
        assert_eq!(
            closest_in_tree(&leaf, &loc(3.0, 0.0), &Region::EVERYWHERE, seeded),
            seeded
        );
    }

    #[test]
    fn test_home_quadrant_first() {
        let info = closest_in_tree(&cross(), &loc(1.1, 1.1), &BOUNDS, ClosestInfo::NONE);
        assert_eq!(info.loc, Some(loc(1.0, 1.0)));
        assert_eq!(info.evaluations, 1);
    }

    #[test]
    fn test_nearer_split_line_first() {
        // home is `se`; `sw` is reached across the nearer line but is no better
        let info = closest_in_tree(&cross(), &loc(2.0, 3.0), &BOUNDS, ClosestInfo::NONE);
        assert_eq!(info.loc, Some(loc(1.0, 1.0)));
        assert_eq!(info.dist, 5.0_f64.sqrt());
        assert_eq!(info.evaluations, 1);

        // home is `sw`; its neighbour across y holds the answer
        let info = closest_in_tree(&cross(), &loc(-1.0, 0.5), &BOUNDS, ClosestInfo::NONE);
        assert_eq!(info, ClosestInfo::new(loc(-1.0, -1.0), 1.5, 2));
    }

    #[test]
    fn test_visit_order() {
        let at = loc(0.0, 0.0);
        use Quadrant::*;
        assert_eq!(visit_order(&at, &loc(1.0, 3.0)), [Se, Sw, Ne, Nw]);
        assert_eq!(visit_order(&at, &loc(3.0, 1.0)), [Se, Ne, Sw, Nw]);
        assert_eq!(visit_order(&at, &loc(-1.0, -3.0)), [Nw, Ne, Sw, Se]);
        assert_eq!(visit_order(&at, &loc(-3.0, -1.0)), [Nw, Sw, Ne, Se]);
        assert_eq!(visit_order(&at, &loc(2.0, -2.0)), [Ne, Se, Nw, Sw]);
        // on the split point itself
        assert_eq!(visit_order(&at, &at), [Se, Ne, Sw, Nw]);
    }

    #[test]
    fn test_equidistant_locations_ordered_by_coordinates() {
        let origin = loc(0.0, 0.0);
        for locs in [[loc(0.0, -1.0), loc(0.0, 1.0)], [loc(0.0, 1.0), loc(0.0, -1.0)]] {
            for strategy in [SplitStrategy::Mean, SplitStrategy::Median] {
                let tree = build_tree_with(&locs, strategy);
                let info =
                    closest_in_tree(&tree, &origin, &Region::EVERYWHERE, ClosestInfo::NONE);
                assert_eq!(info.loc, Some(loc(0.0, -1.0)));
                assert_eq!(info.dist, 1.0);
            }
        }

        // smaller x wins before y is looked at
        let tree = build_tree(&[loc(1.0, -1.0), loc(-1.0, 1.0), loc(1.0, 1.0)]);
        assert_eq!(
            find_closest_in_tree(&tree, &[origin]),
            Ok((loc(-1.0, 1.0), 2.0_f64.sqrt()))
        );
    }

    #[test]
    fn test_equidistant_location_replaces_seed() {
        let leaf = LocationTree::single(loc(0.0, -1.0));
        let seeded = ClosestInfo::new(loc(0.0, 1.0), 1.0, 0);
        assert_eq!(
            closest_in_tree(&leaf, &loc(0.0, 0.0), &Region::EVERYWHERE, seeded),
            ClosestInfo::new(loc(0.0, -1.0), 1.0, 1)
        );

        let seeded = ClosestInfo::new(loc(-1.0, 0.0), 1.0, 0);
        assert_eq!(
            closest_in_tree(&leaf, &loc(0.0, 0.0), &Region::EVERYWHERE, seeded),
            seeded
        );
    }

    #[test]
    fn test_find_closest() {
        assert_eq!(
            find_closest_in_tree(&build_tree(&[loc(2.0, 1.0)]), &[loc(1.0, 1.0)]),
            Ok((loc(2.0, 1.0), 1.0))
        );
        assert_eq!(
            find_closest_in_tree(
                &build_tree(&[loc(3.0, 1.0), loc(2.0, 1.0), loc(1.0, 3.0)]),
                &[loc(1.0, 1.0)]
            ),
            Ok((loc(2.0, 1.0), 1.0))
        );

        let corners = build_tree(&[loc(1.0, 1.0), loc(1.0, 5.0), loc(5.0, 1.0), loc(5.0, 5.0)]);
        assert_eq!(
            find_closest_in_tree(&corners, &[loc(2.0, 1.0)]),
            Ok((loc(1.0, 1.0), 1.0))
        );
        assert_eq!(
            find_closest_in_tree(&corners, &[loc(2.0, 1.0), loc(-1.0, -1.0)]),
            Ok((loc(1.0, 1.0), 1.0))
        );
        assert_eq!(
            find_closest_in_tree(&corners, &[loc(4.0, 1.0), loc(-1.0, -1.0), loc(10.0, 10.0)]),
            Ok((loc(5.0, 1.0), 1.0))
        );

        let (found, dist) =
            find_closest_in_tree(&corners, &[loc(2.0, 1.0), loc(4.9, 4.9)]).unwrap();
        assert_eq!(found, loc(5.0, 5.0));
        assert!((dist - (2.0 * 0.1_f64 * 0.1).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_find_closest_ties_go_to_first_reference() {
        let tree = build_tree(&[loc(1.0, 0.0), loc(11.0, 0.0)]);
        assert_eq!(
            find_closest_in_tree(&tree, &[loc(0.0, 0.0), loc(10.0, 0.0)]),
            Ok((loc(1.0, 0.0), 1.0))
        );
        assert_eq!(
            find_closest_in_tree(&tree, &[loc(10.0, 0.0), loc(0.0, 0.0)]),
            Ok((loc(11.0, 0.0), 1.0))
        );
    }

    #[test]
    fn test_find_closest_errors() {
        let tree = build_tree(&[loc(1.0, 1.0)]);
        assert_eq!(
            find_closest_in_tree(&tree, &[]),
            Err(LocTreeError::NoReferenceLocations)
        );
        assert_eq!(
            find_closest_in_tree(&LocationTree::Empty, &[loc(0.0, 0.0)]),
            Err(LocTreeError::EmptyTree)
        );
        assert!(matches!(
            find_closest_in_tree(&tree, &[loc(f64::NAN, 0.0)]),
            Err(LocTreeError::InvalidInput(_))
        ));
    }
}
