//! Distance, containment and ordering over locations and regions.

use loctree_types::point::{Axis, Location};
use loctree_types::region::Region;
use std::cmp::Ordering;

/// Check whether two locations have exactly the same coordinates.
pub fn same_location(a: &Location, b: &Location) -> bool {
    a.x() == b.x() && a.y() == b.y()
}

/// Squared Euclidean distance between two locations.
///
/// Use this when only the relative order of distances matters.
pub fn squared_distance(a: &Location, b: &Location) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}

/// Euclidean distance between two locations.
///
/// # Examples
///
/// ```rust
/// use loctree::Location;
/// use loctree::compute::distance;
///
/// let d = distance(&Location::new(0.0, 0.0), &Location::new(3.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
pub fn distance(a: &Location, b: &Location) -> f64 {
    squared_distance(a, b).sqrt()
}

/// Arithmetic mean of the given locations, or `None` if there are none.
///
/// # Examples
///
/// ```rust
/// use loctree::Location;
/// use loctree::compute::centroid;
///
/// let c = centroid(&[Location::new(0.0, 0.0), Location::new(1.0, 2.0)]).unwrap();
/// assert_eq!(c, Location::new(0.5, 1.0));
/// assert!(centroid(&[]).is_none());
/// ```
pub fn centroid(locs: &[Location]) -> Option<Location> {
    if locs.is_empty() {
        return None;
    }

    let (sx, sy) = locs
        .iter()
        .fold((0.0, 0.0), |(sx, sy), loc| (sx + loc.x(), sy + loc.y()));
    let n = locs.len() as f64;
    Some(Location::new(sx / n, sy / n))
}

/// Check if `loc` is inside the closed region.
pub fn is_in_region(loc: &Location, region: &Region) -> bool {
    region.contains_location(loc)
}

/// Check if two closed regions share at least one point.
pub fn overlap(a: &Region, b: &Region) -> bool {
    a.intersects(b)
}

/// Check if every point of `region` is strictly farther than `dist` from `loc`.
///
/// This is the pruning test of the nearest-neighbour search. The minimum
/// distance is computed through the same `sqrt(dx² + dy²)` path as
/// [`distance`], and since `dx`/`dy` only grow for points inside the region,
/// a `true` answer means no point of the region can come out closer than
/// `dist`.
///
/// # Examples
///
/// ```rust
/// use loctree::{Location, Region};
/// use loctree::compute::distance_more_than;
///
/// let r = Region::new(-1.0, 1.0, -1.0, 1.0);
/// assert!(distance_more_than(&Location::new(2.0, 2.0), &r, 1.0));
/// assert!(!distance_more_than(&Location::new(2.0, 2.0), &r, 2.0_f64.sqrt()));
/// ```
pub fn distance_more_than(loc: &Location, region: &Region, dist: f64) -> bool {
    region.min_distance_to(loc) > dist
}

/// Locations inside the region, in input order.
pub fn locations_in_region(locs: &[Location], region: &Region) -> Vec<Location> {
    locs.iter()
        .filter(|loc| is_in_region(loc, region))
        .copied()
        .collect()
}

/// Locations sorted by their coordinate along `axis`.
///
/// The sort is stable: locations with equal coordinates keep their input order.
pub fn sorted_locations(locs: &[Location], axis: Axis) -> Vec<Location> {
    let mut sorted = locs.to_vec();
    sorted.sort_by(|a, b| {
        axis.coord(a)
            .partial_cmp(&axis.coord(b))
            .unwrap_or(Ordering::Equal)
    });
    sorted
}
