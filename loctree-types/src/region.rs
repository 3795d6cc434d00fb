use crate::point::Location;
use serde::{Deserialize, Serialize};

/// A closed, axis-aligned rectangle.
///
/// Bounds may be infinite, so a region can stand for a half-plane, a strip
/// or the whole plane. A location lying exactly on a bound is inside the
/// region. Callers are expected to supply `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Minimum x coordinate
    pub x1: f64,
    /// Maximum x coordinate
    pub x2: f64,
    /// Minimum y coordinate
    pub y1: f64,
    /// Maximum y coordinate
    pub y2: f64,
}

impl Region {
    /// The whole plane.
    pub const EVERYWHERE: Region = Region {
        x1: f64::NEG_INFINITY,
        x2: f64::INFINITY,
        y1: f64::NEG_INFINITY,
        y2: f64::INFINITY,
    };

    /// Create a region from its x range and y range.
    ///
    /// # Examples
    ///
    /// ```
    /// use loctree_types::point::Location;
    /// use loctree_types::region::Region;
    ///
    /// let region = Region::new(1.0, 3.0, 1.0, 2.0);
    /// assert!(region.contains_location(&Location::new(3.0, 2.0)));
    /// assert!(!region.contains_location(&Location::new(2.0, 2.5)));
    /// ```
    pub const fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self { x1, x2, y1, y2 }
    }

    /// Create a region from a `geo::Rect`.
    pub fn from_rect(rect: geo::Rect<f64>) -> Self {
        Self::new(rect.min().x, rect.max().x, rect.min().y, rect.max().y)
    }

    /// Check if a location is inside this region, bounds included.
    pub fn contains_location(&self, loc: &Location) -> bool {
        self.x1 <= loc.x() && loc.x() <= self.x2 && self.y1 <= loc.y() && loc.y() <= self.y2
    }

    /// Check if this region shares at least one point with another.
    ///
    /// Regions that only touch along an edge or at a corner intersect.
    pub fn intersects(&self, other: &Region) -> bool {
        !(self.x2 < other.x1 || other.x2 < self.x1 || self.y2 < other.y1 || other.y2 < self.y1)
    }

    /// Minimum Euclidean distance from `loc` to any point of this region.
    ///
    /// Zero when the location is inside. Otherwise the distance straight
    /// across the nearest side, or to the nearest corner when the location
    /// is outside the region's range on both axes.
    pub fn min_distance_to(&self, loc: &Location) -> f64 {
        let dx = gap(loc.x(), self.x1, self.x2);
        let dy = gap(loc.y(), self.y1, self.y2);
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<geo::Rect<f64>> for Region {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self::from_rect(rect)
    }
}

/// Distance from `v` to the closed interval `[lo, hi]`.
fn gap(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo - v
    } else if v > hi {
        v - hi
    } else {
        0.0
    }
}
