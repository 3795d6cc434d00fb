use serde::{Deserialize, Serialize};

/// A location in the plane.
///
/// Equality is exact coordinate equality, with no tolerance.
pub type Location = geo::Point<f64>;

/// Coordinate axis used when ordering locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Get the coordinate of `loc` along this axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use loctree_types::point::{Axis, Location};
    ///
    /// let loc = Location::new(1.5, -2.0);
    /// assert_eq!(Axis::X.coord(&loc), 1.5);
    /// assert_eq!(Axis::Y.coord(&loc), -2.0);
    /// ```
    pub fn coord(self, loc: &Location) -> f64 {
        match self {
            Axis::X => loc.x(),
            Axis::Y => loc.y(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_coord() {
        let loc = Location::new(3.0, 4.0);
        assert_eq!(Axis::X.coord(&loc), 3.0);
        assert_eq!(Axis::Y.coord(&loc), 4.0);
    }

    #[test]
    fn test_location_equality_is_exact() {
        assert_eq!(Location::new(0.0, 1.0), Location::new(0.0, 1.0));
        assert_ne!(Location::new(0.0, 1.0), Location::new(0.0, 1.0 + f64::EPSILON));
    }
}
