//! Geometry primitives and input validation used by the location tree.
//!
//! Everything here is a pure function over `Location` and `Region` values;
//! the tree algorithms in [`crate::tree`] are built on top of these.

pub mod geometry;
pub mod validation;

pub use geometry::{
    centroid, distance, distance_more_than, is_in_region, locations_in_region, overlap,
    same_location, sorted_locations, squared_distance,
};
