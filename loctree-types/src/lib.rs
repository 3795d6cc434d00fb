//! # loctree-types
//!
//! Value types shared by the loctree spatial index:
//!
//! - **Locations**: `Location` (a `geo::Point<f64>`) and `Axis`
//! - **Regions**: `Region`, a closed and possibly unbounded rectangle
//!
//! ## Examples
//!
//! ```rust
//! use loctree_types::point::Location;
//! use loctree_types::region::Region;
//!
//! let depot = Location::new(2.0, 3.0);
//! let yard = Region::new(0.0, 4.0, 0.0, 4.0);
//! assert!(yard.contains_location(&depot));
//! assert!(Region::EVERYWHERE.contains_location(&depot));
//! ```

pub mod point;
pub mod region;
