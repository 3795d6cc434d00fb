//! Validation for input locations and query regions.

use crate::error::{LocTreeError, Result};
use loctree_types::point::Location;
use loctree_types::region::Region;

/// Validates a location has finite coordinates.
///
/// A NaN coordinate compares false against every split point, and an
/// infinite one drags every centroid it takes part in to infinity.
///
/// # Examples
///
/// ```
/// use loctree::Location;
/// use loctree::compute::validation::validate_location;
///
/// assert!(validate_location(&Location::new(-74.0, 40.7)).is_ok());
/// assert!(validate_location(&Location::new(f64::NAN, 40.7)).is_err());
/// assert!(validate_location(&Location::new(0.0, f64::INFINITY)).is_err());
/// ```
pub fn validate_location(loc: &Location) -> Result<()> {
    let (x, y) = (loc.x(), loc.y());

    if !x.is_finite() {
        return Err(LocTreeError::InvalidInput(format!(
            "x coordinate must be finite, got: {}",
            x
        )));
    }

    if !y.is_finite() {
        return Err(LocTreeError::InvalidInput(format!(
            "y coordinate must be finite, got: {}",
            y
        )));
    }

    Ok(())
}

/// Validates multiple locations, reporting the index of the first bad one.
pub fn validate_locations(locs: &[Location]) -> Result<()> {
    for (idx, loc) in locs.iter().enumerate() {
        validate_location(loc).map_err(|e| {
            LocTreeError::InvalidInput(format!("Location at index {}: {}", idx, e))
        })?;
    }
    Ok(())
}

/// Validates a region is well formed.
///
/// Bounds may be infinite, but none may be NaN, and each minimum must not
/// exceed its maximum.
///
/// # Examples
///
/// ```
/// use loctree::Region;
/// use loctree::compute::validation::validate_region;
///
/// assert!(validate_region(&Region::new(0.0, 1.0, 0.0, 1.0)).is_ok());
/// assert!(validate_region(&Region::EVERYWHERE).is_ok());
/// assert!(validate_region(&Region::new(1.0, 0.0, 0.0, 1.0)).is_err());
/// ```
pub fn validate_region(region: &Region) -> Result<()> {
    let bounds = [region.x1, region.x2, region.y1, region.y2];
    if bounds.iter().any(|b| b.is_nan()) {
        return Err(LocTreeError::InvalidInput(format!(
            "region bounds must not be NaN, got: {:?}",
            region
        )));
    }

    if region.x1 > region.x2 {
        return Err(LocTreeError::InvalidInput(format!(
            "region x1 ({}) must not exceed x2 ({})",
            region.x1, region.x2
        )));
    }

    if region.y1 > region.y2 {
        return Err(LocTreeError::InvalidInput(format!(
            "region y1 ({}) must not exceed y2 ({})",
            region.y1, region.y2
        )));
    }

    Ok(())
}
