//! Load definitions for cantilever analysis
//!
//! Two load kinds act on the beam: concentrated (point) loads and uniformly
//! distributed loads (UDLs). All positions are measured from the free end A
//! of the cantilever, and loads act downward, so every load past a section
//! adds positive shear and negative (hogging) moment at that section.
//!
//! Each load knows its own closed-form contribution to the shear force and
//! bending moment at a section; the analysis sums these by superposition.
//!
//! ## Example
//! ```
//! use cantbm_core::loads::{DistributedLoad, PointLoad};
//!
//! let p = PointLoad::new(10.0, 3.0);
//! assert_eq!(p.shear_at(4.0), 10.0);
//! assert_eq!(p.moment_at(4.0), -10.0);
//!
//! let w = DistributedLoad::new(2.0, 1.0, 4.0);
//! assert_eq!(w.end(), 5.0);
//! assert_eq!(w.shear_at(6.0), 8.0);
//! ```

use serde::{Deserialize, Serialize};

/// Maximum number of loads of each kind accepted on a single beam.
///
/// Inputs beyond this are rejected during validation rather than silently
/// dropped.
pub const MAX_LOADS: usize = 10;

/// A concentrated load acting downward at a single position.
///
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load intensity (force units)
    pub intensity: f64,
    /// Distance of the load from the free end A
    pub position: f64,
}

impl PointLoad {
    /// Create a point load of `intensity` at `position` from the free end
    pub fn new(intensity: f64, position: f64) -> Self {
        PointLoad {
            intensity,
            position,
        }
    }

    /// Shear force contribution at section `x`.
    ///
    /// Only sections strictly past the load see it; a section exactly at
    /// the load position reports the pre-jump shear (the jump itself is
    /// reported separately, see [`SegmentResult`]).
    ///
    /// [`SegmentResult`]: crate::calculations::cantilever::SegmentResult
    pub fn shear_at(&self, x: f64) -> f64 {
        if x > self.position {
            self.intensity
        } else {
            0.0
        }
    }

    /// Bending moment contribution at section `x` (force times lever arm,
    /// hogging negative).
    pub fn moment_at(&self, x: f64) -> f64 {
        if x > self.position {
            -self.intensity * (x - self.position)
        } else {
            0.0
        }
    }

    /// Whether the load sits exactly at section `x`.
    ///
    /// Exact floating-point comparison. A load position only matches a
    /// station when the station arithmetic reproduces it bit-for-bit, so
    /// positions that are not exactly representable at any station never
    /// trigger a match.
    pub fn is_at(&self, x: f64) -> bool {
        x == self.position
    }
}

/// A uniformly distributed load over the interval `[start, start + length]`.
///
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Load intensity (force per unit length)
    pub intensity: f64,
    /// Distance of the starting edge from the free end A
    pub start: f64,
    /// Loaded length (must be positive)
    pub length: f64,
}

impl DistributedLoad {
    /// Create a UDL of `intensity` starting `start` from the free end,
    /// extending over `length`
    pub fn new(intensity: f64, start: f64, length: f64) -> Self {
        DistributedLoad {
            intensity,
            start,
            length,
        }
    }

    /// Position of the far edge of the loaded interval
    pub fn end(&self) -> f64 {
        self.start + self.length
    }

    /// Shear force contribution at section `x`.
    ///
    /// Within the loaded interval only the portion behind the section
    /// counts; past the interval the full load does.
    pub fn shear_at(&self, x: f64) -> f64 {
        if x > self.start && x <= self.end() {
            self.intensity * (x - self.start)
        } else if x > self.end() {
            self.intensity * self.length
        } else {
            0.0
        }
    }

    /// Bending moment contribution at section `x`.
    ///
    /// Past the interval the load acts as its resultant at the centroid.
    pub fn moment_at(&self, x: f64) -> f64 {
        if x > self.start && x <= self.end() {
            -self.intensity * (x - self.start) * (x - self.start) / 2.0
        } else if x > self.end() {
            -self.intensity * self.length * (x - self.start - self.length / 2.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_load_before_and_after() {
        let load = PointLoad::new(10.0, 3.0);

        // Sections at or before the load see nothing
        assert_eq!(load.shear_at(0.0), 0.0);
        assert_eq!(load.shear_at(3.0), 0.0);
        assert_eq!(load.moment_at(3.0), 0.0);

        // Sections past the load see the full intensity and a growing arm
        assert_eq!(load.shear_at(4.0), 10.0);
        assert_eq!(load.moment_at(4.0), -10.0);
        assert_eq!(load.moment_at(6.0), -30.0);
    }

    #[test]
    fn test_point_load_coincidence_is_exact() {
        let load = PointLoad::new(5.0, 2.0);
        assert!(load.is_at(2.0));
        assert!(!load.is_at(2.0 + f64::EPSILON * 4.0));
    }

    #[test]
    fn test_udl_within_interval() {
        // 2 per unit length from 1.0 to 5.0
        let load = DistributedLoad::new(2.0, 1.0, 4.0);

        assert_eq!(load.shear_at(1.0), 0.0);
        assert_eq!(load.shear_at(3.0), 4.0);
        assert_eq!(load.moment_at(3.0), -4.0); // -2 * 2^2 / 2

        // The far edge is still "within" (x <= end)
        assert_eq!(load.shear_at(5.0), 8.0);
        assert_eq!(load.moment_at(5.0), -16.0);
    }

    #[test]
    fn test_udl_beyond_interval_uses_centroid() {
        let load = DistributedLoad::new(2.0, 1.0, 4.0);

        // Full load of 8 acting at the centroid (x = 3), arm = 6 - 3 = 3
        assert_eq!(load.shear_at(6.0), 8.0);
        assert_eq!(load.moment_at(6.0), -24.0);
    }

    #[test]
    fn test_udl_before_interval() {
        let load = DistributedLoad::new(2.0, 3.0, 2.0);
        assert_eq!(load.shear_at(1.0), 0.0);
        assert_eq!(load.moment_at(1.0), 0.0);
        assert_eq!(load.shear_at(3.0), 0.0);
    }

    #[test]
    fn test_serialization() {
        let point = PointLoad::new(10.0, 3.0);
        let json = serde_json::to_string(&point).unwrap();
        let roundtrip: PointLoad = serde_json::from_str(&json).unwrap();
        assert_eq!(point, roundtrip);

        let udl = DistributedLoad::new(2.5, 0.0, 6.0);
        let json = serde_json::to_string(&udl).unwrap();
        let roundtrip: DistributedLoad = serde_json::from_str(&json).unwrap();
        assert_eq!(udl, roundtrip);
    }
}
