//! Cantilever Beam Analysis
//!
//! Computes shear force (SF) and bending moment (BM) diagrams for a
//! cantilever beam under concentrated loads and uniformly distributed
//! loads (UDLs). The span is divided into equal segments and the net SF
//! and BM are evaluated at every segment boundary by superposition of the
//! per-load closed-form contributions.
//!
//! ## Sign Convention
//! - Loads act downward; positions are measured from the free end A
//! - Shear force is positive (sum of loads behind the section)
//! - Bending moment is negative (hogging, as expected for a cantilever)
//!
//! ## Discontinuities
//! Shear jumps where a concentrated load is applied. A station sitting
//! exactly on a load position reports the pre-jump shear in its base
//! values, and carries the post-jump shear for each coincident load in
//! [`SegmentResult::shear_after_loads`] so the diagram shows both sides of
//! the step.
//!
//! ## Example
//! ```rust
//! use cantbm_core::calculations::cantilever::{analyze, BeamSpec};
//! use cantbm_core::loads::PointLoad;
//!
//! // 6 unit span, 6 segments, 10 units of load at midspan
//! let spec = BeamSpec::new(6.0, 6).with_point_load(PointLoad::new(10.0, 3.0));
//! let results = analyze(&spec).unwrap();
//!
//! assert_eq!(results.len(), 7);
//! assert_eq!(results[6].shear_force, 10.0);
//! assert_eq!(results[6].bending_moment, -30.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, AnalysisResult};
use crate::loads::{DistributedLoad, PointLoad, MAX_LOADS};

/// Beam geometry and loading for one cantilever analysis run.
///
/// Built once from caller input and treated as immutable afterwards; the
/// analysis never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSpec {
    /// Span of the beam, from the free end A to the fixed support
    pub span: f64,
    /// Number of equal segments the span is divided into
    pub segment_count: usize,
    /// Concentrated loads, in input order
    pub point_loads: Vec<PointLoad>,
    /// Uniformly distributed loads, in input order
    pub distributed_loads: Vec<DistributedLoad>,
}

impl BeamSpec {
    /// Create an unloaded beam spec
    pub fn new(span: f64, segment_count: usize) -> Self {
        BeamSpec {
            span,
            segment_count,
            point_loads: Vec::new(),
            distributed_loads: Vec::new(),
        }
    }

    /// Add a concentrated load and return self (builder pattern)
    pub fn with_point_load(mut self, load: PointLoad) -> Self {
        self.point_loads.push(load);
        self
    }

    /// Add a UDL and return self (builder pattern)
    pub fn with_distributed_load(mut self, load: DistributedLoad) -> Self {
        self.distributed_loads.push(load);
        self
    }

    /// Add a concentrated load
    pub fn add_point_load(&mut self, load: PointLoad) {
        self.point_loads.push(load);
    }

    /// Add a UDL
    pub fn add_distributed_load(&mut self, load: DistributedLoad) {
        self.distributed_loads.push(load);
    }

    /// Station spacing (span divided by segment count)
    pub fn dx(&self) -> f64 {
        self.span / self.segment_count as f64
    }

    /// Net shear force at section `x` (superposition over all loads)
    pub fn shear_at(&self, x: f64) -> f64 {
        let vc: f64 = self.point_loads.iter().map(|p| p.shear_at(x)).sum();
        let vu: f64 = self.distributed_loads.iter().map(|u| u.shear_at(x)).sum();
        vc + vu
    }

    /// Net bending moment at section `x` (superposition over all loads)
    pub fn moment_at(&self, x: f64) -> f64 {
        let mc: f64 = self.point_loads.iter().map(|p| p.moment_at(x)).sum();
        let mu: f64 = self.distributed_loads.iter().map(|u| u.moment_at(x)).sum();
        mc + mu
    }

    /// Validate input parameters.
    ///
    /// Everything that can fail is rejected here, before any computation.
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.span <= 0.0 {
            return Err(AnalysisError::invalid_input(
                "span",
                self.span.to_string(),
                "Span must be positive",
            ));
        }
        if self.segment_count < 1 {
            return Err(AnalysisError::invalid_input(
                "segment_count",
                self.segment_count.to_string(),
                "At least one segment is required",
            ));
        }
        if self.point_loads.len() > MAX_LOADS {
            return Err(AnalysisError::too_many_loads(
                "point",
                self.point_loads.len(),
                MAX_LOADS,
            ));
        }
        if self.distributed_loads.len() > MAX_LOADS {
            return Err(AnalysisError::too_many_loads(
                "distributed",
                self.distributed_loads.len(),
                MAX_LOADS,
            ));
        }
        for (i, load) in self.point_loads.iter().enumerate() {
            if load.position < 0.0 || load.position > self.span {
                return Err(AnalysisError::invalid_input(
                    format!("point_loads[{i}].position"),
                    load.position.to_string(),
                    "Load position must lie within the span",
                ));
            }
        }
        for (i, load) in self.distributed_loads.iter().enumerate() {
            if load.length <= 0.0 {
                return Err(AnalysisError::invalid_input(
                    format!("distributed_loads[{i}].length"),
                    load.length.to_string(),
                    "UDL length must be positive",
                ));
            }
            if load.start < 0.0 || load.end() > self.span {
                return Err(AnalysisError::invalid_input(
                    format!("distributed_loads[{i}].start"),
                    load.start.to_string(),
                    "UDL must lie entirely within the span",
                ));
            }
        }
        Ok(())
    }
}

/// Shear force and bending moment at one station along the span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentResult {
    /// Station position measured from the free end A
    pub position: f64,
    /// Net shear force at the station
    pub shear_force: f64,
    /// Net bending moment at the station
    pub bending_moment: f64,
    /// Shear immediately after each concentrated load applied exactly at
    /// this station, one entry per coincident load in input order. Empty
    /// for stations that carry no concentrated load.
    pub shear_after_loads: Vec<f64>,
}

/// Analyze a cantilever beam, producing one [`SegmentResult`] per station.
///
/// Stations are the `segment_count + 1` equally spaced positions
/// `x_i = i * span / segment_count`, from the free end (0) to the fixed
/// support (span) inclusive. The computation is pure and deterministic:
/// the same spec always yields the same results.
///
/// Coincidence of a station with a load position is detected by exact
/// floating-point equality. When `span / segment_count` is not exactly
/// representable, a load placed at a nominal station value may not match
/// it and the jump row is not produced.
///
/// # Arguments
///
/// * `spec` - Beam geometry and loading
///
/// # Returns
///
/// * `Ok(Vec<SegmentResult>)` - One entry per station, in span order
/// * `Err(AnalysisError)` - Structured error if inputs are invalid
///
/// # Example
///
/// ```rust
/// use cantbm_core::calculations::cantilever::{analyze, BeamSpec};
/// use cantbm_core::loads::DistributedLoad;
///
/// // Full-span UDL: at the fixed support V = wL and M = -wL^2/2
/// let spec = BeamSpec::new(4.0, 4).with_distributed_load(DistributedLoad::new(3.0, 0.0, 4.0));
/// let results = analyze(&spec).unwrap();
/// assert_eq!(results[4].shear_force, 12.0);
/// assert_eq!(results[4].bending_moment, -24.0);
/// ```
pub fn analyze(spec: &BeamSpec) -> AnalysisResult<Vec<SegmentResult>> {
    spec.validate()?;

    let dx = spec.dx();
    let mut results = Vec::with_capacity(spec.segment_count + 1);
    for i in 0..=spec.segment_count {
        let x = i as f64 * dx;
        let shear_force = spec.shear_at(x);
        let bending_moment = spec.moment_at(x);
        // Each coincident load steps the shear by its own intensity only,
        // so the diagram shows every individual jump at the station.
        let shear_after_loads = spec
            .point_loads
            .iter()
            .filter(|p| p.is_at(x))
            .map(|p| shear_force + p.intensity)
            .collect();
        results.push(SegmentResult {
            position: x,
            shear_force,
            bending_moment,
            shear_after_loads,
        });
    }
    Ok(results)
}
