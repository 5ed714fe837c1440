//! # cantbm_core - Cantilever Beam Analysis Engine
//!
//! `cantbm_core` computes shear force (SF) and bending moment (BM)
//! diagrams for a cantilever beam under concentrated and uniformly
//! distributed loads. The span is discretized into equal segments and the
//! net SF/BM are evaluated at every segment boundary, with an extra
//! post-jump value wherever a station coincides with a concentrated load.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All public types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Output**: Reports go to a sink the caller owns
//!
//! ## Quick Start
//!
//! ```rust
//! use cantbm_core::calculations::cantilever::{analyze, BeamSpec};
//! use cantbm_core::loads::PointLoad;
//! use cantbm_core::report::render_report;
//!
//! let spec = BeamSpec::new(6.0, 6).with_point_load(PointLoad::new(10.0, 3.0));
//! let results = analyze(&spec).unwrap();
//! print!("{}", render_report(&results));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The cantilever SF/BM analysis
//! - [`loads`] - Concentrated and distributed load types
//! - [`report`] - Fixed-width report rendering and appending
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod loads;
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use calculations::cantilever::{analyze, BeamSpec, SegmentResult};
pub use errors::{AnalysisError, AnalysisResult};
pub use loads::{DistributedLoad, PointLoad, MAX_LOADS};
