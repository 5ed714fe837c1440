//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Spec` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `analyze(spec) -> Result<_, AnalysisError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`cantilever`] - Cantilever beam shear force and bending moment diagrams

pub mod cantilever;

// Re-export commonly used types
pub use cantilever::{analyze, BeamSpec, SegmentResult};
