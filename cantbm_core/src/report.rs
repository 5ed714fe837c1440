//! Report Rendering
//!
//! Renders analysis results as a fixed-width text table. The field widths
//! are a compatibility contract: consumers that diff or parse `cantbm.out`
//! rely on them byte-for-byte:
//!
//! ```text
//!  x      SF      BM
//!     0      0.000      0.000
//!     3      0.000      0.000
//!     3     10.000      0.000
//!     6     10.000    -30.000
//! ```
//!
//! Positions print as 5-wide integers, shear and moment as 10-wide values
//! with 3 decimals. A station carrying concentrated loads gets one extra
//! row per load with the post-jump shear and unchanged moment.
//!
//! Output always goes to an explicit caller-scoped sink; there is no
//! process-wide report file. [`append_report`] opens, appends one report
//! and releases the handle - callers wanting a fresh file truncate it
//! themselves.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use crate::calculations::cantilever::SegmentResult;
use crate::errors::{AnalysisError, AnalysisResult};

/// Header line of the tabulated report
pub const REPORT_HEADER: &str = " x      SF      BM";

fn push_row(out: &mut String, position: f64, shear: f64, moment: f64) {
    writeln!(out, "{position:5.0} {shear:10.3} {moment:10.3}")
        .expect("writing to string cannot fail");
}

/// Render one report as a String.
///
/// # Example
///
/// ```rust
/// use cantbm_core::calculations::cantilever::{analyze, BeamSpec};
/// use cantbm_core::report::render_report;
///
/// let results = analyze(&BeamSpec::new(2.0, 1)).unwrap();
/// let report = render_report(&results);
/// assert!(report.starts_with(" x      SF      BM\n"));
/// ```
pub fn render_report(results: &[SegmentResult]) -> String {
    let mut out = String::new();
    out.push_str(REPORT_HEADER);
    out.push('\n');
    for row in results {
        push_row(&mut out, row.position, row.shear_force, row.bending_moment);
        for &after in &row.shear_after_loads {
            push_row(&mut out, row.position, after, row.bending_moment);
        }
    }
    out
}

/// Write one report to the given sink.
pub fn write_report<W: io::Write>(sink: &mut W, results: &[SegmentResult]) -> io::Result<()> {
    sink.write_all(render_report(results).as_bytes())
}

/// Append one report to the file at `path`, creating the file if needed.
///
/// Each invocation appends a complete report. Truncating between runs is
/// the caller's policy, not the formatter's.
pub fn append_report(path: &Path, results: &[SegmentResult]) -> AnalysisResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            AnalysisError::file_error("open", path.display().to_string(), e.to_string())
        })?;
    write_report(&mut file, results).map_err(|e| {
        AnalysisError::file_error("write", path.display().to_string(), e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::cantilever::{analyze, BeamSpec};
    use crate::loads::PointLoad;

    #[test]
    fn test_header_and_field_widths() {
        let spec = BeamSpec::new(6.0, 6).with_point_load(PointLoad::new(10.0, 3.0));
        let results = analyze(&spec).unwrap();
        let report = render_report(&results);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], " x      SF      BM");
        assert_eq!(lines[1], "    0      0.000      0.000");
        // The jump row at x = 3 sits between the base rows for 3 and 4
        assert_eq!(lines[6], "    4     10.000    -10.000");
        assert_eq!(lines[8], "    6     10.000    -30.000");
    }

    #[test]
    fn test_coincident_load_emits_extra_row() {
        let spec = BeamSpec::new(6.0, 6).with_point_load(PointLoad::new(10.0, 3.0));
        let results = analyze(&spec).unwrap();
        let report = render_report(&results);
        let lines: Vec<&str> = report.lines().collect();

        // Header + 7 stations + 1 jump row
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[4], "    3      0.000      0.000");
        assert_eq!(lines[5], "    3     10.000      0.000");
    }

    #[test]
    fn test_coincident_loads_keep_input_order() {
        let spec = BeamSpec::new(4.0, 4)
            .with_point_load(PointLoad::new(5.0, 2.0))
            .with_point_load(PointLoad::new(3.0, 2.0));
        let results = analyze(&spec).unwrap();
        let report = render_report(&results);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[3], "    2      0.000      0.000");
        assert_eq!(lines[4], "    2      5.000      0.000");
        assert_eq!(lines[5], "    2      3.000      0.000");
    }

    #[test]
    fn test_write_report_appends_per_invocation() {
        let spec = BeamSpec::new(2.0, 1);
        let results = analyze(&spec).unwrap();

        let mut sink: Vec<u8> = Vec::new();
        write_report(&mut sink, &results).unwrap();
        write_report(&mut sink, &results).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert_eq!(text.matches(REPORT_HEADER).count(), 2);
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_append_report_accumulates_on_disk() {
        let spec = BeamSpec::new(2.0, 1);
        let results = analyze(&spec).unwrap();

        let dir = std::env::temp_dir();
        let path = dir.join("cantbm_report_test.out");
        let _ = std::fs::remove_file(&path);

        append_report(&path, &results).unwrap();
        append_report(&path, &results).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches(REPORT_HEADER).count(), 2);

        let _ = std::fs::remove_file(&path);
    }
}
