#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod hough;
pub mod image;

// Tool-facing configuration.
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{detect_lines, DetectedLine, HoughDetection, HoughLineDetector};
pub use crate::hough::{HoughError, HoughOptions, LineSegment, PolarLine, SuppressionRadius};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::HoughReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hough_lines::prelude::*;
///
/// # fn main() -> Result<(), HoughError> {
/// let (w, h) = (64usize, 48usize);
/// let edges = EdgeMask::from_points(w, h, (0..h).map(|y| (10, y)));
///
/// let detector = HoughLineDetector::new(HoughOptions {
///     min_votes: 30,
///     max_lines: 1,
///     ..Default::default()
/// });
///
/// let detection = detector.process(&edges)?;
/// println!("lines={} total_ms={:.3}", detection.lines.len(), detection.report.timings.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{EdgeMask, ImageU8};
    pub use crate::{HoughError, HoughLineDetector, HoughOptions, LineSegment};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::hough::{
        build_accumulator, clip_to_rect, extract_peaks, reconstruct, AccumulatorSpace, Candidate,
        PeakExtraction,
    };
}
