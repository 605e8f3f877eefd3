//! Line detector driving the Hough stages end-to-end.
//!
//! Overview
//! - Validates the options and the image size before any pixel is read.
//! - Builds the `(φ, r)` accumulator from the edge map.
//! - Extracts the strongest, well-separated peaks.
//! - Clips each peak's line to the image rectangle; candidates without a
//!   visible segment are skipped and reported, not treated as failures.
//!
//! Typical usage:
//! ```no_run
//! use hough_lines::{HoughLineDetector, HoughOptions};
//! use hough_lines::image::EdgeMask;
//!
//! # fn example(edges: EdgeMask) -> Result<(), hough_lines::HoughError> {
//! let detector = HoughLineDetector::new(HoughOptions::default().with_max_lines(4));
//! let detection = detector.process(&edges)?;
//! for line in &detection.lines {
//!     println!("{:?} votes={}", line.segment, line.votes);
//! }
//! # Ok(())
//! # }
//! ```

mod pipeline;

pub use pipeline::{detect_lines, DetectedLine, HoughDetection, HoughLineDetector};
