//! Classical Hough transform over a binary edge map.
//!
//! Three stages, run in order:
//!
//! - Accumulator: every edge pixel `(x, y)` votes, for each angle bin
//!   `φ = i·Δφ` in `[0, π)`, into the radial bin of
//!   `r = x·cos(φ) + y·sin(φ)`. The radial axis is recentered so that
//!   `r ∈ [-(W+H), W+H]` maps onto `[0, r_dim)`.
//! - Peaks: cells with more than `min_votes` votes, taken best-first by
//!   `(votes desc, index asc)` with non-maximum suppression, capped at
//!   `max_lines`.
//! - Reconstruction: each peak's `(r, φ)` is intersected with the four image
//!   borders and the in-bounds pair becomes the reported segment.
//!
//! Notes
//! - Votes are unweighted and cover the full angular range; no gradient
//!   orientation gating.
//! - All three stages are pure; nothing is cached between calls.
//! - `Δφ`, `Δr`, the threshold and the suppression radius come from
//!   [`HoughOptions`] so the same image can be analysed at several resolutions.

pub mod accumulator;
pub mod error;
pub mod options;
pub mod peaks;
pub mod reconstruct;

pub use accumulator::{build_accumulator, build_accumulator_serial, AccumulatorSpace};
pub use error::HoughError;
pub use options::{HoughOptions, SuppressionRadius};
pub use peaks::{extract_peaks, Candidate, PeakExtraction};
pub use reconstruct::{clip_to_rect, reconstruct, LineSegment, PolarLine};
