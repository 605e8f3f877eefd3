//! Diagnostics data model returned by the detector.
//!
//! `HoughReport` summarises each stage (accumulator size and vote totals,
//! threshold/suppression counts, skipped candidates) together with stage
//! timings. Everything is `Serialize` so tools can dump it as JSON.

pub mod report;
pub mod timing;

pub use report::{
    AccumulatorSummary, HoughReport, InputDescriptor, PeakSummary, SkippedCandidate,
};
pub use timing::{StageTiming, TimingBreakdown};
