use super::timing::TimingBreakdown;
use crate::hough::{AccumulatorSpace, Candidate, PeakExtraction, PolarLine};
use serde::Serialize;

/// Per-run trace returned alongside the detected lines.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoughReport {
    pub input: InputDescriptor,
    pub accumulator: AccumulatorSummary,
    pub peaks: PeakSummary,
    /// Candidates whose line did not produce a segment inside the image.
    pub skipped: Vec<SkippedCandidate>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulatorSummary {
    pub phi_dim: usize,
    pub r_dim: usize,
    pub phi_step: f32,
    pub r_step: f32,
    pub max_votes: u32,
    pub total_votes: u64,
}

impl AccumulatorSummary {
    pub fn from_accumulator(acc: &AccumulatorSpace) -> Self {
        Self {
            phi_dim: acc.phi_dim(),
            r_dim: acc.r_dim(),
            phi_step: acc.phi_step(),
            r_step: acc.r_step(),
            max_votes: acc.max_votes(),
            total_votes: acc.total_votes(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakSummary {
    pub min_votes: u32,
    pub above_threshold: usize,
    pub suppressed: usize,
    pub selected: usize,
}

impl PeakSummary {
    pub fn new(min_votes: u32, peaks: &PeakExtraction) -> Self {
        Self {
            min_votes,
            above_threshold: peaks.above_threshold,
            suppressed: peaks.suppressed,
            selected: peaks.candidates.len(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedCandidate {
    pub phi_index: usize,
    pub r_index: usize,
    pub votes: u32,
    pub line: PolarLine,
}

impl From<&Candidate> for SkippedCandidate {
    fn from(c: &Candidate) -> Self {
        Self {
            phi_index: c.phi_index,
            r_index: c.r_index,
            votes: c.votes,
            line: c.line,
        }
    }
}
