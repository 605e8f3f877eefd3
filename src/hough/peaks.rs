//! Peak extraction: thresholding plus greedy best-first selection with
//! non-maximum suppression in `(φ, r)` bin space.
//!
//! Cells are ranked by `(votes desc, flat index asc)`, so identical
//! accumulators always yield the same sequence. A cell is dropped when it lies
//! inside the suppression neighbourhood of an already selected peak. The
//! neighbourhood also wraps across the angle axis: `(r, φ)` and `(-r, φ + π)`
//! describe the same line, so a peak near φ = π suppresses its mirror near
//! φ = 0 and vice versa.
use super::accumulator::AccumulatorSpace;
use super::options::SuppressionRadius;
use super::reconstruct::PolarLine;
use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

/// Accumulator cell selected as a line hypothesis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Candidate {
    /// Flat accumulator index; breaks vote ties.
    pub index: usize,
    pub phi_index: usize,
    pub r_index: usize,
    pub votes: u32,
    /// Decoded `(r, φ)` of the cell.
    pub line: PolarLine,
}

/// Selected candidates plus counters for diagnostics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PeakExtraction {
    /// Best-first, at most `max_lines` long.
    pub candidates: Vec<Candidate>,
    /// Cells with strictly more than `min_votes` votes.
    pub above_threshold: usize,
    /// Cells discarded as neighbours of a stronger peak before the cap was hit.
    pub suppressed: usize,
}

#[inline]
fn rank(a: &Candidate, b: &Candidate) -> Ordering {
    b.votes.cmp(&a.votes).then(a.index.cmp(&b.index))
}

fn in_neighbourhood(
    a: &Candidate,
    b: &Candidate,
    radius: SuppressionRadius,
    phi_dim: usize,
    r_dim: usize,
) -> bool {
    let dphi = a.phi_index.abs_diff(b.phi_index);
    if dphi <= radius.phi_bins && a.r_index.abs_diff(b.r_index) <= radius.r_bins {
        return true;
    }
    // mirror b across the angle wrap: φ → φ ± π, r → -r
    let wrapped = phi_dim - dphi;
    let mirrored_r = (r_dim - 1) - b.r_index;
    wrapped <= radius.phi_bins && a.r_index.abs_diff(mirrored_r) <= radius.r_bins
}

/// Picks up to `max_lines` peaks with more than `min_votes` votes.
pub fn extract_peaks(
    acc: &AccumulatorSpace,
    min_votes: u32,
    max_lines: usize,
    suppression: SuppressionRadius,
) -> PeakExtraction {
    let mut ranked: Vec<Candidate> = acc
        .cells()
        .filter(|&(_, _, _, votes)| votes > min_votes)
        .map(|(index, phi_index, r_index, votes)| Candidate {
            index,
            phi_index,
            r_index,
            votes,
            line: acc.line_at(phi_index, r_index),
        })
        .collect();
    ranked.sort_by(rank);
    let above_threshold = ranked.len();

    let mut candidates: Vec<Candidate> = Vec::with_capacity(max_lines.min(above_threshold));
    let mut suppressed = 0usize;
    for cand in ranked {
        if candidates.len() >= max_lines {
            break;
        }
        let duplicate = !suppression.is_disabled()
            && candidates.iter().any(|sel| {
                in_neighbourhood(&cand, sel, suppression, acc.phi_dim(), acc.r_dim())
            });
        if duplicate {
            suppressed += 1;
            continue;
        }
        candidates.push(cand);
    }

    debug!(
        "Hough peaks: min_votes={} above_threshold={} suppressed={} selected={} (max_lines={})",
        min_votes,
        above_threshold,
        suppressed,
        candidates.len(),
        max_lines
    );
    PeakExtraction {
        candidates,
        above_threshold,
        suppressed,
    }
}
