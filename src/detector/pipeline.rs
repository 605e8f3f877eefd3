use crate::diagnostics::{
    AccumulatorSummary, HoughReport, InputDescriptor, PeakSummary, SkippedCandidate,
};
use crate::hough::{
    build_accumulator, extract_peaks, reconstruct, AccumulatorSpace, HoughError, HoughOptions,
    LineSegment, PolarLine,
};
use crate::image::{EdgePixel, ImageView};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// A detected line: its visible segment plus the accumulator peak behind it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedLine {
    pub segment: LineSegment,
    pub line: PolarLine,
    pub votes: u32,
    pub phi_index: usize,
    pub r_index: usize,
}

/// Output of one [`HoughLineDetector::process`] call.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoughDetection {
    /// Lines in descending vote order (ties by ascending accumulator index).
    pub lines: Vec<DetectedLine>,
    /// Filled accumulator, only when `keep_accumulator` is set.
    #[serde(skip)]
    pub accumulator: Option<AccumulatorSpace>,
    pub report: HoughReport,
}

impl HoughDetection {
    pub fn segments(&self) -> Vec<LineSegment> {
        self.lines.iter().map(|l| l.segment).collect()
    }
}

/// Stateless Hough line detector configured once and reusable across images.
#[derive(Clone, Debug, Default)]
pub struct HoughLineDetector {
    options: HoughOptions,
}

impl HoughLineDetector {
    pub fn new(options: HoughOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HoughOptions {
        &self.options
    }

    /// Runs accumulator → peaks → reconstruction on `image`.
    pub fn process<I>(&self, image: &I) -> Result<HoughDetection, HoughError>
    where
        I: ImageView + Sync,
        I::Pixel: EdgePixel,
    {
        let t_total = Instant::now();
        let (width, height) = (image.width(), image.height());
        let opts = &self.options;
        let mut report = HoughReport {
            input: InputDescriptor { width, height },
            ..Default::default()
        };

        let t_acc = Instant::now();
        let acc = build_accumulator(image, opts)?;
        report
            .timings
            .push("accumulator", t_acc.elapsed().as_secs_f64() * 1000.0);
        report.accumulator = AccumulatorSummary::from_accumulator(&acc);

        let t_peaks = Instant::now();
        let peaks = extract_peaks(&acc, opts.min_votes, opts.max_lines, opts.suppression);
        report
            .timings
            .push("peaks", t_peaks.elapsed().as_secs_f64() * 1000.0);
        report.peaks = PeakSummary::new(opts.min_votes, &peaks);

        let t_rec = Instant::now();
        let mut lines = Vec::with_capacity(peaks.candidates.len());
        for cand in &peaks.candidates {
            match reconstruct(cand, width, height) {
                Some(segment) => lines.push(DetectedLine {
                    segment,
                    line: cand.line,
                    votes: cand.votes,
                    phi_index: cand.phi_index,
                    r_index: cand.r_index,
                }),
                None => {
                    debug!(
                        "Hough: skipping candidate phi_index={} r_index={} (r={:.3}, phi={:.4}) votes={}: no visible segment",
                        cand.phi_index, cand.r_index, cand.line.r, cand.line.phi, cand.votes
                    );
                    report.skipped.push(SkippedCandidate::from(cand));
                }
            }
        }
        report
            .timings
            .push("reconstruct", t_rec.elapsed().as_secs_f64() * 1000.0);
        report.timings.total_ms = t_total.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "Hough: image={}x{} lines={} skipped={} total_ms={:.3}",
            width,
            height,
            lines.len(),
            report.skipped.len(),
            report.timings.total_ms
        );

        Ok(HoughDetection {
            lines,
            accumulator: opts.keep_accumulator.then_some(acc),
            report,
        })
    }
}

/// Convenience wrapper returning only the segments.
pub fn detect_lines<I>(image: &I, options: &HoughOptions) -> Result<Vec<LineSegment>, HoughError>
where
    I: ImageView + Sync,
    I::Pixel: EdgePixel,
{
    HoughLineDetector::new(*options)
        .process(image)
        .map(|d| d.segments())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::EdgeMask;

    #[test]
    fn invalid_configuration_fails_before_scan() {
        let mask = EdgeMask::new(10, 10);
        let detector = HoughLineDetector::new(HoughOptions::default().with_steps(-0.1, 2.5));
        assert!(matches!(
            detector.process(&mask),
            Err(HoughError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn keeps_accumulator_on_request() {
        let mask = EdgeMask::from_points(10, 10, (0..10).map(|y| (4, y)));
        let mut opts = HoughOptions::default().with_min_votes(5);
        let without = HoughLineDetector::new(opts).process(&mask).expect("detect");
        assert!(without.accumulator.is_none());
        opts.keep_accumulator = true;
        let with = HoughLineDetector::new(opts).process(&mask).expect("detect");
        let acc = with.accumulator.as_ref().expect("accumulator");
        assert_eq!(acc.max_votes(), with.report.accumulator.max_votes);
        assert_eq!(without.lines, with.lines);
    }

    #[test]
    fn report_records_every_stage() {
        let mask = EdgeMask::from_points(12, 8, (0..12).map(|x| (x, 3)));
        let detection = HoughLineDetector::new(HoughOptions::default().with_min_votes(6))
            .process(&mask)
            .expect("detect");
        let timings = &detection.report.timings;
        for stage in ["accumulator", "peaks", "reconstruct"] {
            assert!(timings.stage_ms(stage).is_some(), "missing stage {stage}");
        }
        assert_eq!(detection.report.input.width, 12);
        assert_eq!(detection.report.peaks.selected, detection.lines.len());
        assert!(detection.report.skipped.is_empty());
    }
}
