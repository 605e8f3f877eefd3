mod common;

use common::synthetic_image::{blank_u8, draw_line_u8, polar_line_u8};
use hough_lines::image::{EdgeMask, ImageU8};
use hough_lines::stages::{build_accumulator, extract_peaks};
use hough_lines::{detect_lines, HoughError, HoughLineDetector, HoughOptions, SuppressionRadius};

#[test]
fn vertical_line_scenario_yields_one_full_height_segment() {
    let mask = EdgeMask::from_points(20, 20, (0..20).map(|y| (5, y)));
    let opts = HoughOptions::default().with_min_votes(19).with_max_lines(1);
    let segments = detect_lines(&mask, &opts).expect("detect");
    assert_eq!(segments.len(), 1, "segments={segments:?}");
    let seg = segments[0];
    // x = 5 quantizes to r/Δr + (r_dim - 1)/2 = 2 + 15.5 = 17.5, which rounds
    // to radial bin 18; that bin decodes to r = (18 - 15.5) · 2.5 = 6.25.
    assert_eq!(seg.p0, [6.25, 0.0], "segment {seg:?}");
    assert_eq!(seg.p1, [6.25, 20.0], "segment {seg:?}");
    assert!((seg.p0[0] - 5.0).abs() <= opts.r_step * 0.5);
    assert_eq!(seg.p0[1].to_bits(), 0.0f32.to_bits());
}

#[test]
fn synthetic_oblique_line_is_the_global_maximum() {
    let (w, h) = (120usize, 90usize);
    // r = 41.25 lands on a radial bin centre, φ = 0.9 on angle bin 15
    let (r_true, phi_true) = (41.25f32, 0.9f32);
    let buffer = polar_line_u8(w, h, r_true, phi_true);
    let image = ImageU8::packed(w, h, &buffer);
    let opts = HoughOptions::default().with_min_votes(20).with_max_lines(3);

    let acc = build_accumulator(&image, &opts).expect("acc");
    let (best_phi, best_r, best_votes) = acc
        .cells()
        .fold((0, 0, 0u32), |best, (_, phi, r, v)| {
            if v > best.2 {
                (phi, r, v)
            } else {
                best
            }
        });
    let best_line = acc.line_at(best_phi, best_r);
    assert!((best_line.phi - phi_true).abs() <= opts.phi_step, "{best_line:?}");
    assert!((best_line.r - r_true).abs() <= opts.r_step, "{best_line:?}");

    let peaks = extract_peaks(&acc, opts.min_votes, opts.max_lines, opts.suppression);
    let top = peaks.candidates.first().expect("top candidate");
    assert_eq!(top.votes, best_votes);
    assert_eq!((top.phi_index, top.r_index), (best_phi, best_r));
}

#[test]
fn two_lines_are_reported_once_each() {
    let (w, h) = (100usize, 80usize);
    let mut buffer = blank_u8(w, h);
    draw_line_u8(&mut buffer, w, (0.0, 20.0), (99.0, 20.0));
    draw_line_u8(&mut buffer, w, (60.0, 0.0), (60.0, 79.0));
    let image = ImageU8::packed(w, h, &buffer);

    let opts = HoughOptions::default().with_min_votes(50).with_max_lines(5);
    let detection = HoughLineDetector::new(opts).process(&image).expect("detect");
    assert_eq!(detection.lines.len(), 2, "lines={:?}", detection.lines);
    // horizontal line has more pixels, so it ranks first
    let first = detection.lines[0].segment;
    let second = detection.lines[1].segment;
    assert!((first.p0[1] - 20.0).abs() <= opts.r_step && (first.p1[1] - 20.0).abs() <= opts.r_step);
    assert!((second.p0[0] - 60.0).abs() <= opts.r_step && (second.p1[0] - 60.0).abs() <= opts.r_step);
    assert!(detection.lines[0].votes >= detection.lines[1].votes);
}

#[test]
fn disabling_suppression_returns_near_duplicates() {
    let (w, h) = (100usize, 80usize);
    let mut buffer = blank_u8(w, h);
    draw_line_u8(&mut buffer, w, (0.0, 20.0), (99.0, 20.0));
    let image = ImageU8::packed(w, h, &buffer);

    let base = HoughOptions::default().with_min_votes(30).with_max_lines(5);
    let suppressed = detect_lines(&image, &base).expect("detect");
    let raw = detect_lines(&image, &base.with_suppression(SuppressionRadius::NONE)).expect("detect");
    assert_eq!(suppressed.len(), 1);
    assert!(raw.len() > 1, "raw={raw:?}");
    assert_eq!(raw[0], suppressed[0]);
}

#[test]
fn background_image_has_no_lines() {
    let mask = EdgeMask::new(30, 20);
    for min_votes in [0, 10, 200] {
        let opts = HoughOptions::default().with_min_votes(min_votes);
        let detection = HoughLineDetector::new(opts).process(&mask).expect("detect");
        assert!(detection.lines.is_empty());
        assert_eq!(detection.report.accumulator.total_votes, 0);
        assert_eq!(detection.report.peaks.above_threshold, 0);
    }
}

#[test]
fn pipeline_is_idempotent() {
    let (w, h) = (64usize, 64usize);
    let mut buffer = blank_u8(w, h);
    draw_line_u8(&mut buffer, w, (0.0, 5.0), (63.0, 50.0));
    draw_line_u8(&mut buffer, w, (10.0, 63.0), (40.0, 0.0));
    let image = ImageU8::packed(w, h, &buffer);
    let opts = HoughOptions::default().with_min_votes(15).with_max_lines(6);

    let a = detect_lines(&image, &opts).expect("detect");
    let b = detect_lines(&image, &opts).expect("detect");
    assert!(!a.is_empty());
    assert_eq!(a.len(), b.len());
    for (sa, sb) in a.iter().zip(&b) {
        for (va, vb) in sa.p0.iter().chain(&sa.p1).zip(sb.p0.iter().chain(&sb.p1)) {
            assert_eq!(va.to_bits(), vb.to_bits());
        }
    }
}

#[test]
fn segments_stay_inside_the_image() {
    let (w, h) = (80usize, 60usize);
    let mut buffer = blank_u8(w, h);
    draw_line_u8(&mut buffer, w, (0.0, 0.0), (79.0, 59.0));
    draw_line_u8(&mut buffer, w, (0.0, 59.0), (79.0, 10.0));
    draw_line_u8(&mut buffer, w, (30.0, 0.0), (30.0, 59.0));
    let image = ImageU8::packed(w, h, &buffer);
    let opts = HoughOptions::default().with_min_votes(25).with_max_lines(10);
    let detection = HoughLineDetector::new(opts).process(&image).expect("detect");
    assert!(!detection.lines.is_empty());
    for line in &detection.lines {
        for p in [line.segment.p0, line.segment.p1] {
            assert!(p[0] >= 0.0 && p[0] <= w as f32 && p[1] >= 0.0 && p[1] <= h as f32);
            assert!(line.line.distance_to(p) < 1e-2, "{line:?}");
        }
    }
}

#[test]
fn zero_sized_image_is_rejected() {
    let buffer: Vec<u8> = Vec::new();
    let image = ImageU8::packed(0, 0, &buffer);
    let err = detect_lines(&image, &HoughOptions::default()).unwrap_err();
    assert_eq!(err, HoughError::InvalidInput { width: 0, height: 0 });
    assert!(err.to_string().contains("0x0"));
}

#[test]
fn configuration_errors_are_reported_by_parameter() {
    let mask = EdgeMask::new(10, 10);
    let err = detect_lines(&mask, &HoughOptions::default().with_steps(0.06, 0.0)).unwrap_err();
    match err {
        HoughError::InvalidConfiguration { parameter, .. } => assert_eq!(parameter, "r_step"),
        other => panic!("unexpected error {other:?}"),
    }
}
