use hough_lines::config::load_config;
use hough_lines::image::io::{load_edge_mask, save_grayscale_u8, write_json_file};
use hough_lines::{HoughDetection, HoughLineDetector, HoughOptions};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let mut config = load_config(Path::new(&config_path))?;
    if config.output.accumulator_image.is_some() {
        config.hough.keep_accumulator = true;
    }

    let edges = load_edge_mask(&config.input, config.edge.threshold)?;
    let detector = HoughLineDetector::new(config.hough);
    let detection = detector.process(&edges).map_err(|e| e.to_string())?;

    if let (Some(path), Some(acc)) = (
        config.output.accumulator_image.as_ref(),
        detection.accumulator.as_ref(),
    ) {
        let img = acc.to_gray_image(config.output.normalize_accumulator);
        save_grayscale_u8(&img, path)?;
        println!(
            "Saved {}x{} accumulator image to {}",
            acc.r_dim() + 2,
            acc.phi_dim() + 2,
            path.display()
        );
    }

    let summary = LinesSummary {
        width: edges.w,
        height: edges.h,
        edge_pixels: edges.count(),
        options: &config.hough,
        detection: &detection,
    };
    write_json_file(&config.output.lines_json, &summary)?;

    println!(
        "Saved {} lines ({} skipped) to {}",
        detection.lines.len(),
        detection.report.skipped.len(),
        config.output.lines_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: hough_lines <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinesSummary<'a> {
    width: usize,
    height: usize,
    edge_pixels: usize,
    options: &'a HoughOptions,
    detection: &'a HoughDetection,
}
