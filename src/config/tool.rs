use crate::hough::HoughOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct HoughToolConfig {
    /// Edge image (PNG/JPEG/...) converted to grayscale on load.
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub edge: EdgeInputConfig,
    #[serde(default)]
    pub hough: HoughOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EdgeInputConfig {
    /// Pixels brighter than this are edges; 0 keeps every non-black pixel.
    pub threshold: u8,
}

impl Default for EdgeInputConfig {
    fn default() -> Self {
        Self { threshold: 0 }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(rename = "lines_json")]
    pub lines_json: PathBuf,
    /// Optional PNG rendering of the vote grid.
    #[serde(default)]
    pub accumulator_image: Option<PathBuf>,
    /// Rescale votes by the maximum instead of saturating at 255.
    #[serde(default)]
    pub normalize_accumulator: bool,
}

pub fn load_config(path: &Path) -> Result<HoughToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<HoughToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(
            r#"{ "input": "edges.png", "output": { "lines_json": "out/lines.json" } }"#,
        )
        .expect("parse");
        assert_eq!(cfg.input, PathBuf::from("edges.png"));
        assert_eq!(cfg.edge.threshold, 0);
        assert_eq!(cfg.hough, HoughOptions::default());
        assert!(cfg.output.accumulator_image.is_none());
        assert!(!cfg.output.normalize_accumulator);
    }

    #[test]
    fn full_config_overrides_options() {
        let cfg = parse_config(
            r#"{
                "input": "edges.png",
                "edge": { "threshold": 127 },
                "hough": { "phi_step": 0.02, "r_step": 1.0, "min_votes": 40, "max_lines": 4,
                           "suppression": { "phi_bins": 0, "r_bins": 0 } },
                "output": { "lines_json": "lines.json", "accumulator_image": "acc.png",
                            "normalize_accumulator": true }
            }"#,
        )
        .expect("parse");
        assert_eq!(cfg.edge.threshold, 127);
        assert_eq!(cfg.hough.phi_step, 0.02);
        assert_eq!(cfg.hough.max_lines, 4);
        assert!(cfg.hough.suppression.is_disabled());
        assert_eq!(cfg.output.accumulator_image, Some(PathBuf::from("acc.png")));
    }

    #[test]
    fn missing_output_is_an_error() {
        assert!(parse_config(r#"{ "input": "edges.png" }"#).is_err());
    }
}
