use super::error::HoughError;
use serde::{Deserialize, Serialize};

/// Neighbourhood, in accumulator bins, within which weaker peaks are
/// discarded as duplicates of an already selected one.
///
/// A radius of zero on both axes disables suppression: the extractor then
/// returns the raw top-K cells by vote count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuppressionRadius {
    /// Half-width of the neighbourhood along the angle axis.
    pub phi_bins: usize,
    /// Half-width of the neighbourhood along the radial axis.
    pub r_bins: usize,
}

impl SuppressionRadius {
    pub const NONE: SuppressionRadius = SuppressionRadius {
        phi_bins: 0,
        r_bins: 0,
    };

    pub fn is_disabled(&self) -> bool {
        self.phi_bins == 0 && self.r_bins == 0
    }
}

impl Default for SuppressionRadius {
    fn default() -> Self {
        Self {
            phi_bins: 2,
            r_bins: 4,
        }
    }
}

/// Parameters of a single transform run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughOptions {
    /// Angular discretization step in radians.
    pub phi_step: f32,
    /// Radial discretization step in pixels.
    pub r_step: f32,
    /// A cell becomes a candidate only with strictly more votes than this.
    pub min_votes: u32,
    /// Cap on the number of returned lines.
    pub max_lines: usize,
    /// Non-maximum suppression neighbourhood.
    pub suppression: SuppressionRadius,
    /// Hand the filled accumulator back with the detection result.
    pub keep_accumulator: bool,
}

impl Default for HoughOptions {
    fn default() -> Self {
        Self {
            phi_step: 0.06,
            r_step: 2.5,
            min_votes: 200,
            max_lines: 10,
            suppression: SuppressionRadius::default(),
            keep_accumulator: false,
        }
    }
}

impl HoughOptions {
    pub fn with_min_votes(mut self, min_votes: u32) -> Self {
        self.min_votes = min_votes;
        self
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_steps(mut self, phi_step: f32, r_step: f32) -> Self {
        self.phi_step = phi_step;
        self.r_step = r_step;
        self
    }

    pub fn with_suppression(mut self, suppression: SuppressionRadius) -> Self {
        self.suppression = suppression;
        self
    }

    /// Checks the image-independent ranges. Image-dependent checks (at least
    /// one radial bin) happen when the accumulator is sized.
    pub fn validate(&self) -> Result<(), HoughError> {
        if !self.phi_step.is_finite() || self.phi_step <= 0.0 {
            return Err(HoughError::config(
                "phi_step",
                format!("must be a positive finite angle, got {}", self.phi_step),
            ));
        }
        if self.phi_step > std::f32::consts::PI {
            return Err(HoughError::config(
                "phi_step",
                format!("{} rad leaves no angle bin in [0, π)", self.phi_step),
            ));
        }
        if !self.r_step.is_finite() || self.r_step <= 0.0 {
            return Err(HoughError::config(
                "r_step",
                format!("must be a positive finite distance, got {}", self.r_step),
            ));
        }
        Ok(())
    }
}
