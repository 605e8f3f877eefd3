//! Line reconstruction: polar `(r, φ)` back to the visible segment of the
//! infinite line inside the image rectangle `[0, W] × [0, H]`.
//!
//! Border intersections are computed in homogeneous coordinates as the cross
//! product of the line `(cos φ, sin φ, -r)` with each border line. A border
//! parallel to the line yields a point at infinity (`w ≈ 0`), which is how
//! the axis-aligned cases (`sin φ = 0` or `cos φ = 0`) avoid a division by
//! zero. Every border is tested; the in-bounds hits are deduplicated (a line
//! through a corner meets two borders at the same point) and the two farthest
//! apart form the segment.
use super::peaks::Candidate;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Below this `|w|` the intersection is treated as a point at infinity.
const PARALLEL_EPS: f32 = 1e-6;
/// Slack when testing whether an intersection lies on the rectangle.
const BOUNDS_TOL: f32 = 1e-3;

/// Line `x·cos(φ) + y·sin(φ) = r`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolarLine {
    /// Signed perpendicular distance from the origin.
    pub r: f32,
    /// Angle of the normal in radians.
    pub phi: f32,
}

impl PolarLine {
    pub fn new(r: f32, phi: f32) -> Self {
        Self { r, phi }
    }

    /// Homogeneous form `(a, b, c)` with `ax + by + c = 0` and `a² + b² = 1`.
    pub fn homogeneous(&self) -> Vector3<f32> {
        Vector3::new(self.phi.cos(), self.phi.sin(), -self.r)
    }

    /// Unsigned distance from `p` to the line.
    pub fn distance_to(&self, p: [f32; 2]) -> f32 {
        (p[0] * self.phi.cos() + p[1] * self.phi.sin() - self.r).abs()
    }
}

/// Visible portion of a detected line, in image pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p0: [f32; 2],
    pub p1: [f32; 2],
}

impl LineSegment {
    pub fn length(&self) -> f32 {
        let dx = self.p1[0] - self.p0[0];
        let dy = self.p1[1] - self.p0[1];
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self) -> [f32; 2] {
        [
            (self.p0[0] + self.p1[0]) * 0.5,
            (self.p0[1] + self.p1[1]) * 0.5,
        ]
    }
}

/// Clips `line` against `[0, width] × [0, height]`.
///
/// Returns `None` when fewer than two distinct border intersections fall
/// inside the rectangle (the line misses the image or only grazes a corner).
pub fn clip_to_rect(line: &PolarLine, width: f32, height: f32) -> Option<LineSegment> {
    let l = line.homogeneous();
    // x = 0, y = 0, x = W, y = H
    let borders = [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(1.0, 0.0, -width),
        Vector3::new(0.0, 1.0, -height),
    ];

    let mut hits: Vec<[f32; 2]> = Vec::with_capacity(4);
    for border in &borders {
        let p = l.cross(border);
        if p.z.abs() < PARALLEL_EPS {
            continue;
        }
        let x = p.x / p.z;
        let y = p.y / p.z;
        let inside = (-BOUNDS_TOL..=width + BOUNDS_TOL).contains(&x)
            && (-BOUNDS_TOL..=height + BOUNDS_TOL).contains(&y);
        if !inside {
            continue;
        }
        // + 0.0 folds -0.0 into 0.0
        let q = [x.clamp(0.0, width) + 0.0, y.clamp(0.0, height) + 0.0];
        let duplicate = hits
            .iter()
            .any(|h| (h[0] - q[0]).abs() <= BOUNDS_TOL && (h[1] - q[1]).abs() <= BOUNDS_TOL);
        if !duplicate {
            hits.push(q);
        }
    }

    let mut best: Option<(f32, usize, usize)> = None;
    for i in 0..hits.len() {
        for j in i + 1..hits.len() {
            let dx = hits[j][0] - hits[i][0];
            let dy = hits[j][1] - hits[i][1];
            let d2 = dx * dx + dy * dy;
            if best.map_or(true, |(bd, _, _)| d2 > bd) {
                best = Some((d2, i, j));
            }
        }
    }
    best.map(|(_, i, j)| LineSegment {
        p0: hits[i],
        p1: hits[j],
    })
}

/// Segment of a peak candidate inside a `width × height` image.
pub fn reconstruct(candidate: &Candidate, width: usize, height: usize) -> Option<LineSegment> {
    clip_to_rect(&candidate.line, width as f32, height as f32)
}
