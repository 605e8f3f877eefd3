//! Accumulator builder: every edge pixel votes for all discretized lines
//! `x·cos(φ) + y·sin(φ) = r` passing through it.
//!
//! The vote grid is stored flat with a 1-cell margin on every side. That
//! layout is private to [`CellLayout`]; callers address cells by
//! `(phi_index, r_index)` and only see the flat index through
//! [`AccumulatorSpace::flat_index`] / [`AccumulatorSpace::cell_at`].
use super::error::HoughError;
use super::options::HoughOptions;
use super::reconstruct::PolarLine;
use crate::image::io::GrayImageU8;
use crate::image::{EdgePixel, ImageView};
use log::debug;
use std::time::Instant;

/// Upper bound on accumulator cells (margin included), 1 GiB of `u32`.
const MAX_CELLS: usize = 1 << 28;

/// Flat storage layout of a `phi_dim × r_dim` grid surrounded by a 1-cell margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CellLayout {
    phi_dim: usize,
    r_dim: usize,
}

impl CellLayout {
    #[inline]
    fn row_len(&self) -> usize {
        self.r_dim + 2
    }

    #[inline]
    fn len(&self) -> usize {
        (self.phi_dim + 2) * self.row_len()
    }

    #[inline]
    fn flat(&self, phi_index: usize, r_index: usize) -> usize {
        debug_assert!(phi_index < self.phi_dim && r_index < self.r_dim);
        (phi_index + 1) * self.row_len() + (r_index + 1)
    }

    /// Inverse of [`Self::flat`]; `None` for margin cells and indices past the end.
    fn cell(&self, flat: usize) -> Option<(usize, usize)> {
        if flat >= self.len() {
            return None;
        }
        let row = flat / self.row_len();
        let col = flat % self.row_len();
        if row == 0 || row > self.phi_dim || col == 0 || col > self.r_dim {
            return None;
        }
        Some((row - 1, col - 1))
    }
}

/// Cosine/sine per angle bin, shared by every pixel.
struct TrigTable {
    cos: Vec<f32>,
    sin: Vec<f32>,
}

impl TrigTable {
    fn new(phi_dim: usize, phi_step: f32) -> Self {
        let (cos, sin): (Vec<f32>, Vec<f32>) = (0..phi_dim)
            .map(|i| {
                let phi = i as f32 * phi_step;
                (phi.cos(), phi.sin())
            })
            .unzip();
        Self { cos, sin }
    }
}

/// Vote grid over discretized `(φ, r)` space for one edge image.
#[derive(Clone, Debug, PartialEq)]
pub struct AccumulatorSpace {
    layout: CellLayout,
    phi_step: f32,
    r_step: f32,
    cells: Vec<u32>,
}

impl AccumulatorSpace {
    /// Zeroed accumulator sized for a `width × height` image.
    ///
    /// - `phi_dim = floor(π / phi_step)`
    /// - `r_dim = floor((2·(width + height) + 1) / r_step)`
    pub fn new(width: usize, height: usize, options: &HoughOptions) -> Result<Self, HoughError> {
        if width == 0 || height == 0 {
            return Err(HoughError::InvalidInput { width, height });
        }
        options.validate()?;
        let phi_dim = (std::f32::consts::PI / options.phi_step) as usize;
        let r_dim = ((2 * (width + height) + 1) as f32 / options.r_step) as usize;
        if phi_dim == 0 {
            return Err(HoughError::config(
                "phi_step",
                format!("{} rad leaves no angle bin", options.phi_step),
            ));
        }
        if r_dim == 0 {
            return Err(HoughError::config(
                "r_step",
                format!(
                    "{} px leaves no radial bin for a {width}x{height} image",
                    options.r_step
                ),
            ));
        }
        let phi_rows = phi_dim.checked_add(2).filter(|&n| n <= MAX_CELLS);
        let r_cols = r_dim.checked_add(2).filter(|&n| n <= MAX_CELLS);
        let Some(phi_rows) = phi_rows else {
            return Err(HoughError::config(
                "phi_step",
                format!("{} rad yields too many angle bins", options.phi_step),
            ));
        };
        let Some(r_cols) = r_cols else {
            return Err(HoughError::config(
                "r_step",
                format!("{} px yields too many radial bins", options.r_step),
            ));
        };
        if phi_rows
            .checked_mul(r_cols)
            .map_or(true, |n| n > MAX_CELLS)
        {
            return Err(HoughError::config(
                "r_step",
                format!(
                    "{phi_dim}x{r_dim} bins exceed the {MAX_CELLS} cell limit (phi_step={}, r_step={})",
                    options.phi_step, options.r_step
                ),
            ));
        }
        let layout = CellLayout { phi_dim, r_dim };
        Ok(Self {
            layout,
            phi_step: options.phi_step,
            r_step: options.r_step,
            cells: vec![0; layout.len()],
        })
    }

    pub fn phi_dim(&self) -> usize {
        self.layout.phi_dim
    }

    pub fn r_dim(&self) -> usize {
        self.layout.r_dim
    }

    pub fn phi_step(&self) -> f32 {
        self.phi_step
    }

    pub fn r_step(&self) -> f32 {
        self.r_step
    }

    /// Radial index at which `r == 0`.
    #[inline]
    pub fn r_center(&self) -> f32 {
        (self.layout.r_dim - 1) as f32 * 0.5
    }

    /// Votes in cell `(phi_index, r_index)`.
    ///
    /// Panics if either index is outside the grid.
    #[inline]
    pub fn votes(&self, phi_index: usize, r_index: usize) -> u32 {
        assert!(
            phi_index < self.layout.phi_dim && r_index < self.layout.r_dim,
            "cell ({phi_index}, {r_index}) outside {}x{} accumulator",
            self.layout.phi_dim,
            self.layout.r_dim
        );
        self.cells[self.layout.flat(phi_index, r_index)]
    }

    /// Flat storage index of a cell; stable identifier used to order ties.
    #[inline]
    pub fn flat_index(&self, phi_index: usize, r_index: usize) -> usize {
        self.layout.flat(phi_index, r_index)
    }

    /// Decodes a flat index back to `(phi_index, r_index)`.
    pub fn cell_at(&self, flat: usize) -> Option<(usize, usize)> {
        self.layout.cell(flat)
    }

    /// Angle of bin `phi_index`.
    #[inline]
    pub fn phi_of(&self, phi_index: usize) -> f32 {
        phi_index as f32 * self.phi_step
    }

    /// Signed offset of bin `r_index`, undoing the recentering.
    #[inline]
    pub fn r_of(&self, r_index: usize) -> f32 {
        (r_index as f32 - self.r_center()) * self.r_step
    }

    /// Radial bin that `r` quantizes to, or `None` outside the grid.
    #[inline]
    pub fn r_index_of(&self, r: f32) -> Option<usize> {
        quantize_r(r, self.r_step, self.r_center(), self.layout.r_dim)
    }

    /// Line represented by cell `(phi_index, r_index)`.
    pub fn line_at(&self, phi_index: usize, r_index: usize) -> PolarLine {
        PolarLine::new(self.r_of(r_index), self.phi_of(phi_index))
    }

    /// Interior cells in ascending flat-index order as `(flat, phi_index, r_index, votes)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, usize, u32)> + '_ {
        let layout = self.layout;
        (0..layout.phi_dim).flat_map(move |phi| {
            (0..layout.r_dim).map(move |r| {
                let flat = layout.flat(phi, r);
                (flat, phi, r, self.cells[flat])
            })
        })
    }

    /// Raw storage including the margin, `(phi_dim + 2)` rows of `(r_dim + 2)` cells.
    pub fn as_raw(&self) -> &[u32] {
        &self.cells
    }

    pub fn max_votes(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn total_votes(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// Renders the grid (margin included) as an 8-bit image with one row per
    /// angle bin. Votes saturate at 255 unless `normalize` rescales them by
    /// the maximum.
    pub fn to_gray_image(&self, normalize: bool) -> GrayImageU8 {
        let max = self.max_votes().max(1) as f32;
        let data = self
            .cells
            .iter()
            .map(|&v| {
                if normalize {
                    (v as f32 * 255.0 / max).round() as u8
                } else {
                    v.min(255) as u8
                }
            })
            .collect();
        GrayImageU8::new(self.layout.row_len(), self.layout.phi_dim + 2, data)
    }
}

#[inline]
fn quantize_r(r: f32, r_step: f32, r_center: f32, r_dim: usize) -> Option<usize> {
    let idx = (r / r_step + r_center).round();
    (idx >= 0.0 && idx < r_dim as f32).then_some(idx as usize)
}

/// Casts the votes of one image row into `cells`.
fn vote_row<P: EdgePixel>(
    cells: &mut [u32],
    layout: CellLayout,
    trig: &TrigTable,
    r_step: f32,
    row: &[P],
    y: usize,
) {
    let r_center = (layout.r_dim - 1) as f32 * 0.5;
    let yf = y as f32;
    for (x, &px) in row.iter().enumerate() {
        if !px.is_edge() {
            continue;
        }
        let xf = x as f32;
        for (phi_index, (&c, &s)) in trig.cos.iter().zip(trig.sin.iter()).enumerate() {
            let r = xf * c + yf * s;
            if let Some(r_index) = quantize_r(r, r_step, r_center, layout.r_dim) {
                cells[layout.flat(phi_index, r_index)] += 1;
            }
        }
    }
}

fn vote_serial<I>(image: &I, layout: CellLayout, trig: &TrigTable, r_step: f32) -> Vec<u32>
where
    I: ImageView,
    I::Pixel: EdgePixel,
{
    let mut cells = vec![0u32; layout.len()];
    for (y, row) in image.rows().enumerate() {
        vote_row(&mut cells, layout, trig, r_step, row, y);
    }
    cells
}

/// Partition-then-merge: each worker fills a private grid, grids are summed.
#[cfg(feature = "parallel")]
fn vote_parallel<I>(image: &I, layout: CellLayout, trig: &TrigTable, r_step: f32) -> Vec<u32>
where
    I: ImageView + Sync,
    I::Pixel: EdgePixel,
{
    use rayon::prelude::*;

    (0..image.height())
        .into_par_iter()
        .fold(
            || vec![0u32; layout.len()],
            |mut cells, y| {
                vote_row(&mut cells, layout, trig, r_step, image.row(y), y);
                cells
            },
        )
        .reduce(
            || vec![0u32; layout.len()],
            |mut acc, other| {
                for (a, b) in acc.iter_mut().zip(other) {
                    *a += b;
                }
                acc
            },
        )
}

/// Builds the accumulator for `image`.
///
/// Fails with [`HoughError::InvalidInput`] on an empty image and with
/// [`HoughError::InvalidConfiguration`] on out-of-range steps, before any
/// pixel is visited. With the `parallel` feature rows are voted on the rayon
/// pool; the result is identical to the serial scan.
pub fn build_accumulator<I>(image: &I, options: &HoughOptions) -> Result<AccumulatorSpace, HoughError>
where
    I: ImageView + Sync,
    I::Pixel: EdgePixel,
{
    let t0 = Instant::now();
    let mut acc = AccumulatorSpace::new(image.width(), image.height(), options)?;
    let trig = TrigTable::new(acc.layout.phi_dim, acc.phi_step);

    #[cfg(feature = "parallel")]
    let cells = vote_parallel(image, acc.layout, &trig, acc.r_step);
    #[cfg(not(feature = "parallel"))]
    let cells = vote_serial(image, acc.layout, &trig, acc.r_step);
    acc.cells = cells;

    debug!(
        "Hough accumulator: image={}x{} bins={}x{} max_votes={} elapsed_ms={:.3}",
        image.width(),
        image.height(),
        acc.phi_dim(),
        acc.r_dim(),
        acc.max_votes(),
        t0.elapsed().as_secs_f64() * 1000.0
    );
    Ok(acc)
}

/// Serial reference scan, independent of the `parallel` feature.
pub fn build_accumulator_serial<I>(
    image: &I,
    options: &HoughOptions,
) -> Result<AccumulatorSpace, HoughError>
where
    I: ImageView,
    I::Pixel: EdgePixel,
{
    let mut acc = AccumulatorSpace::new(image.width(), image.height(), options)?;
    let trig = TrigTable::new(acc.layout.phi_dim, acc.phi_step);
    acc.cells = vote_serial(image, acc.layout, &trig, acc.r_step);
    Ok(acc)
}

#[cfg(test)]
impl AccumulatorSpace {
    /// Test hook: plants votes directly.
    pub(crate) fn add_votes(&mut self, phi_index: usize, r_index: usize, votes: u32) {
        let flat = self.layout.flat(phi_index, r_index);
        self.cells[flat] += votes;
    }
}
