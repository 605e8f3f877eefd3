//! Owned binary edge map in row-major layout (stride == width).
//!
//! Produced by binarising a grayscale edge-strength image or by marking
//! individual pixels; the transform only ever reads it.
use super::traits::ImageView;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMask {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<bool>,
}

impl EdgeMask {
    /// All-background mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![false; w * h],
        }
    }

    /// Marks every pixel whose value is strictly greater than `threshold`.
    ///
    /// With `threshold == 0` this matches the plain "non-zero is edge" rule.
    pub fn from_gray<I>(image: &I, threshold: u8) -> Self
    where
        I: ImageView<Pixel = u8>,
    {
        let (w, h) = (image.width(), image.height());
        let mut data = Vec::with_capacity(w * h);
        for row in image.rows() {
            data.extend(row.iter().map(|&v| v > threshold));
        }
        Self { w, h, data }
    }

    /// Mask with the listed pixels set; coordinates outside the image are ignored.
    pub fn from_points<P>(w: usize, h: usize, points: P) -> Self
    where
        P: IntoIterator<Item = (usize, usize)>,
    {
        let mut mask = Self::new(w, h);
        for (x, y) in points {
            if x < w && y < h {
                mask.set(x, y, true);
            }
        }
        mask
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, edge: bool) {
        self.data[y * self.w + x] = edge;
    }

    /// Number of edge pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&e| e).count()
    }
}

impl ImageView for EdgeMask {
    type Pixel = bool;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[bool]> {
        Some(&self.data)
    }
}
