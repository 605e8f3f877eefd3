/// Blank 8-bit edge buffer.
pub fn blank_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![0u8; width * height]
}

/// Marks the pixels nearest to the segment `p0 → p1` (DDA rasterisation).
pub fn draw_line_u8(img: &mut [u8], width: usize, p0: (f32, f32), p1: (f32, f32)) {
    let height = img.len() / width;
    let dx = p1.0 - p0.0;
    let dy = p1.1 - p0.1;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = (p0.0 + t * dx).round();
        let y = (p0.1 + t * dy).round();
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let (x, y) = (x as usize, y as usize);
        if x < width && y < height {
            img[y * width + x] = 255;
        }
    }
}

/// Edge buffer containing every pixel `(x, y)` with `|x·cos φ + y·sin φ - r| <= 0.5`.
pub fn polar_line_u8(width: usize, height: usize, r: f32, phi: f32) -> Vec<u8> {
    let mut img = blank_u8(width, height);
    let (c, s) = (phi.cos(), phi.sin());
    for y in 0..height {
        for x in 0..width {
            if (x as f32 * c + y as f32 * s - r).abs() <= 0.5 {
                img[y * width + x] = 255;
            }
        }
    }
    img
}
