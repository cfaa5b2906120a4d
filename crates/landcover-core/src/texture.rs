//! Texture kernels: 3×3 Gaussian smoothing and uniform local binary patterns.
//!
//! Both are hand-rolled to reproduce the reference feature extraction the
//! paired model was trained against: the smoothing kernel is the fixed
//! 3-tap [1, 2, 1]/4 (OpenCV's sigma-0 case) with reflect-101 borders, and
//! the LBP matches scikit-image's `uniform` variant (bilinear circle
//! sampling, out-of-image samples read as zero).

/// LBP circle radius, pixels.
pub const LBP_RADIUS: f64 = 3.0;
/// Circle sample count (8 × radius).
pub const LBP_POINTS: usize = 24;
/// Codes 0..=LBP_POINTS are uniform patterns (popcounts); this value
/// collects every non-uniform pattern.
pub const LBP_NON_UNIFORM: u8 = (LBP_POINTS + 1) as u8;

/// Reflect an out-of-range index without repeating the border sample
/// (reflect-101). A length-1 axis always maps to 0.
fn reflect_101(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    if i < 0 {
        (-i) as usize
    } else if i as usize >= len {
        2 * (len - 1) - i as usize
    } else {
        i as usize
    }
}

/// 3×3 Gaussian smoothing of a row-major u8 grid.
///
/// Separable [1, 2, 1] taps per axis, exact integer arithmetic throughout,
/// one round-half-up division by 16 at the end.
pub fn gaussian_blur_3x3(src: &[u8], width: usize, height: usize) -> Vec<u8> {
    assert_eq!(src.len(), width * height, "pixel buffer does not match dimensions");

    // Horizontal pass, scale ×4.
    let mut horiz = vec![0u32; src.len()];
    for r in 0..height {
        let row = r * width;
        for c in 0..width {
            let left = src[row + reflect_101(c as isize - 1, width)] as u32;
            let mid = src[row + c] as u32;
            let right = src[row + reflect_101(c as isize + 1, width)] as u32;
            horiz[row + c] = left + 2 * mid + right;
        }
    }

    // Vertical pass, scale ×16, then back to u8.
    let mut out = vec![0u8; src.len()];
    for r in 0..height {
        let up = reflect_101(r as isize - 1, height) * width;
        let down = reflect_101(r as isize + 1, height) * width;
        for c in 0..width {
            let sum = horiz[up + c] + 2 * horiz[r * width + c] + horiz[down + c];
            out[r * width + c] = ((sum + 8) >> 4) as u8;
        }
    }
    out
}

/// Per-sample circle offsets (row, col), rounded to 5 decimals as in
/// scikit-image so the axis-aligned samples land on exact integers.
fn circle_offsets() -> [(f64, f64); LBP_POINTS] {
    let mut offsets = [(0.0, 0.0); LBP_POINTS];
    for (k, offset) in offsets.iter_mut().enumerate() {
        let angle = 2.0 * std::f64::consts::PI * k as f64 / LBP_POINTS as f64;
        *offset = (
            round5(-LBP_RADIUS * angle.sin()),
            round5(LBP_RADIUS * angle.cos()),
        );
    }
    offsets
}

fn round5(x: f64) -> f64 {
    (x * 1e5).round() / 1e5
}

/// Pixel value as f64, zero outside the image.
fn pixel_or_zero(src: &[u8], width: usize, height: usize, r: isize, c: isize) -> f64 {
    if r < 0 || c < 0 || r as usize >= height || c as usize >= width {
        0.0
    } else {
        src[r as usize * width + c as usize] as f64
    }
}

/// Bilinear sample at fractional (r, c) with constant-zero padding.
fn bilinear(src: &[u8], width: usize, height: usize, r: f64, c: f64) -> f64 {
    let min_r = r.floor();
    let min_c = c.floor();
    let max_r = r.ceil();
    let max_c = c.ceil();
    let dr = r - min_r;
    let dc = c - min_c;

    let v00 = pixel_or_zero(src, width, height, min_r as isize, min_c as isize);
    let v01 = pixel_or_zero(src, width, height, min_r as isize, max_c as isize);
    let v10 = pixel_or_zero(src, width, height, max_r as isize, min_c as isize);
    let v11 = pixel_or_zero(src, width, height, max_r as isize, max_c as isize);

    // Lerp form: exact on flat regions, so a sample inside a constant patch
    // never drifts an ulp below the center value.
    let top = v00 + dc * (v01 - v00);
    let bottom = v10 + dc * (v11 - v10);
    top + dr * (bottom - top)
}

/// Collapse a circular sign pattern to its uniform code: popcount when the
/// pattern has at most two 0/1 transitions, LBP_NON_UNIFORM otherwise.
fn uniform_code(signed: &[bool; LBP_POINTS]) -> u8 {
    let mut changes = 0u32;
    for k in 0..LBP_POINTS {
        if signed[k] != signed[(k + 1) % LBP_POINTS] {
            changes += 1;
        }
    }
    if changes <= 2 {
        signed.iter().filter(|b| **b).count() as u8
    } else {
        LBP_NON_UNIFORM
    }
}

/// Uniform LBP code at every pixel of a row-major u8 grid.
///
/// Bit k is set when the bilinear sample at circle point k is >= the
/// center value. Every pixel gets a code, border pixels included.
pub fn uniform_lbp(src: &[u8], width: usize, height: usize) -> Vec<u8> {
    assert_eq!(src.len(), width * height, "pixel buffer does not match dimensions");

    let offsets = circle_offsets();
    let mut codes = vec![0u8; src.len()];
    for r in 0..height {
        for c in 0..width {
            let center = src[r * width + c] as f64;
            let mut signed = [false; LBP_POINTS];
            for (k, (dr, dc)) in offsets.iter().enumerate() {
                let sample = bilinear(src, width, height, r as f64 + dr, c as f64 + dc);
                signed[k] = sample - center >= 0.0;
            }
            codes[r * width + c] = uniform_code(&signed);
        }
    }
    codes
}
