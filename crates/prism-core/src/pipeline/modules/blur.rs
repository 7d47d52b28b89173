/// Normalized 1D Gaussian weights for standard deviation `sigma`,
/// spanning ceil(3 * sigma) taps on each side.
fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let half = (3.0 * sigma).ceil() as i32;
    let denom = 2.0 * sigma * sigma;
    let mut weights: Vec<f32> = (-half..=half)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();
    let sum: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// Separable Gaussian blur over an RGB float plane, in place.
///
/// Samples past the edge repeat the nearest edge pixel.
pub(super) fn gaussian_blur(plane: &mut [[f32; 3]], width: usize, height: usize, sigma: f32) {
    if sigma <= 0.0 || width == 0 || height == 0 {
        return;
    }
    let kernel = gaussian_kernel(sigma);
    let half = kernel.len() / 2;
    let mut tmp = vec![[0.0_f32; 3]; plane.len()];

    for y in 0..height {
        let row = &plane[y * width..(y + 1) * width];
        for x in 0..width {
            let mut acc = [0.0_f32; 3];
            for (k, w) in kernel.iter().enumerate() {
                let sx = (x + k).saturating_sub(half).min(width - 1);
                for c in 0..3 {
                    acc[c] += row[sx][c] * w;
                }
            }
            tmp[y * width + x] = acc;
        }
    }

    for y in 0..height {
        for x in 0..width {
            let mut acc = [0.0_f32; 3];
            for (k, w) in kernel.iter().enumerate() {
                let sy = (y + k).saturating_sub(half).min(height - 1);
                for c in 0..3 {
                    acc[c] += tmp[sy * width + x][c] * w;
                }
            }
            plane[y * width + x] = acc;
        }
    }
}
