use crate::error::Result;
use crate::image_buf::RasterImage;
use crate::pipeline::RenderSettings;
use crate::pipeline::module::ProcessingModule;

/// 3x3 unsharp-style convolution.
///
/// ```text
///    0      -amount      0
/// -amount  1+4*amount  -amount
///    0      -amount      0
/// ```
///
/// Only interior pixels are convolved. The one-pixel border ring keeps its
/// incoming values; there is no edge extension.
pub struct Sharpen;

impl ProcessingModule for Sharpen {
    fn name(&self) -> &str {
        "sharpen"
    }

    fn process_cpu(&self, input: RasterImage, settings: &RenderSettings) -> Result<RasterImage> {
        if settings.sharpness == 100 || input.width < 3 || input.height < 3 {
            return Ok(input);
        }

        let amount = (settings.sharpness - 100) as f32 / 100.0;
        let kernel = kernel(amount);
        let width = input.width as usize;
        let height = input.height as usize;
        let stride = width * 4;

        // Reads come from `input` only; border pixels are carried over as-is.
        let mut output = input.data.clone();
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                let center = y * stride + x * 4;
                for c in 0..3 {
                    let mut sum = 0.0_f32;
                    for (ky, row) in kernel.iter().enumerate() {
                        for (kx, w) in row.iter().enumerate() {
                            let idx = (y + ky - 1) * stride + (x + kx - 1) * 4 + c;
                            sum += input.data[idx] as f32 * w;
                        }
                    }
                    output[center + c] = sum.clamp(0.0, 255.0).round() as u8;
                }
                output[center + 3] = 255;
            }
        }

        RasterImage::from_data(input.width, input.height, output)
    }
}

fn kernel(amount: f32) -> [[f32; 3]; 3] {
    [
        [0.0, -amount, 0.0],
        [-amount, 1.0 + 4.0 * amount, -amount],
        [0.0, -amount, 0.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_sharpness(sharpness: i32) -> RenderSettings {
        RenderSettings {
            sharpness,
            ..Default::default()
        }
    }

    fn noisy(width: u32, height: u32) -> RasterImage {
        let data = (0..width * height)
            .flat_map(|i| {
                let v = (i * 37 % 251) as u8;
                [v, v.wrapping_mul(3), 255 - v, 255]
            })
            .collect();
        RasterImage::from_data(width, height, data).unwrap()
    }

    fn border(img: &RasterImage) -> Vec<[u8; 4]> {
        let mut ring = Vec::new();
        for y in 0..img.height {
            for x in 0..img.width {
                if x == 0 || y == 0 || x == img.width - 1 || y == img.height - 1 {
                    ring.push(img.pixel(x, y));
                }
            }
        }
        ring
    }

    #[test]
    fn neutral_sharpness_is_identity() {
        let buf = noisy(6, 6);
        let expected = buf.clone();
        let result = Sharpen.process_cpu(buf, &with_sharpness(100)).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn kernel_weights() {
        let k = kernel(0.5);
        assert_eq!(k, [[0.0, -0.5, 0.0], [-0.5, 3.0, -0.5], [0.0, -0.5, 0.0]]);
        let sum: f32 = k.iter().flatten().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn border_ring_is_preserved() {
        for sharpness in [50, 75, 110, 150] {
            let buf = noisy(7, 5);
            let expected = border(&buf);
            let result = Sharpen.process_cpu(buf, &with_sharpness(sharpness)).unwrap();
            assert_eq!(border(&result), expected, "sharpness={sharpness}");
        }
    }

    #[test]
    fn white_three_by_three_stays_white() {
        let buf = RasterImage::filled(3, 3, [255, 255, 255, 255]).unwrap();
        let result = Sharpen.process_cpu(buf, &with_sharpness(150)).unwrap();
        assert!(result.data.iter().all(|&v| v == 255));
    }

    #[test]
    fn tiny_images_pass_through() {
        for (w, h) in [(1, 1), (2, 2), (1, 5), (5, 2)] {
            let buf = noisy(w, h);
            let expected = buf.clone();
            for sharpness in [50, 150] {
                let result = Sharpen.process_cpu(buf.clone(), &with_sharpness(sharpness)).unwrap();
                assert_eq!(result, expected, "{w}x{h}");
            }
        }
    }

    #[test]
    fn boosts_center_against_neighbors() {
        let mut buf = RasterImage::filled(3, 3, [100, 100, 100, 255]).unwrap();
        let center = buf.offset(1, 1);
        buf.data[center..center + 3].copy_from_slice(&[120, 120, 120]);

        let result = Sharpen.process_cpu(buf, &with_sharpness(150)).unwrap();
        // 3 * 120 - 0.5 * 4 * 100 = 160
        assert_eq!(result.pixel(1, 1), [160, 160, 160, 255]);
    }

    #[test]
    fn negative_amount_softens() {
        let mut buf = RasterImage::filled(3, 3, [100, 100, 100, 255]).unwrap();
        let center = buf.offset(1, 1);
        buf.data[center..center + 3].copy_from_slice(&[200, 200, 200]);

        let result = Sharpen.process_cpu(buf, &with_sharpness(50)).unwrap();
        // amount -0.5: (1 - 2) * 200 + 0.5 * 4 * 100 = 0
        assert_eq!(result.pixel(1, 1), [0, 0, 0, 255]);
    }

    #[test]
    fn clamps_and_forces_opaque_alpha() {
        let mut buf = RasterImage::filled(3, 3, [0, 0, 0, 200]).unwrap();
        let center = buf.offset(1, 1);
        buf.data[center..center + 4].copy_from_slice(&[250, 10, 250, 200]);

        let result = Sharpen.process_cpu(buf, &with_sharpness(150)).unwrap();
        let [r, g, b, a] = result.pixel(1, 1);
        assert_eq!((r, g, b), (255, 30, 255));
        assert_eq!(a, 255);
        assert_eq!(result.pixel(0, 0)[3], 200);
    }

    #[test]
    fn reads_from_pre_sharpen_buffer() {
        // Two adjacent interior pixels; an in-place pass would feed the
        // first result into the second.
        let mut buf = RasterImage::filled(4, 3, [50, 50, 50, 255]).unwrap();
        for x in [1, 2] {
            let i = buf.offset(x, 1);
            buf.data[i..i + 3].copy_from_slice(&[100, 100, 100]);
        }
        let result = Sharpen.process_cpu(buf, &with_sharpness(120)).unwrap();
        // amount 0.2: 1.8 * 100 - 0.2 * (50 + 50 + 50 + 100) = 130
        assert_eq!(result.pixel(1, 1)[0], 130);
        assert_eq!(result.pixel(2, 1)[0], 130);
    }
}
