//! Pre-processing filters: luminance conversion, noise blur and local binarization.

use image::{GrayImage, Luma, RgbImage};

/// Binomial weights used for a 5-tap Gaussian when no sigma is given.
const BINOMIAL_5: [u32; 5] = [1, 4, 6, 4, 1];

/// Converts an RGB image to 8-bit luminance.
///
/// Uses the Rec. 601 weights `0.299 R + 0.587 G + 0.114 B` in 14-bit fixed point,
/// rounded to the nearest integer.
pub fn to_luma(image: &RgbImage) -> GrayImage {
    const R: u32 = 4899;
    const G: u32 = 9617;
    const B: u32 = 1868;
    const SHIFT: u32 = 14;

    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        let luma = (r as u32 * R + g as u32 * G + b as u32 * B + (1 << (SHIFT - 1))) >> SHIFT;
        Luma([luma as u8])
    })
}

/// Blurs a grayscale image with a 5×5 Gaussian kernel whose sigma is derived
/// from the kernel size.
///
/// For a 5-tap kernel that derivation yields the binomial row `[1, 4, 6, 4, 1] / 16`,
/// which is applied separably in exact integer arithmetic. Pixels outside the image
/// are mirrored without repeating the edge (`dcb|abcd|cba`).
pub fn gaussian_blur_5x5(image: &GrayImage) -> GrayImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return image.clone();
    }
    let (w, h) = (width as usize, height as usize);
    let src = image.as_raw();

    let mut horizontal = vec![0u32; w * h];
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        for x in 0..w {
            horizontal[y * w + x] = BINOMIAL_5
                .iter()
                .enumerate()
                .map(|(k, weight)| {
                    let sx = reflect_101(x as isize + k as isize - 2, w);
                    weight * row[sx] as u32
                })
                .sum();
        }
    }

    let mut out = GrayImage::new(width, height);
    for y in 0..h {
        for x in 0..w {
            let sum: u32 = BINOMIAL_5
                .iter()
                .enumerate()
                .map(|(k, weight)| {
                    let sy = reflect_101(y as isize + k as isize - 2, h);
                    weight * horizontal[sy * w + x]
                })
                .sum();
            // Weights sum to 16 * 16.
            out.put_pixel(x as u32, y as u32, Luma([((sum + 128) >> 8) as u8]));
        }
    }
    out
}

/// Binarizes an image against a Gaussian-weighted local mean, inverted.
///
/// For every pixel the mean of its `block_size × block_size` neighborhood is taken
/// with Gaussian weights (sigma derived from `block_size`, edge pixels replicated
/// outwards) and rounded to u8. The output pixel is `255` when
/// `pixel <= mean - offset` and `0` otherwise, so regions darker than their
/// surroundings become foreground.
///
/// # Panics
///
/// Panics if `block_size` is not an odd number greater than 1.
pub fn adaptive_threshold_gaussian_inv(image: &GrayImage, block_size: u32, offset: i32) -> GrayImage {
    assert!(
        block_size > 1 && block_size % 2 == 1,
        "block_size must be an odd number greater than 1"
    );

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return image.clone();
    }
    let mean = gaussian_mean(image, &gaussian_kernel(block_size as usize));

    GrayImage::from_fn(width, height, |x, y| {
        let pixel = image.get_pixel(x, y)[0] as i32;
        let local = mean.get_pixel(x, y)[0] as i32;
        if pixel <= local - offset {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Normalized 1-D Gaussian kernel of the given odd size, with
/// `sigma = 0.3 * ((size - 1) / 2 - 1) + 0.8`.
pub(crate) fn gaussian_kernel(size: usize) -> Vec<f32> {
    let sigma = 0.3 * ((size as f64 - 1.0) * 0.5 - 1.0) + 0.8;
    let center = (size as f64 - 1.0) / 2.0;
    let scale = -0.5 / (sigma * sigma);

    let weights: Vec<f64> = (0..size)
        .map(|i| {
            let d = i as f64 - center;
            (scale * d * d).exp()
        })
        .collect();
    let total: f64 = weights.iter().sum();

    weights.into_iter().map(|w| (w / total) as f32).collect()
}

fn gaussian_mean(image: &GrayImage, kernel: &[f32]) -> GrayImage {
    let (width, height) = image.dimensions();
    let (w, h) = (width as usize, height as usize);
    let radius = (kernel.len() / 2) as isize;
    let src = image.as_raw();

    let mut horizontal = vec![0f32; w * h];
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        for x in 0..w {
            horizontal[y * w + x] = kernel
                .iter()
                .enumerate()
                .map(|(k, weight)| {
                    let sx = replicate(x as isize + k as isize - radius, w);
                    weight * row[sx] as f32
                })
                .sum();
        }
    }

    let mut out = GrayImage::new(width, height);
    for y in 0..h {
        for x in 0..w {
            let sum: f32 = kernel
                .iter()
                .enumerate()
                .map(|(k, weight)| {
                    let sy = replicate(y as isize + k as isize - radius, h);
                    weight * horizontal[sy * w + x]
                })
                .sum();
            out.put_pixel(x as u32, y as u32, Luma([sum.round().clamp(0.0, 255.0) as u8]));
        }
    }
    out
}

fn reflect_101(mut i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    while i < 0 || i > last {
        if i < 0 {
            i = -i;
        }
        if i > last {
            i = 2 * last - i;
        }
    }
    i as usize
}

fn replicate(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}
