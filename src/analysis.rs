//! The particle analysis pipeline.
//!
//! One call turns a color photograph into particle records, a summary and an
//! annotated copy of the image:
//!
//! 1. luminance conversion ([`filter::to_luma`])
//! 2. 5×5 Gaussian blur ([`filter::gaussian_blur_5x5`])
//! 3. inverted Gaussian adaptive threshold ([`filter::adaptive_threshold_gaussian_inv`])
//! 4. external contours ([`contours::find_external_contours`])
//! 5. area window and equivalent diameter ([`contours::filter_by_area_owned`])
//! 6. classification and annotation
//!
//! The analysis holds no state between calls and the same pixels always produce the
//! same result, so images can be analyzed in parallel by the caller.

use image::RgbImage;
use tracing::{debug, trace};

use crate::{
    constants::{THRESHOLD_BLOCK_SIZE, THRESHOLD_OFFSET},
    contours, drawing, filter,
    particle::{Particle, Summary},
    rect::bounding_rect,
};

/// Everything produced by one analysis.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub summary: Summary,
    /// Particles in contour discovery order.
    pub particles: Vec<Particle>,
    /// The input with every particle circled and labelled. Same size as the input.
    pub annotated: RgbImage,
}

/// Analyzes an image and returns its summary and annotated copy.
///
/// # Examples
///
/// ```
/// use image::{Rgb, RgbImage};
/// use web_particles::analyze;
///
/// let blank = RgbImage::from_pixel(64, 48, Rgb([230, 230, 230]));
/// let (summary, annotated) = analyze(&blank);
///
/// assert_eq!(summary.total, 0);
/// assert_eq!(summary.avg, 0.0);
/// assert_eq!(annotated.dimensions(), (64, 48));
/// ```
pub fn analyze(image: &RgbImage) -> (Summary, RgbImage) {
    let Analysis {
        summary, annotated, ..
    } = analyze_with_particles(image);
    (summary, annotated)
}

/// Like [`analyze`], but also returns the individual particles.
pub fn analyze_with_particles(image: &RgbImage) -> Analysis {
    let particles = detect_particles(image);
    let summary = Summary::from_particles(&particles);
    debug!(
        total = summary.total,
        coarse = summary.coarse,
        medium = summary.medium,
        fine = summary.fine,
        avg = summary.avg,
        "particle summary"
    );

    let annotated = drawing::annotate_particles(image, &particles);

    Analysis {
        summary,
        particles,
        annotated,
    }
}

/// Detects, measures and classifies the particles in an image without drawing them.
pub fn detect_particles(image: &RgbImage) -> Vec<Particle> {
    if image.width() == 0 || image.height() == 0 {
        return Vec::new();
    }

    let gray = filter::to_luma(image);
    let blurred = filter::gaussian_blur_5x5(&gray);
    let binary =
        filter::adaptive_threshold_gaussian_inv(&blurred, THRESHOLD_BLOCK_SIZE, THRESHOLD_OFFSET);

    let found = contours::find_external_contours(&binary);
    let candidates = found.len();

    let particles: Vec<Particle> = contours::filter_by_area_owned(found)
        .into_iter()
        .filter_map(|(contour, area)| {
            let bounds = bounding_rect(&contour.points)?;
            let particle = Particle::from_area(area, bounds);
            trace!(
                x = bounds.x,
                y = bounds.y,
                area,
                size = particle.size,
                class = %particle.class,
                "particle"
            );
            Some(particle)
        })
        .collect();

    debug!(
        width = image.width(),
        height = image.height(),
        candidates,
        kept = particles.len(),
        "contours filtered by area"
    );

    particles
}
