use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_circle_mut, draw_line_segment_mut};

use crate::{
    colors::class_color,
    constants::{CIRCLE_THICKNESS, LABEL_OFFSET},
    glyphs,
    particle::Particle,
    rect::center,
};

/// Draws a circle outline `thickness` pixels wide, centered on `radius`.
///
/// Parts falling outside the canvas are skipped.
pub fn draw_thick_hollow_circle_mut(
    canvas: &mut RgbImage,
    center: (i32, i32),
    radius: i32,
    thickness: i32,
    color: Rgb<u8>,
) {
    let inner = radius - thickness / 2;
    for r in (inner..inner + thickness).filter(|r| *r >= 0) {
        draw_hollow_circle_mut(canvas, center, r, color);
    }
}

/// Draws a single character with its baseline-left corner at `origin`.
///
/// Only the class initials have outlines; other characters draw nothing.
pub fn draw_label_mut(canvas: &mut RgbImage, c: char, origin: (i32, i32), color: Rgb<u8>) {
    let Some(strokes) = glyphs::strokes(c) else {
        return;
    };

    let to_canvas = |(gx, gy): (i32, i32)| ((origin.0 + gx) as f32, (origin.1 - gy) as f32);

    for stroke in strokes {
        for segment in stroke.windows(2) {
            draw_line_segment_mut(canvas, to_canvas(segment[0]), to_canvas(segment[1]), color);
        }
    }
}

/// Marks one particle: a circle of its equivalent diameter around the center of its
/// bounding box, and its class initial just above the box's top-left corner.
pub fn draw_particle_mut(canvas: &mut RgbImage, particle: &Particle) {
    let color = class_color(particle.class);
    let radius = (particle.diameter() / 2.0) as i32;

    draw_thick_hollow_circle_mut(
        canvas,
        center(&particle.bounds),
        radius,
        CIRCLE_THICKNESS,
        color,
    );

    let origin = (
        particle.bounds.x as i32,
        particle.bounds.y as i32 - LABEL_OFFSET,
    );
    draw_label_mut(canvas, particle.class.initial(), origin, color);
}

/// Returns a copy of `image` with every particle marked.
pub fn annotate_particles(image: &RgbImage, particles: &[Particle]) -> RgbImage {
    let mut canvas = image.clone();
    for particle in particles {
        draw_particle_mut(&mut canvas, particle);
    }
    canvas
}
