use image::Rgb;
use palette::Srgb;

use crate::particle::ParticleClass;

const COARSE_BGR: [u8; 3] = [60, 60, 255];
const MEDIUM_BGR: [u8; 3] = [50, 220, 255];
const FINE_BGR: [u8; 3] = [255, 130, 70];

/// Annotation color of a particle class.
pub fn class_color(class: ParticleClass) -> Rgb<u8> {
    let bgr = match class {
        ParticleClass::Coarse => COARSE_BGR,
        ParticleClass::Medium => MEDIUM_BGR,
        ParticleClass::Fine => FINE_BGR,
    };
    let (red, green, blue) = from_bgr(bgr).into_components();
    Rgb([red, green, blue])
}

/// Reads a blue-green-red triple into an sRGB color.
fn from_bgr([blue, green, red]: [u8; 3]) -> Srgb<u8> {
    Srgb::new(red, green, blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_colors_are_converted_from_bgr() {
        assert_eq!(class_color(ParticleClass::Coarse), Rgb([255, 60, 60]));
        assert_eq!(class_color(ParticleClass::Medium), Rgb([255, 220, 50]));
        assert_eq!(class_color(ParticleClass::Fine), Rgb([70, 130, 255]));
    }
}
