//! Particle records and their aggregate summary.

use image::math::Rect;
use serde::Serialize;

use crate::{
    constants::{COARSE_MIN_DIAMETER, MEDIUM_MIN_DIAMETER},
    contours::equivalent_diameter,
};

/// Size class of a particle, decided by its equivalent diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParticleClass {
    Coarse,
    Medium,
    Fine,
}

impl ParticleClass {
    /// Classifies a diameter in pixels.
    ///
    /// Both cut-offs are strict: exactly 50.0 is medium and exactly 20.0 is fine.
    pub fn from_diameter(diameter: f64) -> Self {
        if diameter > COARSE_MIN_DIAMETER {
            Self::Coarse
        } else if diameter > MEDIUM_MIN_DIAMETER {
            Self::Medium
        } else {
            Self::Fine
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Coarse => "COARSE",
            Self::Medium => "MEDIUM",
            Self::Fine => "FINE",
        }
    }

    /// Single-letter label drawn next to the particle.
    pub fn initial(self) -> char {
        match self {
            Self::Coarse => 'C',
            Self::Medium => 'M',
            Self::Fine => 'F',
        }
    }
}

impl std::fmt::Display for ParticleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A particle detected in one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    /// Equivalent diameter in pixels, rounded to one decimal.
    pub size: f64,
    #[serde(rename = "type")]
    pub class: ParticleClass,
    /// Enclosed contour area in pixels².
    pub area: f64,
    #[serde(skip)]
    pub bounds: Rect,
}

impl Particle {
    /// Builds a particle from a contour's area and bounding box.
    pub fn from_area(area: f64, bounds: Rect) -> Self {
        let diameter = equivalent_diameter(area);
        Self {
            size: round_to_tenth(diameter),
            class: ParticleClass::from_diameter(diameter),
            area,
            bounds,
        }
    }

    /// Equivalent diameter before rounding.
    pub fn diameter(&self) -> f64 {
        equivalent_diameter(self.area)
    }
}

/// Per-class particle counts and mean size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub coarse: usize,
    pub medium: usize,
    pub fine: usize,
    /// Mean particle size rounded to one decimal, `0.0` when nothing was found.
    pub avg: f64,
}

impl Summary {
    pub fn from_particles(particles: &[Particle]) -> Self {
        let count = |class: ParticleClass| particles.iter().filter(|p| p.class == class).count();

        let avg = if particles.is_empty() {
            0.0
        } else {
            let sum: f64 = particles.iter().map(|p| p.size).sum();
            round_to_tenth(sum / particles.len() as f64)
        };

        Self {
            total: particles.len(),
            coarse: count(ParticleClass::Coarse),
            medium: count(ParticleClass::Medium),
            fine: count(ParticleClass::Fine),
            avg,
        }
    }
}

/// Rounds to one decimal, ties to even.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(size: f64) -> Particle {
        Particle {
            size,
            class: ParticleClass::from_diameter(size),
            area: std::f64::consts::PI * size * size / 4.0,
            bounds: Rect {
                x: 0,
                y: 0,
                width: 1,
                height: 1,
            },
        }
    }

    #[test]
    fn classification_boundaries_are_strict() {
        assert_eq!(ParticleClass::from_diameter(50.0), ParticleClass::Medium);
        assert_eq!(ParticleClass::from_diameter(50.01), ParticleClass::Coarse);
        assert_eq!(ParticleClass::from_diameter(20.0), ParticleClass::Fine);
        assert_eq!(ParticleClass::from_diameter(20.01), ParticleClass::Medium);
        assert_eq!(ParticleClass::from_diameter(5.0), ParticleClass::Fine);
    }

    #[test]
    fn from_area_rounds_size_but_classifies_exact_diameter() {
        let bounds = Rect {
            x: 3,
            y: 4,
            width: 10,
            height: 10,
        };
        // Diameter 50.04: rounds to 50.0 but is still coarse.
        let area = std::f64::consts::PI * 50.04 * 50.04 / 4.0;
        let p = Particle::from_area(area, bounds);
        assert_eq!(p.size, 50.0);
        assert_eq!(p.class, ParticleClass::Coarse);
        assert!((p.diameter() - 50.04).abs() < 1e-9);
        assert_eq!(p.bounds, bounds);
    }

    #[test]
    fn initials_and_names() {
        assert_eq!(ParticleClass::Coarse.initial(), 'C');
        assert_eq!(ParticleClass::Medium.initial(), 'M');
        assert_eq!(ParticleClass::Fine.initial(), 'F');
        assert_eq!(ParticleClass::Medium.to_string(), "MEDIUM");
    }

    #[test]
    fn empty_summary_is_all_zero() {
        assert_eq!(Summary::from_particles(&[]), Summary::default());
    }

    #[test]
    fn summary_counts_and_average() {
        let particles = [particle(12.3), particle(30.0), particle(55.5), particle(14.1)];
        let summary = Summary::from_particles(&particles);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.fine, 2);
        assert_eq!(summary.medium, 1);
        assert_eq!(summary.coarse, 1);
        assert_eq!(summary.coarse + summary.medium + summary.fine, summary.total);
        // (12.3 + 30.0 + 55.5 + 14.1) / 4 = 27.975
        assert!((summary.avg - 28.0).abs() < 1e-9);
    }

    #[test]
    fn round_to_tenth_rounds_ties_to_even() {
        assert_eq!(round_to_tenth(14.25), 14.2);
        assert_eq!(round_to_tenth(0.75), 0.8);
        assert_eq!(round_to_tenth(3.04), 3.0);
        assert_eq!(round_to_tenth(0.0), 0.0);
    }

    #[test]
    fn average_on_a_tie_rounds_to_even() {
        let summary = Summary::from_particles(&[particle(14.2), particle(14.3)]);
        assert_eq!(summary.avg, 14.2);
    }

    #[test]
    fn serializes_with_upper_case_class_names() {
        let json = serde_json::to_value(particle(30.0)).unwrap();
        assert_eq!(json["type"], "MEDIUM");
        assert_eq!(json["size"], 30.0);
        assert!(json.get("bounds").is_none());
    }
}
