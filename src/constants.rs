//! Fixed detection policy.
//!
//! Every value here is in pixels (or pixels²) and tuned for typical photographic
//! resolutions. None of them are user-configurable.

/// Side of the square Gaussian neighborhood used for the local threshold mean.
pub const THRESHOLD_BLOCK_SIZE: u32 = 11;

/// A pixel must be this much darker than its local mean to count as foreground.
pub const THRESHOLD_OFFSET: i32 = 2;

/// Contours with an area at or below this are noise specks.
pub const MIN_PARTICLE_AREA: f64 = 20.0;

/// Contours with an area at or above this are background regions.
pub const MAX_PARTICLE_AREA: f64 = 3000.0;

/// Equivalent diameters strictly above this are coarse.
pub const COARSE_MIN_DIAMETER: f64 = 50.0;

/// Equivalent diameters strictly above this (and not coarse) are medium.
pub const MEDIUM_MIN_DIAMETER: f64 = 20.0;

/// Thickness of the annotation circle outline.
pub const CIRCLE_THICKNESS: i32 = 2;

/// Vertical gap between a label's baseline and the particle's bounding box.
pub const LABEL_OFFSET: i32 = 6;
