//! Particle detection and size classification for photographed spider webs.
//!
//! Dark specks caught in a web are separated from the backdrop with a local
//! threshold, outlined with [imageproc] contours, sized by their equivalent
//! diameter and sorted into coarse, medium and fine classes. All measurements are
//! in pixels.
//!
//! The building blocks are organized into modules the same categories (as possible)
//! as in [imageproc]; [`analyze`] chains them together.

pub mod analysis;
mod colors;
pub mod constants;
pub mod contours;
pub mod drawing;
pub mod error;
pub mod filter;
mod glyphs;
pub mod loader;
pub mod particle;
pub mod rect;

pub use analysis::{Analysis, analyze, analyze_with_particles, detect_particles};
pub use error::{Error, Result};
pub use loader::{load_rgb, save_rgb};
pub use particle::{Particle, ParticleClass, Summary};
