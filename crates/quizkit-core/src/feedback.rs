//! Celebration particles shown after a correct answer.
//!
//! Only the particle parameters are produced here; rendering them is up to
//! the presentation layer.

use std::ops::Range;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const PARTICLE_COUNT: usize = 10;
/// How long a particle stays attached before it is removed.
pub const PARTICLE_LIFETIME: Duration = Duration::from_millis(5000);
/// CSS class the stylesheet animates.
pub const PARTICLE_CLASS: &str = "particle";

const SIZE_PX: Range<f64> = 5.0..15.0;
const LEFT_PERCENT: Range<f64> = 0.0..100.0;
const ANIMATION_SECS: Range<f64> = 2.0..5.0;

/// One square particle rising from the bottom of the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub size_px: f64,
    pub left_percent: f64,
    pub animation_secs: f64,
}

impl Particle {
    /// Inline style declarations for this particle.
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}%; bottom: 0; animation-duration: {secs}s",
            size = self.size_px,
            left = self.left_percent,
            secs = self.animation_secs,
        )
    }
}

/// Generate a burst of [`PARTICLE_COUNT`] particles.
pub fn particle_burst<R: Rng + ?Sized>(rng: &mut R) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| Particle {
            size_px: rng.gen_range(SIZE_PX),
            left_percent: rng.gen_range(LEFT_PERCENT),
            animation_secs: rng.gen_range(ANIMATION_SECS),
        })
        .collect()
}
