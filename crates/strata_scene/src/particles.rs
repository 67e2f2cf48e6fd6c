use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::RngExt;
use strata_core::errors::{Result, StrataError};

/// The per-particle state an emitter initializes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Emits particles from random points inside a sphere, moving outward from
/// its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereEmitter {
    radius: f32,
}

impl SphereEmitter {
    pub fn new(radius: f32) -> Result<Self> {
        validate_radius(radius)?;
        Ok(Self { radius })
    }

    #[inline]
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) -> Result<()> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    /// Places `particle` at a random point in the sphere and points its
    /// velocity along the outward unit direction.
    ///
    /// Samples are uniform in the spherical coordinates, not in volume, so
    /// points cluster towards the center and the poles.
    pub fn emit<R: RngExt + ?Sized>(&self, particle: &mut Particle, rng: &mut R) {
        let theta = rng.random_range(0.0..TAU);
        let phi = rng.random_range(0.0..PI);
        let rad = rng.random_range(0.0..self.radius);

        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();

        particle.position = Vec3::new(rad * cos_theta * sin_phi, rad * sin_theta * sin_phi, rad * cos_phi);
        particle.velocity = particle.position.normalize_or_zero();
    }
}

impl Default for SphereEmitter {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

fn validate_radius(radius: f32) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(StrataError::InvalidArgument(format!("radius must be greater than zero, got {radius}.")))
    }
}
