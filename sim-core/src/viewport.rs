use glam::Vec2;

use crate::{config::Config, error::SurfaceError};

/// Pixel dimensions of the drawing surface and the quantities derived from them.
///
/// Every distance, velocity and force constant in [`Config`] is multiplied by
/// [`Viewport::scale`], so the wave looks the same on small and large screens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl Viewport {
    /// Creates a viewport for a `width` x `height` surface.
    ///
    /// ### Returns
    /// - `Ok` with `scale = max(cfg.min_scale_width, width) / cfg.reference_width`.
    /// - `Err(SurfaceError::InvalidSize)` if either dimension is not a finite,
    ///   strictly positive number.
    pub fn new(width: f32, height: f32, cfg: &Config) -> Result<Self, SurfaceError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            scale: width.max(cfg.min_scale_width) / cfg.reference_width,
        })
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Target population for this viewport. Kept fractional.
    pub fn particle_count(&self, cfg: &Config) -> f32 {
        cfg.particle_density * self.scale
    }

    /// Maximum distance at which two particles are linked.
    pub fn min_dist(&self, cfg: &Config) -> f32 {
        cfg.link_distance * self.scale
    }
}
