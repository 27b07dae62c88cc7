//! The curve particles are drawn toward, and each particle's target on it.

use glam::Vec2;

use crate::{config::Config, particle::Particle, viewport::Viewport};

/// A parametric path across the viewport.
///
/// `t = 0` maps to the left edge and `t = 1` to the right edge. Implementations
/// must be total: particles evaluate the curve slightly outside `[0, 1]`
/// (down to `Config::t_min`, up to `Config::t_max`) to enter and leave the
/// screen smoothly.
pub trait Curve {
    fn point(&self, t: f32, viewport: &Viewport) -> Vec2;
}

/// Horizontal sine wave: `y = H*center + sin(x/W * frequency) * H*amplitude`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SineWave {
    pub center: f32,
    pub amplitude: f32,
    pub frequency: f32,
}

impl SineWave {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            center: cfg.curve_center,
            amplitude: cfg.curve_amplitude,
            frequency: cfg.curve_frequency,
        }
    }
}

impl Default for SineWave {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Curve for SineWave {
    fn point(&self, t: f32, viewport: &Viewport) -> Vec2 {
        let x = t * viewport.width;
        let y = viewport.height * self.center
            + (x / viewport.width * self.frequency).sin() * viewport.height * self.amplitude;
        Vec2::new(x, y)
    }
}

/// Computes where a particle is currently heading.
///
/// The curve point at `p.t` is pushed along the particle's velocity by up to
/// `offset * p.r`: each axis gets `v_axis² / |v|² * p.r * offset`, so
/// particles with different `r` form a band around the curve rather than a
/// single line.
///
/// A particle at rest (`|v|² == 0`) has no direction to offset along; its
/// target is the bare curve point.
pub fn target_pos<C: Curve + ?Sized>(
    curve: &C,
    p: &Particle,
    viewport: &Viewport,
    offset: f32,
) -> Vec2 {
    let base = curve.point(p.t, viewport);

    let speed2 = p.vel.length_squared();
    if speed2 == 0.0 {
        return base;
    }

    base + p.vel * p.vel / speed2 * (p.r * offset)
}
