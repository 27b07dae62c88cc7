use glam::Vec2;
use rand::Rng;

use crate::{config::Config, shape::Curve, viewport::Viewport};

/// A single moving dot in the wave.
///
/// The particle chases a target on the curve at parameter `t`, which
/// advances by `vt` every tick. `r` picks how far from the curve the
/// particle's target sits (see [`crate::shape::target_pos`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Parameter along the curve, nominally in `[t_min, t_max]`.
    pub t: f32,
    /// Rate at which `t` advances. Always positive.
    pub vt: f32,
    /// Offset coefficient in `[0, 1)`.
    pub r: f32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    /// Creates a particle near the curve point at `t0`.
    ///
    /// The position is jittered by up to `cfg.spawn_jitter * scale` and the
    /// velocity drawn within `cfg.spawn_speed * scale` on each axis. The
    /// radius does not depend on the scale.
    pub fn spawn<C: Curve + ?Sized>(
        t0: f32,
        curve: &C,
        viewport: &Viewport,
        cfg: &Config,
        rng: &mut impl Rng,
    ) -> Self {
        let scale = viewport.scale;

        let vt = (rng.random::<f32>() + cfg.curve_speed_bias) * cfg.curve_speed_gain * scale;
        let r = rng.random::<f32>();

        let jitter = cfg.spawn_jitter * scale;
        let pos = curve.point(t0, viewport)
            + Vec2::new(
                rng.random_range(-jitter..=jitter),
                rng.random_range(-jitter..=jitter),
            );

        let speed = cfg.spawn_speed * scale;
        let vel = Vec2::new(
            rng.random_range(-speed..=speed),
            rng.random_range(-speed..=speed),
        );

        Self {
            t: t0,
            vt,
            r,
            pos,
            vel,
            radius: cfg.particle_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::SineWave;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn spawn_respects_parameter_ranges() {
        let cfg = Config::default();
        let vp = Viewport::new(1800.0, 900.0, &cfg).unwrap();
        let wave = SineWave::from_config(&cfg);
        let mut rng = StdRng::seed_from_u64(7);

        for i in 0..500 {
            let t0 = i as f32 / 500.0 - 1.0;
            let p = Particle::spawn(t0, &wave, &vp, &cfg, &mut rng);
            let anchor = wave.point(t0, &vp);

            assert_eq!(p.t, t0);
            assert!(p.vt > 0.0);
            assert!(p.vt >= 0.2e-3 * vp.scale && p.vt < 1.2e-3 * vp.scale + 1e-9);
            assert!((0.0..1.0).contains(&p.r));
            assert!((p.pos.x - anchor.x).abs() <= 50.0 * vp.scale + 1e-3);
            assert!((p.pos.y - anchor.y).abs() <= 50.0 * vp.scale + 1e-3);
            assert!(p.vel.x.abs() <= 0.1 * vp.scale + 1e-6);
            assert!(p.vel.y.abs() <= 0.1 * vp.scale + 1e-6);
            assert_eq!(p.radius, 4.0);
        }
    }

    #[test]
    fn spawn_is_reproducible_with_same_seed() {
        let cfg = Config::default();
        let vp = Viewport::new(1200.0, 800.0, &cfg).unwrap();
        let wave = SineWave::from_config(&cfg);

        let a = Particle::spawn(-0.1, &wave, &vp, &cfg, &mut StdRng::seed_from_u64(3));
        let b = Particle::spawn(-0.1, &wave, &vp, &cfg, &mut StdRng::seed_from_u64(3));

        assert_eq!(a, b);
    }
}
