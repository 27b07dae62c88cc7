use rand::Rng;

use crate::{
    config::Config, particle::Particle, shape::Curve, types::ParticleId, viewport::Viewport,
};

/// Outcome of reconciling the population at a wrap event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconcile {
    /// The wrapped particle was removed from the field.
    Removed,
    /// A fresh particle was appended at the start of the curve.
    Spawned,
    Unchanged,
}

/// The live particles and the population they are converging toward.
///
/// `particle_count` follows the viewport immediately on resize, but the
/// population only moves toward it one particle at a time, whenever a
/// particle wraps (see [`ParticleField::reconcile`]).
#[derive(Debug, Clone)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    /// Target population. Fractional, like the viewport scale it comes from.
    pub particle_count: f32,
}

impl ParticleField {
    /// Fills a field for `viewport`, spreading particles over `t` in `[-1, 0)`.
    ///
    /// Particle `i` starts at `t = i / particle_count - 1`, so the whole wave
    /// begins off the left edge and streams in. A fractional
    /// `particle_count` rounds the population up.
    pub fn populate<C: Curve + ?Sized>(
        curve: &C,
        viewport: &Viewport,
        cfg: &Config,
        rng: &mut impl Rng,
    ) -> Self {
        let particle_count = viewport.particle_count(cfg);
        let n = particle_count.ceil().max(0.0) as usize;

        let particles = (0..n)
            .map(|i| {
                let t0 = i as f32 / particle_count - 1.0;
                Particle::spawn(t0, curve, viewport, cfg, rng)
            })
            .collect();

        log::debug!("populated field with {n} particles (target {particle_count:.2})");

        Self {
            particles,
            particle_count,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Updates the target population for a new viewport.
    ///
    /// Live particles are untouched; they adopt the new target as they wrap.
    pub fn retarget(&mut self, viewport: &Viewport, cfg: &Config) {
        self.particle_count = viewport.particle_count(cfg);
    }

    /// Moves the population one step toward `particle_count`.
    ///
    /// Called for the particle `id` that has just wrapped. If the field is
    /// over target, that particle is removed (keeping the order of the rest);
    /// if under target, one new particle is appended at `cfg.t_min`.
    ///
    /// ### Panics
    /// Panics if `id` is out of bounds and the field is over target.
    pub fn reconcile<C: Curve + ?Sized>(
        &mut self,
        id: ParticleId,
        curve: &C,
        viewport: &Viewport,
        cfg: &Config,
        rng: &mut impl Rng,
    ) -> Reconcile {
        let len = self.particles.len() as f32;

        if len > self.particle_count {
            self.particles.remove(id);
            Reconcile::Removed
        } else if len < self.particle_count {
            self.particles
                .push(Particle::spawn(cfg.t_min, curve, viewport, cfg, rng));
            Reconcile::Spawned
        } else {
            Reconcile::Unchanged
        }
    }
}
