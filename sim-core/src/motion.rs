//! Per-tick motion of the particle field.
//!
//! Every tick, each particle goes through:
//! 1. Position integration — `pos += vel * scale`.
//! 2. Shape seeking — if the particle is farther than the dead zone from
//!    its target (see [`target_pos`]), it accelerates toward it.
//! 3. Pointer repulsion — if the pointer is within the repel radius, the
//!    particle is pushed away from it. Forces add up.
//! 4. Damping — the velocity is scaled down.
//! 5. Curve advance — `t += vt`; past `Config::t_max` the particle wraps
//!    back to `Config::t_min`, snaps onto its target there and gives the
//!    field a chance to grow or shrink (see [`ParticleField::reconcile`]).

use glam::Vec2;
use rand::Rng;

use crate::{
    config::Config,
    field::{ParticleField, Reconcile},
    particle::Particle,
    pointer::PointerState,
    shape::{Curve, target_pos},
    viewport::Viewport,
};

/// What happened to the population during one [`step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub wrapped: usize,
    pub spawned: usize,
    pub removed: usize,
}

/// Advances a single particle by one tick, without touching the population.
///
/// ### Parameters
/// - `p` - The particle to move.
/// - `curve` - Curve the particle seeks.
/// - `viewport` - Current viewport; its `scale` sizes every threshold.
/// - `pointer` - Latest pointer sample; an unknown pointer repels nothing.
/// - `cfg` - Force gains, radii and damping.
///
/// ### Returns
/// `true` if the particle wrapped this tick. Its `t` is then `cfg.t_min`
/// and its position is its target there; the velocity is kept.
pub fn advance<C: Curve + ?Sized>(
    p: &mut Particle,
    curve: &C,
    viewport: &Viewport,
    pointer: &PointerState,
    cfg: &Config,
) -> bool {
    let scale = viewport.scale;

    p.pos += p.vel * scale;

    let target = target_pos(curve, p, viewport, cfg.target_offset);

    let mut acc = Vec2::ZERO;

    let deadzone = cfg.seek_deadzone * scale;
    let d = p.pos - target;
    if d.length_squared() > deadzone * deadzone {
        acc = d * cfg.seek_gain;
    }

    if let Some(mouse) = pointer.position() {
        let repel = cfg.repel_radius * scale;
        let dm = p.pos - mouse;
        if dm.length_squared() < repel * repel {
            acc -= dm * cfg.repel_gain;
        }
    }

    p.vel -= acc;
    p.vel *= cfg.damping;

    p.t += p.vt;
    if p.t > cfg.t_max {
        p.t = cfg.t_min;
        p.pos = target_pos(curve, p, viewport, cfg.target_offset);
        return true;
    }

    false
}

/// Advances the whole field by one tick.
///
/// Particles are visited from the back of the field to the front, so a
/// particle removed at a wrap never shifts one that is still to be visited,
/// and a particle appended at a wrap is not moved until the next tick.
///
/// ### Parameters
/// - `field` - The particles to move; may grow or shrink by one per wrap.
/// - `curve` - Curve the particles seek.
/// - `viewport` - Current viewport.
/// - `pointer` - Latest pointer sample.
/// - `cfg` - Simulation constants.
/// - `rng` - Randomness for particles spawned at wraps.
///
/// ### Returns
/// A [`StepReport`] counting wraps and population changes.
pub fn step<C: Curve + ?Sized>(
    field: &mut ParticleField,
    curve: &C,
    viewport: &Viewport,
    pointer: &PointerState,
    cfg: &Config,
    rng: &mut impl Rng,
) -> StepReport {
    let mut report = StepReport::default();

    for id in (0..field.particles.len()).rev() {
        if !advance(&mut field.particles[id], curve, viewport, pointer, cfg) {
            continue;
        }

        report.wrapped += 1;
        match field.reconcile(id, curve, viewport, cfg, rng) {
            Reconcile::Removed => report.removed += 1,
            Reconcile::Spawned => report.spawned += 1,
            Reconcile::Unchanged => {}
        }
    }

    if report.spawned > 0 || report.removed > 0 {
        log::debug!(
            "population {} (target {:.2}): +{} -{}",
            field.len(),
            field.particle_count,
            report.spawned,
            report.removed
        );
    }

    report
}
