//! The simulation context: one owner for all mutable state.
//!
//! The platform layer never touches the field directly. It forwards pointer
//! samples and resizes as [`SimEvent`]s and calls [`Simulation::frame`] once
//! per display frame.

use glam::Vec2;
use rand::rngs::StdRng;

use crate::{
    config::Config,
    error::SurfaceError,
    field::ParticleField,
    motion::{self, StepReport},
    pointer::PointerState,
    render::{self, Surface},
    shape::{Curve, SineWave},
    viewport::Viewport,
};

/// A notification from the platform layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimEvent {
    /// New pointer sample in canvas-local coordinates.
    PointerMoved(Vec2),
    /// The drawing surface changed size.
    Resized { width: f32, height: f32 },
}

/// Owns the viewport, the field, the pointer state and the RNG, and runs
/// the paint-then-advance cycle.
pub struct Simulation<C: Curve = SineWave> {
    cfg: Config,
    curve: C,
    viewport: Viewport,
    field: ParticleField,
    pointer: PointerState,
    rng: StdRng,
    frames: u64,
}

impl Simulation<SineWave> {
    /// Starts a sine-wave simulation on a `width` x `height` surface.
    ///
    /// ### Returns
    /// `Err(SurfaceError::InvalidSize)` if the surface cannot host the
    /// simulation; nothing is allocated in that case.
    pub fn new(width: f32, height: f32, cfg: Config, rng: StdRng) -> Result<Self, SurfaceError> {
        Self::with_curve(SineWave::from_config(&cfg), width, height, cfg, rng)
    }
}

impl<C: Curve> Simulation<C> {
    pub fn with_curve(
        curve: C,
        width: f32,
        height: f32,
        cfg: Config,
        mut rng: StdRng,
    ) -> Result<Self, SurfaceError> {
        let viewport = Viewport::new(width, height, &cfg)?;
        let field = ParticleField::populate(&curve, &viewport, &cfg, &mut rng);

        log::info!(
            "simulation started at {}x{} (scale {:.3}, {} particles)",
            width,
            height,
            viewport.scale,
            field.len()
        );

        Ok(Self {
            cfg,
            curve,
            viewport,
            field,
            pointer: PointerState::default(),
            rng,
            frames: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Number of frames painted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Applies one platform event. Later events overwrite earlier ones.
    pub fn apply(&mut self, event: SimEvent) -> Result<(), SurfaceError> {
        match event {
            SimEvent::PointerMoved(pos) => {
                self.pointer.update(pos);
                Ok(())
            }
            SimEvent::Resized { width, height } => self.resize(width, height),
        }
    }

    /// Applies a batch of events in order.
    ///
    /// A rejected resize does not stop the batch; the first error is returned
    /// once every event has been applied.
    pub fn apply_all(
        &mut self,
        events: impl IntoIterator<Item = SimEvent>,
    ) -> Result<(), SurfaceError> {
        let mut first_err = None;
        for event in events {
            if let Err(e) = self.apply(event) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Recomputes the viewport and the target population.
    ///
    /// Particles already on screen keep moving as before; the population
    /// follows the new target only as particles wrap. An invalid size is
    /// rejected and the previous viewport is kept.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), SurfaceError> {
        if width == self.viewport.width && height == self.viewport.height {
            return Ok(());
        }

        self.viewport = Viewport::new(width, height, &self.cfg)?;
        self.field.retarget(&self.viewport, &self.cfg);

        log::info!(
            "resized to {}x{} (scale {:.3}, target {:.2} particles)",
            width,
            height,
            self.viewport.scale,
            self.field.particle_count
        );
        Ok(())
    }

    /// Paints the current state, then advances it by one tick.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> StepReport {
        render::render_frame(surface, &self.field, &self.viewport, &self.cfg);
        self.frames += 1;
        self.step()
    }

    /// Advances the field by one tick without painting.
    pub fn step(&mut self) -> StepReport {
        motion::step(
            &mut self.field,
            &self.curve,
            &self.viewport,
            &self.pointer,
            &self.cfg,
            &mut self.rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{LinearGradient, Rgba};
    use rand::SeedableRng;

    #[derive(Default)]
    struct Counter {
        gradients: usize,
        circles: usize,
        lines: usize,
    }

    impl Surface for Counter {
        fn fill_gradient(&mut self, _size: Vec2, _gradient: &LinearGradient) {
            self.gradients += 1;
        }

        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {
            self.circles += 1;
        }

        fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Rgba) {
            self.lines += 1;
        }
    }

    fn sim(width: f32, height: f32) -> Simulation {
        Simulation::new(width, height, Config::default(), StdRng::seed_from_u64(9)).unwrap()
    }

    #[test]
    fn new_rejects_unavailable_surface() {
        let err = Simulation::new(0.0, 0.0, Config::default(), StdRng::seed_from_u64(1));
        assert!(matches!(err, Err(SurfaceError::InvalidSize { .. })));
    }

    #[test]
    fn frame_paints_current_state_then_advances() {
        let mut sim = sim(1200.0, 800.0);
        let before = sim.field().particles.clone();
        let mut surface = Counter::default();

        sim.frame(&mut surface);

        assert_eq!(surface.gradients, 1);
        assert_eq!(surface.circles, before.len());
        assert_eq!(sim.frames(), 1);
        assert_ne!(sim.field().particles, before);
    }

    #[test]
    fn resize_retargets_without_touching_particles() {
        let mut sim = sim(1200.0, 800.0);
        let before = sim.field().particles.clone();

        sim.apply(SimEvent::Resized {
            width: 1800.0,
            height: 900.0,
        })
        .unwrap();

        assert_eq!(sim.viewport().scale, 1.5);
        assert_eq!(sim.field().particle_count, 225.0);
        assert_eq!(sim.viewport().min_dist(sim.config()), 105.0);
        assert_eq!(sim.field().particles, before);
    }

    #[test]
    fn invalid_resize_keeps_previous_viewport() {
        let mut sim = sim(1200.0, 800.0);

        let err = sim.resize(1200.0, 0.0);

        assert!(err.is_err());
        assert_eq!(*sim.viewport(), Viewport::new(1200.0, 800.0, sim.config()).unwrap());
        assert_eq!(sim.field().particle_count, 150.0);
    }

    #[test]
    fn events_are_last_writer_wins() {
        let mut sim = sim(1200.0, 800.0);

        let result = sim.apply_all([
            SimEvent::PointerMoved(Vec2::new(1.0, 1.0)),
            SimEvent::Resized {
                width: -1.0,
                height: 10.0,
            },
            SimEvent::PointerMoved(Vec2::new(5.0, 6.0)),
            SimEvent::Resized {
                width: 2400.0,
                height: 1000.0,
            },
        ]);

        assert!(matches!(result, Err(SurfaceError::InvalidSize { .. })));
        assert_eq!(sim.pointer().position(), Some(Vec2::new(5.0, 6.0)));
        assert_eq!(sim.viewport().width, 2400.0);
        assert_eq!(sim.field().particle_count, 300.0);
    }
}
