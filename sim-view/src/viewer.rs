//! Full-window particle wave built with eframe/egui.
//!
//! This module defines [`Viewer`], the platform side of the simulation. It
//! implements [`eframe::App`] and, once per frame:
//! 1. Measures the canvas and starts the simulation, or queues a resize.
//! 2. Queues pointer samples that arrived since the last frame.
//! 3. Hands the queued events to the [`Simulation`] and runs one
//!    paint-then-advance cycle on an egui painter.
//! 4. Asks eframe for the next frame.

use std::time::Duration;

use eframe::App;
use glam::Vec2;
use rand::{SeedableRng, rngs::StdRng};
use wave_core::{
    config::{Config, FALLBACK_FRAME_INTERVAL},
    error::SurfaceError,
    simulation::{SimEvent, Simulation},
};

use crate::surface::PainterSurface;

/// Application state for the particle wave window.
///
/// ### Fields
/// - `cfg` - Constants handed to the simulation when it starts.
/// - `sim` - The running simulation; `None` until the canvas has a usable size.
/// - `pending` - Events collected this frame, applied right before painting.
/// - `surface_error` - Last reason the simulation could not start, so it is
///   logged once rather than every frame.
pub struct Viewer {
    cfg: Config,
    sim: Option<Simulation>,
    pending: Vec<SimEvent>,
    surface_error: Option<SurfaceError>,
}

impl Viewer {
    /// Creates an idle viewer. The simulation starts on the first frame
    /// whose canvas can host it.
    pub fn new() -> Self {
        Self {
            cfg: Config::default(),
            sim: None,
            pending: Vec::with_capacity(8),
            surface_error: None,
        }
    }

    /// Converts a screen position to canvas-local coordinates.
    fn canvas_local(p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let d = p - rect.min;
        Vec2::new(d.x, d.y)
    }

    /// Starts the simulation on a canvas of `size`, or queues a resize if it
    /// is already running.
    ///
    /// ### Returns
    /// `true` if a frame should be painted. While the canvas has no area
    /// (never started, or minimised) nothing is painted and nothing ticks.
    fn sync_surface(&mut self, size: egui::Vec2) -> bool {
        match &self.sim {
            Some(sim) => {
                if size.x <= 0.0 || size.y <= 0.0 {
                    log::trace!("canvas has no area, skipping frame");
                    return false;
                }
                let vp = sim.viewport();
                if vp.width != size.x || vp.height != size.y {
                    self.pending.push(SimEvent::Resized {
                        width: size.x,
                        height: size.y,
                    });
                }
                true
            }
            None => match Simulation::new(size.x, size.y, self.cfg, StdRng::from_os_rng()) {
                Ok(sim) => {
                    self.sim = Some(sim);
                    self.surface_error = None;
                    true
                }
                Err(e) => {
                    if self.surface_error != Some(e) {
                        log::warn!("not starting the animation: {e}");
                        self.surface_error = Some(e);
                    }
                    false
                }
            },
        }
    }

    /// Queues every pointer sample from this frame's input.
    ///
    /// egui reports mouse motion and single-finger touch drags alike as
    /// `PointerMoved`.
    fn collect_pointer(&mut self, ctx: &egui::Context, rect: egui::Rect) {
        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::PointerMoved(pos) = event {
                    self.pending
                        .push(SimEvent::PointerMoved(Self::canvas_local(*pos, rect)));
                }
            }
        });
    }

    /// Builds the canvas and runs one simulation frame on it.
    fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;

                if !self.sync_surface(rect.size()) {
                    return;
                }
                self.collect_pointer(ctx, rect);

                let Some(sim) = self.sim.as_mut() else {
                    return;
                };

                if let Err(e) = sim.apply_all(self.pending.drain(..)) {
                    log::warn!("ignoring surface update: {e}");
                }

                let painter = ui.painter_at(rect);
                let mut surface = PainterSurface::new(&painter, rect.min);
                let report = sim.frame(&mut surface);

                if report.wrapped > 0 {
                    log::trace!(
                        "frame {}: {} wrapped, {} particles",
                        sim.frames(),
                        report.wrapped,
                        sim.field().len()
                    );
                }
            });

        self.schedule_next_frame(ctx);
    }

    /// Delay before the next frame: none normally, the fallback interval
    /// while the window is minimised.
    fn frame_delay(minimized: bool) -> Duration {
        if minimized {
            FALLBACK_FRAME_INTERVAL
        } else {
            Duration::ZERO
        }
    }

    /// Keeps the animation running once the simulation has started.
    ///
    /// On hosts that shrink the canvas to nothing when minimised,
    /// [`Viewer::sync_surface`] skips those frames, so the fallback timer only
    /// polls for the window to come back and the field does not advance.
    fn schedule_next_frame(&self, ctx: &egui::Context) {
        if self.sim.is_none() {
            return;
        }

        let minimized = ctx.input(|i| i.viewport().minimized).unwrap_or(false);
        ctx.request_repaint_after(Self::frame_delay(minimized));
    }
}

impl App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
