use std::time::Duration;

use crate::render::Rgba;

/// Repaint interval used when the host has no display refresh to sync to.
pub const FALLBACK_FRAME_INTERVAL: Duration = Duration::from_millis(1000 / 30);

/// Gradient colour at the top-left corner of the viewport.
pub const BACKGROUND_START: Rgba = Rgba::rgb(229, 79, 255);
/// Gradient colour at the bottom-right corner of the viewport.
pub const BACKGROUND_END: Rgba = Rgba::rgb(31, 87, 255);
/// Fill colour of every particle.
pub const PARTICLE_COLOR: Rgba = Rgba::WHITE;

/// Fixed visual and physical parameters of the particle wave.
///
/// Distances and velocities are expressed for a reference viewport of
/// `reference_width` pixels and multiplied by the viewport scale at use.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Widths below this are treated as this width when computing the scale.
    pub min_scale_width: f32,
    /// Width at which the scale factor is exactly `1.0`.
    pub reference_width: f32,

    /// Particles per unit of scale.
    pub particle_density: f32,
    pub particle_radius: f32,
    /// Half-width of the uniform position jitter applied at spawn.
    pub spawn_jitter: f32,
    /// Half-width of the uniform initial velocity.
    pub spawn_speed: f32,
    /// Added to `random()` when drawing the curve speed.
    pub curve_speed_bias: f32,
    pub curve_speed_gain: f32,

    /// Lower bound of the curve parameter; wrapped particles restart here.
    pub t_min: f32,
    /// Upper bound of the curve parameter; exceeding it triggers a wrap.
    pub t_max: f32,

    /// Vertical centre of the curve as a fraction of the height.
    pub curve_center: f32,
    /// Amplitude of the curve as a fraction of the height.
    pub curve_amplitude: f32,
    /// Angular frequency of the curve over the full width.
    pub curve_frequency: f32,
    /// Lateral offset from the curve for a particle with `r == 1`.
    pub target_offset: f32,

    /// Particles closer than this to their target feel no seeking force.
    pub seek_deadzone: f32,
    pub seek_gain: f32,
    pub repel_radius: f32,
    pub repel_gain: f32,
    /// Velocity multiplier applied every tick.
    pub damping: f32,

    /// Pairs closer than this are linked by a line.
    pub link_distance: f32,
    /// Line alpha at zero distance; decreases by `1.0` at `link_distance`.
    pub link_alpha: f32,
    pub link_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_scale_width: 800.0,
            reference_width: 1200.0,
            particle_density: 150.0,
            particle_radius: 4.0,
            spawn_jitter: 50.0,
            spawn_speed: 0.1,
            curve_speed_bias: 0.2,
            curve_speed_gain: 1e-3,
            t_min: -0.1,
            t_max: 1.1,
            curve_center: 0.5,
            curve_amplitude: 0.3,
            curve_frequency: 6.0,
            target_offset: 80.0,
            seek_deadzone: 20.0,
            seek_gain: 1e-3,
            repel_radius: 50.0,
            repel_gain: 1e-1,
            damping: 0.95,
            link_distance: 70.0,
            link_alpha: 1.2,
            link_width: 1.0,
        }
    }
}
