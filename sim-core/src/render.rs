//! Drawing the field onto an abstract surface.
//!
//! The core never talks to a window or a canvas directly. Anything that can
//! fill a gradient rectangle, fill a circle and stroke a line implements
//! [`Surface`], and [`render_frame`] paints one frame onto it.

use glam::Vec2;

use crate::{
    config::{BACKGROUND_END, BACKGROUND_START, Config, PARTICLE_COLOR},
    field::ParticleField,
    particle::Particle,
    types::ParticleId,
    viewport::Viewport,
};

/// An sRGB colour with a straight (non-premultiplied) alpha.
///
/// `a` is not clamped here: link alphas run up to `Config::link_alpha`,
/// and surfaces clamp to `[0, 1]` when they convert.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Interpolates channel-wise; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// A two-stop linear gradient between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: Vec2,
    pub to: Vec2,
    pub start: Rgba,
    pub end: Rgba,
}

impl LinearGradient {
    /// The background: top-left to bottom-right across the viewport.
    pub fn background(viewport: &Viewport) -> Self {
        Self {
            from: Vec2::ZERO,
            to: viewport.size(),
            start: BACKGROUND_START,
            end: BACKGROUND_END,
        }
    }

    /// Colour at `point`, projecting it onto the gradient axis.
    ///
    /// Points before `from` get `start`, points past `to` get `end`.
    pub fn sample(&self, point: Vec2) -> Rgba {
        let axis = self.to - self.from;
        let len2 = axis.length_squared();
        let t = if len2 == 0.0 {
            0.0
        } else {
            (point - self.from).dot(axis) / len2
        };
        self.start.lerp(self.end, t)
    }
}

/// Something the renderer can paint on, in canvas pixel coordinates.
pub trait Surface {
    /// Fills the rectangle from the origin to `size` with `gradient`.
    fn fill_gradient(&mut self, size: Vec2, gradient: &LinearGradient);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// A line to draw between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: ParticleId,
    pub b: ParticleId,
    pub dist2: f32,
    /// Raw stroke alpha in `(link_alpha - 1, link_alpha]`.
    pub alpha: f32,
}

/// Stroke alpha for a pair at squared distance `dist2`, or `None` if the
/// pair is too far apart to be linked.
#[inline]
pub fn link_alpha(dist2: f32, min_dist2: f32, alpha0: f32) -> Option<f32> {
    (dist2 <= min_dist2).then(|| alpha0 - dist2 / min_dist2)
}

/// All linked pairs `(i, j)` with `i < j`, in lexicographic order.
pub fn links<'a>(
    particles: &'a [Particle],
    min_dist: f32,
    alpha0: f32,
) -> impl Iterator<Item = Link> + 'a {
    let min_dist2 = min_dist * min_dist;
    particles.iter().enumerate().flat_map(move |(a, pa)| {
        particles[a + 1..]
            .iter()
            .enumerate()
            .filter_map(move |(k, pb)| {
                let dist2 = pa.pos.distance_squared(pb.pos);
                link_alpha(dist2, min_dist2, alpha0).map(|alpha| Link {
                    a,
                    b: a + 1 + k,
                    dist2,
                    alpha,
                })
            })
    })
}

/// Paints one frame: background, then each particle followed by the links
/// to the particles after it.
///
/// Painting never mutates the field.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    field: &ParticleField,
    viewport: &Viewport,
    cfg: &Config,
) {
    surface.fill_gradient(viewport.size(), &LinearGradient::background(viewport));

    let particles = &field.particles;
    let min_dist = viewport.min_dist(cfg);
    let mut links = links(particles, min_dist, cfg.link_alpha).peekable();

    for (i, p) in particles.iter().enumerate() {
        surface.fill_circle(p.pos, p.radius, PARTICLE_COLOR);

        while let Some(link) = links.next_if(|l| l.a == i) {
            surface.stroke_line(
                p.pos,
                particles[link.b].pos,
                cfg.link_width,
                Rgba::WHITE.with_alpha(link.alpha),
            );
        }
    }
}
