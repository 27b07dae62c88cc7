//! Core 2-D particle wave simulation library.
//!
//! Main components:
//! - [`shape`] — the curve particles seek and per-particle targets on it.
//! - [`particle`] — a single moving particle and how it is spawned.
//! - [`field`] — the live population and its lazy reconciliation.
//! - [`motion`] — the per-tick integrator.
//! - [`render`] — the drawing surface abstraction and frame painting.
//! - [`simulation`] — the context that owns all state and consumes events.
//! - [`viewport`] — surface dimensions and the derived scale factor.
//! - [`pointer`] — latest pointer sample.
//! - [`config`] — fixed visual and physical parameters.
//! - [`error`] — errors raised by the core.
//! - [`types`] — shared type aliases and IDs.

pub mod config;
pub mod error;
pub mod field;
pub mod motion;
pub mod particle;
pub mod pointer;
pub mod render;
pub mod shape;
pub mod simulation;
pub mod types;
pub mod viewport;
