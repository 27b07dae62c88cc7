//! Application entry point for the particle wave.
//!
//! This binary sets up logging and eframe/egui and delegates the animation
//! to [`Viewer`] from the `viewer` module.

mod surface;
mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// Log output is controlled with `RUST_LOG` (e.g. `RUST_LOG=wave_core=debug`
/// to follow population changes).
///
/// ### Returns
/// - `Ok(())` once the window is closed.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Particle Wave"),
        vsync: true,
        ..Default::default()
    };

    log::info!("opening window");

    eframe::run_native(
        "Particle Wave",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new()))),
    )
}
