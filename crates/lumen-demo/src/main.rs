//! Starfield control panel, replayed headless.
//!
//! Runs a scripted pointer session through the panel's sliders and logs the
//! resulting scene parameters. Set `RUST_LOG=debug` to watch every change,
//! `RUST_LOG=trace` to see individual event claims.

mod app;
mod script;

use anyhow::{Context, Result};

use lumen_engine::coords::Viewport;
use lumen_engine::input::MouseButton;
use lumen_engine::logging::{init_logging, LoggingConfig};
use lumen_engine::runtime::{Runtime, RuntimeConfig};

use app::{row_rect, StarfieldPanel, ROW_GAP};
use script::PointerScript;

fn session() -> PointerScript {
    let speed = row_rect(0);
    let density = row_rect(1);
    let fov = row_rect(2);

    PointerScript::new()
        .idle(2)
        // Sweep speed up, overshooting the track; the value saturates at max.
        .move_to(speed.origin.x + 4.0, speed.center().y)
        .press(MouseButton::Left)
        .drag_to(speed.max().x + 80.0, speed.center().y, 12)
        // Wander over the density row mid-drag: speed still owns the drag.
        .drag_to(speed.origin.x + speed.size.x * 0.3, density.center().y, 6)
        .release()
        // Fine-tune density with the wheel.
        .move_to(density.center().x, density.center().y)
        .wheel(3.0)
        .wheel(-1.0)
        // A drag that starts in the gap belongs to nobody.
        .move_to(fov.origin.x + 10.0, fov.origin.y - ROW_GAP * 0.5)
        .press(MouseButton::Left)
        .drag_to(fov.max().x, fov.center().y, 4)
        .release()
        // Then a real one on the field of view.
        .move_to(fov.origin.x + fov.size.x * 0.5, fov.center().y)
        .press(MouseButton::Left)
        .drag_to(fov.origin.x + fov.size.x * 0.75, fov.center().y, 3)
        .release()
        .idle(2)
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "starfield panel".to_string(),
        viewport: Viewport::new(800.0, 600.0),
        ..Default::default()
    };

    let mut panel = StarfieldPanel::new();
    log::info!("initial {:?}", panel.params());

    let summary = Runtime::run(config, &mut panel, session().into_frames())
        .context("starfield panel session failed")?;

    log::info!(
        "{} frames, last frame painted {} commands",
        summary.frames,
        panel.painted()
    );
    log::info!("final {:?}", panel.params());
    Ok(())
}
