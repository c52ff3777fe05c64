//! Showcase driver: renders the skill diagram to SVG and plays the
//! backdrop scene offscreen, saving the final frame as a PNG.

use std::path::Path;

use thiserror::Error;
use vista_engine::content;
use vista_engine::foundation::logging;
use vista_engine::prelude::*;

/// Frames of backdrop playback at the fixed 60 Hz step
const PLAYBACK_FRAMES: u32 = 180;

const VIEWPORT_WIDTH: u32 = 1280;
const VIEWPORT_HEIGHT: u32 = 720;

const SETTINGS_PATH: &str = "showcase_settings.toml";
const DIAGRAM_PATH: &str = "skills.svg";
const BACKDROP_PATH: &str = "backdrop.png";

#[derive(Error, Debug)]
enum ShowcaseError {
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ShowcaseError> {
    let settings_path = Path::new(SETTINGS_PATH);
    let mut settings = ThemeSettings::load_or_default(settings_path);
    log::info!("theme: {}", if settings.dark { "dark" } else { "light" });

    if std::env::args().any(|arg| arg == "--toggle-theme") {
        settings.toggle();
        settings.store(settings_path)?;
    }

    render_diagram()?;
    play_backdrop()?;
    Ok(())
}

fn render_diagram() -> Result<(), ShowcaseError> {
    let diagram = TreeDiagram::new(vec![content::skills_tree()]);
    let svg = vista_engine::diagram::write_svg(&diagram.render(), 800, 600);
    std::fs::write(DIAGRAM_PATH, svg)?;
    log::info!("skill diagram written to {DIAGRAM_PATH}");
    Ok(())
}

fn play_backdrop() -> Result<(), ShowcaseError> {
    let viewport = Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    let surface = OffscreenSurface::new(viewport)?;
    let mut driver = SceneDriver::initialize(viewport, surface, TickScheduler::new())?;

    let mut tracker = PointerTracker::new();
    let mut timer = Timer::new();

    for frame in 0..PLAYBACK_FRAMES {
        timer.step(1.0 / 60.0);

        // Scripted pointer: a slow circle around the viewport center.
        let angle = frame as f32 / PLAYBACK_FRAMES as f32 * std::f32::consts::TAU;
        tracker.set_normalized(0.6 * angle.cos(), 0.6 * angle.sin());

        driver.on_frame(timer.total_time(), tracker.latest())?;
    }

    driver.surface().save_png(Path::new(BACKDROP_PATH))?;
    log::info!(
        "backdrop frame written to {BACKDROP_PATH} after {} frames ({:.1} fps average)",
        timer.frame_count(),
        timer.average_fps()
    );

    driver.teardown();
    Ok(())
}
