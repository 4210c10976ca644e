//! Seascape demo host
//!
//! Loads a scene file, bootstraps it, and drives frames from a winit window
//! (continuous redraw, resize forwarding) or headlessly at ~60 Hz.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use clap::Parser;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};
use seascape_engine::seascape::{Engine, Error, Result, SceneApp, SceneConfig};
use seascape_engine::seascape::asset::FileAssetLoader;
use seascape_engine::seascape::frame::FrameClock;
use seascape_engine::seascape::log::LogSeverity;
use seascape_engine::{engine_error, engine_info, engine_warn};

mod stats_renderer;

use stats_renderer::FrameStatsRenderer;

/// Frames run in headless mode when --frames is not given
const DEFAULT_HEADLESS_FRAMES: u64 = 600;
const HEADLESS_FRAME_TIME: Duration = Duration::from_micros(16_667);

#[derive(Parser)]
#[command(name = "seascape")]
#[command(about = "Run a declarative seascape scene")]
struct Cli {
    /// Scene file (JSON)
    #[arg(default_value = "seascape_demo/scenes/water_world.json")]
    scene: PathBuf,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// Run without opening a window
    #[arg(long)]
    headless: bool,

    /// Override the scene's scatter seed
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

// ============================================================================
// Windowed host
// ============================================================================

struct WindowedHost {
    config: SceneConfig,
    frame_limit: Option<u64>,
    window: Option<Window>,
    scene: Option<SceneApp>,
    renderer: FrameStatsRenderer,
    clock: FrameClock,
    failure: Option<Error>,
}

impl WindowedHost {
    fn new(config: SceneConfig, frame_limit: Option<u64>) -> Self {
        Self {
            config,
            frame_limit,
            window: None,
            scene: None,
            renderer: FrameStatsRenderer::new(),
            clock: FrameClock::new(),
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        engine_error!("seascape::Demo", "{}", error);
        self.failure = Some(error);
        event_loop.exit();
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(format!("Seascape - {}", self.config.name))
            .with_inner_size(LogicalSize::new(1280.0, 720.0));
        let window = event_loop
            .create_window(attributes)
            .map_err(|e| Error::InitializationFailed(format!("cannot create window: {}", e)))?;

        let size = window.inner_size();
        let loader = FileAssetLoader::new(&self.config.asset_root);
        let scene = SceneApp::bootstrap(&self.config, loader, size.width, size.height)?;

        window.request_redraw();
        self.window = Some(window);
        self.scene = Some(scene);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let delta = self.clock.delta();
        if let Err(error) = scene.frame(delta, &mut self.renderer) {
            self.fail(event_loop, error);
            return;
        }
        if self.frame_limit.is_some_and(|limit| self.renderer.total_frames() >= limit) {
            engine_info!("seascape::Demo", "Frame limit reached");
            scene.stop();
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for WindowedHost {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(error) = self.start(event_loop) {
            self.fail(event_loop, error);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(scene) = self.scene.as_mut() {
                    if let Err(error) = scene.resize(size.width, size.height, &mut self.renderer) {
                        self.fail(event_loop, error);
                    }
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

fn run_windowed(config: SceneConfig, frame_limit: Option<u64>) -> Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| Error::InitializationFailed(format!("cannot create event loop: {}", e)))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut host = WindowedHost::new(config, frame_limit);
    event_loop
        .run_app(&mut host)
        .map_err(|e| Error::BackendError(format!("event loop failed: {}", e)))?;

    match host.failure {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

// ============================================================================
// Headless host
// ============================================================================

fn run_headless(config: SceneConfig, frames: u64) -> Result<()> {
    let loader = FileAssetLoader::new(&config.asset_root);
    let mut scene = SceneApp::bootstrap(&config, loader, 1280, 720)?;
    let mut renderer = FrameStatsRenderer::new();
    let mut clock = FrameClock::new();

    for _ in 0..frames {
        scene.frame(clock.delta(), &mut renderer)?;
        std::thread::sleep(HEADLESS_FRAME_TIME);
    }
    scene.stop();

    let pending = scene.pipeline().pending_count();
    if pending > 0 {
        engine_warn!("seascape::Demo", "{} placements still pending at exit", pending);
    }
    engine_info!(
        "seascape::Demo",
        "Ran {} frames: {} nodes, {} revealed",
        renderer.total_frames(),
        scene.context().scene.len(),
        if scene.is_revealed() { "scene" } else { "nothing" }
    );
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut config = SceneConfig::from_file(&cli.scene)?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    engine_info!(
        "seascape::Demo",
        "Seascape {}: scene '{}' ({} assets) from {}",
        Engine::version(),
        config.name,
        config.assets.len(),
        cli.scene.display()
    );

    if cli.headless {
        run_headless(config, cli.frames.unwrap_or(DEFAULT_HEADLESS_FRAMES))
    } else {
        run_windowed(config, cli.frames)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.verbose {
        Engine::set_min_severity(LogSeverity::Debug);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            engine_error!("seascape::Demo", "Exiting: {}", error);
            ExitCode::FAILURE
        }
    }
}
