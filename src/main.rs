use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use orbit_cam::cli::Cli;
use orbit_cam::core::clock::FrameClock;
use orbit_cam::core::input_adapter::WinitController;
use orbit_cam::types::Viewport;
use orbit_cam::{CameraConfig, CameraRig};

struct App {
    window: Option<Arc<Window>>,
    input: WinitController,
    rig: CameraRig,
    clock: FrameClock,
    log_matrices: bool,
    initial_size: (u32, u32),
}

impl App {
    fn new(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => CameraConfig::load(path)
                .with_context(|| format!("Failed to load camera config {}", path.display()))?,
            None => CameraConfig::default(),
        };
        cli.apply_overrides(&mut config);

        let viewport = Viewport::new(cli.width, cli.height).context("Invalid window size")?;
        let rig = CameraRig::from_config(&config, viewport).context("Invalid camera setup")?;

        Ok(Self {
            window: None,
            input: WinitController::new(),
            rig,
            clock: FrameClock::default(),
            log_matrices: cli.log_matrices,
            initial_size: (cli.width, cli.height),
        })
    }

    fn dispatch_input(&mut self) {
        let state = self.input.input_state(self.rig.viewport());
        if let Some(operation) = self.rig.handle_input(&state) {
            log::trace!("Applied {:?}", operation);
        }
        self.input.reset_deltas();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let (width, height) = self.initial_size;
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Orbit Camera")
                    .with_inner_size(winit::dpi::PhysicalSize::new(width, height)),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            if let Err(e) = self.rig.resize(size.width, size.height) {
                log::warn!("Initial resize skipped: {}", e);
            }
            self.window = Some(window);
            self.clock = FrameClock::default();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.input.process_event(&event);
                self.rig.request_resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                self.rig.tick(delta);

                let snapshot = self.rig.view_projection();
                if self.log_matrices {
                    log::info!("view_proj {:?}", snapshot.view_proj());
                }
            }
            _ => {
                if self.input.process_event(&event) {
                    self.dispatch_input();
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(&cli)?;

    log::info!("Orbit camera - drag to rotate, right-drag to zoom, middle-drag to pan, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
