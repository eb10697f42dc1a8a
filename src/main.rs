//! Reefdive - swim through a procedurally scattered coral reef
//!
//! Schools of fish cruise past, bubbles rise from the seabed and the ocean
//! surface shimmers overhead.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use reefdive::camera::{CameraSystem, MoveInput};
use reefdive::cli::Args;
use reefdive::params::{FishProfile, SceneConfig};
use reefdive::rendering::{rgba8, RenderSystem};
use reefdive::scene::{Scene, SceneAssets, TextureHandle};
use reefdive::simulation::FrameClock;

/// Seabed texture edge length (texels)
const SAND_SIZE: u32 = 64;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    scene: Option<Scene>,

    // Simulation state
    camera: CameraSystem,
    input: MoveInput,
    clock: FrameClock,

    // Configuration
    config: SceneConfig,
    seed: u64,

    /// First fatal error raised inside the event loop
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: SceneConfig, camera: CameraSystem, seed: u64) -> Self {
        Self {
            window: None,
            render_system: None,
            scene: None,
            camera,
            input: MoveInput::default(),
            clock: FrameClock::new(config.motion.max_frame_delta_s),
            config,
            seed,
            error: None,
        }
    }

    /// Create the window, GPU resources and the scene
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("reefdive")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.render.window_width,
                self.config.render.window_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("failed to create window")?,
        );

        let mut render_system =
            pollster::block_on(RenderSystem::new(Arc::clone(&window), &self.config.render))?;
        let (width, height) = render_system.size();
        self.config.render.resize(width, height);

        let mut fish_textures = Vec::with_capacity(self.config.fish_species.len());
        for profile in &self.config.fish_species {
            let texels = fish_atlas(profile);
            fish_textures.push(render_system.register_texture(&profile.name, 1, 2, &texels)?);
        }
        let sand = render_system.register_texture("sand", SAND_SIZE, SAND_SIZE, &sand_texels())?;

        let mut textures = fish_textures.into_iter();
        let assets = SceneAssets::proxies(&self.config, &mut render_system, |_| {
            textures.next().unwrap_or(TextureHandle(0))
        })
        .with_seabed_texture(sand);

        let scene = Scene::new(
            &self.config,
            assets,
            &mut render_system,
            &self.camera.view(),
            self.seed,
        )?;

        grab_cursor(&window);

        info!("reefdive is running! WASD to swim, mouse to look, ESC to quit");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.scene = Some(scene);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("{:#}", err);
        self.error.get_or_insert(err);
        event_loop.exit();
    }

    fn handle_key(&mut self, code: KeyCode, pressed: bool) {
        let input = &mut self.input;
        match code {
            KeyCode::KeyW => input.forward = pressed,
            KeyCode::KeyS => input.back = pressed,
            KeyCode::KeyA => input.left = pressed,
            KeyCode::KeyD => input.right = pressed,
            KeyCode::Space => input.up = pressed,
            KeyCode::ControlLeft => input.down = pressed,
            KeyCode::ShiftLeft => input.boost = pressed,
            _ => {}
        }
    }

    /// Simulate, compose and present a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(render_system), Some(scene)) =
            (self.render_system.as_mut(), self.scene.as_mut())
        else {
            return;
        };

        let dt = self.clock.tick();
        self.camera.update(dt, &self.input);
        let view = self.camera.view();

        render_system.begin_frame(self.camera.view_proj(&self.config.render), view.position);
        scene.frame(dt, &view, render_system);

        match render_system.end_frame() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_system.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow!("GPU out of memory"));
            }
            Err(e) => warn!("Dropped frame: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape {
                    event_loop.exit();
                } else {
                    self.handle_key(code, state == ElementState::Pressed);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                    let (width, height) = render_system.size();
                    self.config.render.resize(width, height);
                }
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.camera.apply_mouse_delta(dx, dy);
        }
    }
}

fn grab_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Confined)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked));
    match grabbed {
        Ok(()) => window.set_cursor_visible(false),
        Err(e) => warn!("Cursor grab unavailable: {}", e),
    }
}

/// Two-row atlas: a darker back on top, the species colour below
fn fish_atlas(profile: &FishProfile) -> Vec<u8> {
    let [r, g, b] = profile.color;
    let mut texels = Vec::with_capacity(8);
    texels.extend(rgba8([r * 0.55, g * 0.55, b * 0.55, 1.0]));
    texels.extend(rgba8([r, g, b, 1.0]));
    texels
}

/// Speckled sand; tinted by the ground colour when drawn
fn sand_texels() -> Vec<u8> {
    let mut texels = Vec::with_capacity((SAND_SIZE * SAND_SIZE * 4) as usize);
    for y in 0..SAND_SIZE {
        for x in 0..SAND_SIZE {
            let speckle = (x * 37 + y * 91) ^ (x * y);
            let shade = if speckle % 7 == 0 { 0.8 } else { 1.0 };
            texels.extend(rgba8([shade, shade, shade, 1.0]));
        }
    }
    texels
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = SceneConfig::default();
    args.apply_to(&mut config);
    config.validate().context("invalid configuration")?;

    let seed = args.seed();
    info!("Seed {} (pass --seed {} to replay this reef)", seed, seed);

    let camera = CameraSystem::new(args.parse_camera_preset());
    let mut app = App::new(config, camera, seed);

    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
