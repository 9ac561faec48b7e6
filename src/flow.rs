//! Application event loop.
//!
//! The loop follows this pattern:
//! 1. Collect window events and turn keys and drags into scene commands
//! 2. On every redraw advance the animation once per elapsed tick if it is running
//! 3. Let the scene compose the frame (view, lights, draw calls)
//! 4. Upload the uniforms and instances and render to the surface
//! 5. Present the frame and request the next redraw

use std::{iter, sync::Arc};

use instant::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::PhysicalKey,
    window::Window,
};

use crate::{
    camera::Camera,
    config::AppConfig,
    context::Context,
    controls::{Command, Controls, Flow, MouseDrag},
    data_structures::texture::Texture,
    scene::Scene,
};

/// GPU context, scene and input state, created once the window exists.
pub struct AppState {
    pub(crate) ctx: Context,
    scene: Scene,
    camera: Camera,
    controls: Controls,
    mouse: MouseDrag,
    is_surface_configured: bool,
}

impl AppState {
    async fn new(window: Arc<Window>, config: &AppConfig) -> anyhow::Result<Self> {
        let scene = Scene::new();
        let ctx = Context::new(window, &config.asset_dir, &scene).await?;
        let state = Self {
            ctx,
            scene,
            camera: Camera::default(),
            controls: Controls::new(config.animate),
            mouse: MouseDrag::default(),
            is_surface_configured: false,
        };
        state.refresh_title();
        Ok(state)
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.ctx.config.width = width;
            self.ctx.config.height = height;
            self.is_surface_configured = true;
            self.ctx.projection.resize(width, height);
            self.ctx.surface.configure(&self.ctx.device, &self.ctx.config);
            self.ctx.depth_texture = Texture::create_depth_texture(
                &self.ctx.device,
                [self.ctx.config.width, self.ctx.config.height],
                "depth_texture",
            );
        }
    }

    fn refresh_title(&self) {
        self.ctx.window().set_title(&self.controls.title(&self.scene));
    }

    fn command(&mut self, command: Command) -> Flow {
        let flow = self.controls.apply(command, &mut self.scene);
        self.refresh_title();
        flow
    }

    fn tick(&mut self) {
        if self.controls.animating() {
            self.scene.update();
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        // invoke main render loop
        self.ctx.window.request_redraw();

        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        let frame = self.scene.render(&self.camera);

        let ctx = &mut self.ctx;
        ctx.camera
            .uniform
            .update_view_proj(frame.eye, frame.view, &ctx.projection);
        ctx.camera.write(&ctx.queue);
        ctx.light.update(&ctx.queue, &frame.lights);
        ctx.renderer.prepare(&ctx.device, &ctx.queue, &frame.draws);

        let output = ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            ctx.renderer.draw(
                &mut render_pass,
                &frame.draws,
                &ctx.camera.bind_group,
                &ctx.light.bind_group,
            );
        }

        ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    config: AppConfig,
    state: Option<AppState>,
    last_time: Instant,
    time_since_tick: Duration,
}

impl App {
    fn new(config: AppConfig) -> anyhow::Result<Self> {
        let async_runtime = tokio::runtime::Runtime::new()?;
        Ok(Self {
            async_runtime,
            config,
            state: None,
            last_time: Instant::now(),
            time_since_tick: Duration::from_millis(0),
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window_attributes = Window::default_attributes()
            .with_title("Jumping lamp")
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Could not create the window: {e}");
                event_loop.exit();
                return;
            }
        };

        match self
            .async_runtime
            .block_on(AppState::new(window, &self.config))
        {
            Ok(mut state) => {
                let size = state.ctx.window.inner_size();
                state.resize(size.width, size.height);
                self.state = Some(state);
                self.last_time = Instant::now();
            }
            Err(e) => {
                log::error!("App initialization failed. Cannot create the main context: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(command) = Command::from_key(code) {
                    if state.command(command) == Flow::Exit {
                        event_loop.exit();
                    }
                }
            }
            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => state.mouse.button(button, button_state.is_pressed()),
            WindowEvent::CursorMoved { position, .. } => {
                let size = state.ctx.window.inner_size();
                state.mouse.moved(position, size, &mut state.camera);
            }
            WindowEvent::RedrawRequested => {
                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();
                self.time_since_tick += dt;

                let tick = Duration::from_millis(self.config.tick_duration_millis());
                if self.time_since_tick >= tick {
                    state.tick();
                    self.time_since_tick = Duration::from_millis(0);
                }

                match state.render() {
                    Ok(_) => {}
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

pub fn run(config: AppConfig) -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };
    log::info!("starting with {config:?}");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config)?;

    event_loop.run_app(&mut app)?;

    Ok(())
}
