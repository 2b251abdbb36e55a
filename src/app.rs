//! Window lifecycle and the main event loop.
//!
//! Each redraw follows the same pattern:
//! 1. Fold pending window events into the keyboard state
//! 2. Advance the interaction state machine and publish this slot's uniforms
//! 3. Record and submit the frame's draws per technique group
//! 4. Present and move to the next frame slot

use std::{iter, path::PathBuf, sync::Arc};

use anyhow::Result;
use instant::Instant;
use tokio::runtime::Runtime;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use crate::{
    context::Context,
    frame::FrameUpdater,
    input::KeyboardState,
    overlay::{Overlay, TitleOverlay},
    resources::mesh::DrawModel,
    scene::{description::SceneDescription, SceneState},
};

const WINDOW_TITLE: &str = "roomflow";

/// Everything that exists once the window and GPU are up.
struct ViewerState {
    ctx: Context,
    scene: SceneState,
    keyboard: KeyboardState,
    updater: FrameUpdater,
    overlay: Box<dyn Overlay>,
    is_surface_configured: bool,
}

impl ViewerState {
    async fn new(window: Arc<Window>, description: &SceneDescription) -> Result<Self> {
        let ctx = Context::new(window.clone()).await?;
        let scene = SceneState::assemble(description, &ctx).await;
        Ok(Self {
            ctx,
            scene,
            keyboard: KeyboardState::default(),
            updater: FrameUpdater::new(),
            overlay: Box::new(TitleOverlay::new(window)),
            is_surface_configured: false,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.is_surface_configured = true;
            self.ctx.resize(width, height);
        }
    }

    fn render(&mut self, dt: f32) -> std::result::Result<bool, wgpu::SurfaceError> {
        self.ctx.window.request_redraw();

        if !self.is_surface_configured {
            return Ok(false);
        }

        let outcome = self.updater.advance(
            &mut self.ctx,
            &mut self.scene,
            &self.keyboard,
            self.overlay.as_mut(),
            dt,
        );

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
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
                        load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            let slot = self.updater.slot();
            let global_bind_group = self.ctx.global.bind_group(slot);
            for group in self.scene.store.groups() {
                render_pass.set_pipeline(self.ctx.pipelines.for_kind(group.kind));
                for &ix in &group.members {
                    let instance = self.scene.store.get(ix);
                    let Some(binding) = &instance.binding else {
                        log::warn!("instance {} has no GPU binding, skipped", instance.id);
                        continue;
                    };
                    render_pass.draw_model(
                        self.scene.models.model(instance.model),
                        global_bind_group,
                        binding.bind_group(slot),
                    );
                }
            }
        }

        self.ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        self.updater.end_frame();

        Ok(outcome.quit)
    }
}

pub struct App {
    async_runtime: Runtime,
    description: SceneDescription,
    state: Option<ViewerState>,
    last_time: Instant,
}

impl App {
    fn new(description: SceneDescription) -> Result<Self> {
        Ok(Self {
            async_runtime: Runtime::new()?,
            description,
            state: None,
            last_time: Instant::now(),
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window_attributes = Window::default_attributes().with_title(WINDOW_TITLE);
        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("window creation failed: {}", e);
                event_loop.exit();
                return;
            }
        };

        match self
            .async_runtime
            .block_on(ViewerState::new(window, &self.description))
        {
            Ok(state) => {
                state.ctx.window.request_redraw();
                self.state = Some(state);
                self.last_time = Instant::now();
            }
            Err(e) => {
                log::error!("viewer initialization failed: {}", e);
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
        let Some(state) = &mut self.state else {
            return;
        };

        state.keyboard.handle_window_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                let dt = self.last_time.elapsed().as_secs_f32();
                self.last_time = Instant::now();

                match state.render(dt) {
                    Ok(quit) => {
                        if quit {
                            event_loop.exit();
                        }
                    }
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("surface out of memory");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("surface error: {:?}", e),
                }
            }
            _ => {}
        }
    }
}

/// Load the scene description and run the viewer until quit.
pub fn run(scene_path: PathBuf) -> Result<()> {
    let description = SceneDescription::load_or_empty(&scene_path);
    let event_loop = EventLoop::new()?;
    let mut app = App::new(description)?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
