//! GPU context: surface, device, camera and the frame-global resources.

use std::sync::Arc;

use anyhow::Result;
use winit::window::Window;

use crate::{
    binding::{global_layout, instance_layout, GlobalBinding},
    camera::{Camera, CameraController, Projection},
    pipelines::Pipelines,
    resources::texture::{diffuse_layout, Texture},
};

pub struct Context {
    pub window: Arc<Window>,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub depth_texture: Texture,
    pub camera: Camera,
    pub controller: CameraController,
    pub projection: Projection,
    pub global: GlobalBinding,
    pub material_layout: wgpu::BindGroupLayout,
    pub instance_layout: wgpu::BindGroupLayout,
    pub pipelines: Pipelines,
    pub clear_colour: wgpu::Color,
    pub light_position: [f32; 3],
    pub light_color: [f32; 3],
}

impl Context {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::debug!("adapter: {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        // The shader assumes an sRGB surface; a linear one would render dark.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            Texture::create_depth_texture(&device, [config.width, config.height], "depth_texture");

        // Eye level near the room's door wall, looking into the room.
        let camera = Camera::new((0.0, 1.7, 6.0), cgmath::Deg(-90.0), cgmath::Deg(-10.0));
        let projection =
            Projection::new(config.width, config.height, cgmath::Deg(45.0), 0.1, 100.0);
        let controller = CameraController::new(3.0, 1.2, 3.0);

        let material_layout = diffuse_layout(&device);
        let instance_layout = instance_layout(&device);
        let global = GlobalBinding::new(&device, &global_layout(&device));

        let pipelines = Pipelines::new(&device, &config);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            depth_texture,
            camera,
            controller,
            projection,
            global,
            material_layout,
            instance_layout,
            pipelines,
            clear_colour: wgpu::Color {
                r: 0.05,
                g: 0.06,
                b: 0.08,
                a: 1.0,
            },
            light_position: [0.0, 2.6, 0.0],
            light_color: [1.0, 0.96, 0.88],
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            Texture::create_depth_texture(&self.device, [width, height], "depth_texture");
        self.projection.resize(width, height);
    }
}
