//! Per-frame uniform buffers and bind groups.
//!
//! Several frames can be in flight at once, so every uniform consumer owns a
//! small ring of buffers, one per frame slot, and the frame updater writes
//! the slot currently being prepared. Each instance owns its ring
//! exclusively for the lifetime of the run; nothing aliases across slots.
//! `publish` must run exactly once per instance per frame before that
//! frame's draw commands are recorded. Nothing enforces the ordering at
//! runtime; a violation shows up as rendering corruption, not an error.

use cgmath::Matrix4;
use wgpu::util::DeviceExt;

use crate::camera::{Camera, Projection};

/// How many frames may be prepared while earlier ones are still in flight.
pub const FRAMES_IN_FLIGHT: usize = 2;

/// Index into the per-frame uniform rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSlot(pub usize);

impl FrameSlot {
    pub fn next(self) -> FrameSlot {
        FrameSlot((self.0 + 1) % FRAMES_IN_FLIGHT)
    }
}

/// Frame-global shading data: camera matrices plus the single room light.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUniform {
    view_proj: [[f32; 4]; 4],
    view_position: [f32; 4],
    light_position: [f32; 4],
    light_color: [f32; 4],
}

impl GlobalUniform {
    pub fn new(
        camera: &Camera,
        projection: &Projection,
        light_position: [f32; 3],
        light_color: [f32; 3],
    ) -> Self {
        let [lx, ly, lz] = light_position;
        let [lr, lg, lb] = light_color;
        Self {
            view_proj: (projection.matrix() * camera.view_matrix()).into(),
            view_position: [camera.position.x, camera.position.y, camera.position.z, 1.0],
            light_position: [lx, ly, lz, 1.0],
            light_color: [lr, lg, lb, 1.0],
        }
    }
}

/// Per-object shading data: transform, colour tint and the highlight and
/// visibility flags packed into one vec4.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceUniform {
    model: [[f32; 4]; 4],
    tint: [f32; 4],
    flags: [f32; 4],
}

impl InstanceUniform {
    pub fn new(transform: &Matrix4<f32>, tint: [f32; 4], highlight: bool, visible: bool) -> Self {
        Self {
            model: (*transform).into(),
            tint,
            flags: [highlight as i32 as f32, visible as i32 as f32, 0.0, 0.0],
        }
    }
}

fn uniform_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some(label),
    })
}

pub fn global_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    uniform_layout(device, "global_bind_group_layout")
}

pub fn instance_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    uniform_layout(device, "instance_bind_group_layout")
}

fn ring<T: bytemuck::Pod>(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    label: &str,
    initial: &T,
) -> (Vec<wgpu::Buffer>, Vec<wgpu::BindGroup>) {
    let buffers: Vec<wgpu::Buffer> = (0..FRAMES_IN_FLIGHT)
        .map(|slot| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} buffer {}", label, slot)),
                contents: bytemuck::cast_slice(std::slice::from_ref(initial)),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            })
        })
        .collect();
    let bind_groups = buffers
        .iter()
        .enumerate()
        .map(|(slot, buffer)| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
                label: Some(&format!("{} bind group {}", label, slot)),
            })
        })
        .collect();
    (buffers, bind_groups)
}

/// Ring of frame-global uniform buffers.
#[derive(Debug)]
pub struct GlobalBinding {
    buffers: Vec<wgpu::Buffer>,
    bind_groups: Vec<wgpu::BindGroup>,
}

impl GlobalBinding {
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> Self {
        let (buffers, bind_groups) = ring(
            device,
            layout,
            "global",
            &GlobalUniform {
                view_proj: Matrix4::from_scale(1.0f32).into(),
                view_position: [0.0; 4],
                light_position: [0.0; 4],
                light_color: [1.0; 4],
            },
        );
        Self {
            buffers,
            bind_groups,
        }
    }

    pub fn publish(&self, queue: &wgpu::Queue, slot: FrameSlot, data: &GlobalUniform) {
        queue.write_buffer(
            &self.buffers[slot.0],
            0,
            bytemuck::cast_slice(std::slice::from_ref(data)),
        );
    }

    pub fn bind_group(&self, slot: FrameSlot) -> &wgpu::BindGroup {
        &self.bind_groups[slot.0]
    }
}

/// Ring of per-instance uniform buffers. Each instance in the store owns one.
#[derive(Debug)]
pub struct InstanceBinding {
    buffers: Vec<wgpu::Buffer>,
    bind_groups: Vec<wgpu::BindGroup>,
}

impl InstanceBinding {
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let (buffers, bind_groups) = ring(
            device,
            layout,
            label,
            &InstanceUniform::new(&Matrix4::from_scale(1.0), [1.0; 4], false, true),
        );
        Self {
            buffers,
            bind_groups,
        }
    }

    pub fn publish(&self, queue: &wgpu::Queue, slot: FrameSlot, data: &InstanceUniform) {
        queue.write_buffer(
            &self.buffers[slot.0],
            0,
            bytemuck::cast_slice(std::slice::from_ref(data)),
        );
    }

    pub fn bind_group(&self, slot: FrameSlot) -> &wgpu::BindGroup {
        &self.bind_groups[slot.0]
    }
}
