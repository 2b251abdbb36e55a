//! Render pipelines, one per technique kind.

pub mod mesh;

use crate::scene::store::TechniqueKind;

pub struct Pipelines {
    pub mesh: wgpu::RenderPipeline,
}

impl Pipelines {
    pub fn new(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) -> Self {
        Self {
            mesh: mesh::mk_mesh_pipeline(device, config),
        }
    }

    pub fn for_kind(&self, kind: TechniqueKind) -> &wgpu::RenderPipeline {
        match kind {
            TechniqueKind::Mesh => &self.mesh,
        }
    }
}
