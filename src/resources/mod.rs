//! Asset loading and the model registry.

pub mod mesh;
pub mod texture;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::resources::{
    mesh::{unit_cube_mesh, Material, Model},
    texture::Texture,
};

/// Assets are copied next to the build output by the build script.
pub fn asset_path(file_name: &str) -> PathBuf {
    Path::new(env!("OUT_DIR")).join("assets").join(file_name)
}

pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    Ok(std::fs::read(asset_path(file_name))?)
}

/// Which assets a model is built from. Elements naming the same mesh and
/// texture share one registry slot.
pub type ModelKey = (Option<String>, Option<String>);

/// Load the model for one key, substituting fallbacks per missing or broken
/// asset: a unit cube for the geometry, plain white for the material. A bad
/// asset degrades that one model, never the scene around it.
pub async fn load_model(
    key: &ModelKey,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    material_layout: &wgpu::BindGroupLayout,
) -> Model {
    let (model_file, texture_file) = key;

    let meshes = match model_file {
        Some(file) => match mesh::load_meshes_obj(file, device).await {
            Ok(meshes) => meshes,
            Err(e) => {
                log::warn!("mesh {} unavailable ({}), using unit cube", file, e);
                vec![unit_cube_mesh(device)]
            }
        },
        None => vec![unit_cube_mesh(device)],
    };

    let diffuse = match texture_file {
        Some(file) => match load_binary(file)
            .await
            .and_then(|bytes| Texture::from_bytes(device, queue, &bytes, file))
        {
            Ok(texture) => texture,
            Err(e) => {
                log::warn!("texture {} unavailable ({}), using plain white", file, e);
                Texture::create_solid(device, queue, [255; 4], "fallback_white")
            }
        },
        None => Texture::create_solid(device, queue, [255; 4], "plain_white"),
    };

    let name = model_file.as_deref().unwrap_or("unit_cube");
    Model {
        meshes,
        material: Material::new(device, name, diffuse, material_layout),
    }
}

/// Loaded models addressed by slot. Slots are handed out at scene load and
/// stay valid until teardown; nothing is ever evicted mid-run.
#[derive(Default)]
pub struct ModelRegistry {
    models: Vec<Model>,
    slots: HashMap<ModelKey, usize>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: ModelKey, model: Model) -> usize {
        let slot = self.models.len();
        self.models.push(model);
        self.slots.insert(key, slot);
        slot
    }

    pub fn slot_of(&self, key: &ModelKey) -> Option<usize> {
        self.slots.get(key).copied()
    }

    pub fn model(&self, slot: usize) -> &Model {
        &self.models[slot]
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
