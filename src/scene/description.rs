//! Declarative scene-description file.
//!
//! A room is described by a JSON document with a single `elements` list. Each
//! element carries at least an `id`; everything else (mesh, texture, placement)
//! is optional. Load order defines instance indexing for the lifetime of the
//! run, so the list is never reordered after parsing.

use std::{fs, path::Path};

use cgmath::{Deg, Matrix4};
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub elements: Vec<ElementDescription>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ElementDescription {
    #[serde(default)]
    pub id: String,
    /// OBJ file under the assets directory. Absent means a unit cube.
    #[serde(default)]
    pub model: Option<String>,
    /// Diffuse texture file. Absent means plain white, coloured by `tint`.
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default = "default_tint")]
    pub tint: [f32; 4],
    #[serde(default)]
    pub position: [f32; 3],
    /// Euler rotation in degrees, applied as X then Y then Z.
    #[serde(default)]
    pub rotation_deg: [f32; 3],
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
}

fn default_tint() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl ElementDescription {
    /// Local-to-world transform the element starts the run with.
    pub fn transform(&self) -> Matrix4<f32> {
        let [x, y, z] = self.position;
        let [rx, ry, rz] = self.rotation_deg;
        let [sx, sy, sz] = self.scale;
        Matrix4::from_translation([x, y, z].into())
            * Matrix4::from_angle_z(Deg(rz))
            * Matrix4::from_angle_y(Deg(ry))
            * Matrix4::from_angle_x(Deg(rx))
            * Matrix4::from_nonuniform_scale(sx, sy, sz)
    }
}

impl SceneDescription {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// A missing or malformed scene file degrades to an empty room instead of
    /// failing the whole load; selection then reports "no selectable objects".
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(description) => description,
            Err(e) => {
                log::info!(
                    "scene description {} unavailable ({}), starting with an empty room",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
