//! Instance store and technique grouping.
//!
//! Every placed element becomes exactly one [`Instance`] at scene load;
//! load order is the addressing scheme and is never reordered or compacted
//! afterwards. Instances are grouped by rendering technique. Only the mesh
//! technique exists today, but the set is a closed tagged variant so adding
//! one means adding a pipeline and a match arm, not a class hierarchy.

use cgmath::Matrix4;

use crate::{
    binding::InstanceBinding,
    scene::{
        description::SceneDescription,
        select::{synthetic_label, InstanceIx},
    },
};

/// Closed set of rendering techniques known at scene-load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TechniqueKind {
    Mesh,
}

/// Instances sharing one pipeline and descriptor layout, in load order.
#[derive(Debug)]
pub struct TechniqueGroup {
    pub kind: TechniqueKind,
    pub members: Vec<InstanceIx>,
}

/// One placed, transformable copy of a mesh in the room.
pub struct Instance {
    pub id: String,
    pub transform: Matrix4<f32>,
    /// Transform captured at load, restored by the reset action.
    pub home_transform: Matrix4<f32>,
    pub tint: [f32; 4],
    /// Slot into the model registry.
    pub model: usize,
    /// Per-frame-slot uniform ring; `None` until GPU init.
    pub binding: Option<InstanceBinding>,
}

/// Owns all instances for the run. Indices handed out at load stay valid
/// until teardown.
#[derive(Default)]
pub struct InstanceStore {
    instances: Vec<Instance>,
    groups: Vec<TechniqueGroup>,
}

impl InstanceStore {
    /// Build the store from a parsed description. `model_of` resolves each
    /// element to a registry slot; keeping it a callback keeps this GPU-free.
    pub fn build(
        description: &SceneDescription,
        mut model_of: impl FnMut(usize) -> usize,
    ) -> Self {
        let instances: Vec<Instance> = description
            .elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                let id = if element.id.is_empty() {
                    synthetic_label(index)
                } else {
                    element.id.clone()
                };
                let transform = element.transform();
                Instance {
                    id,
                    transform,
                    home_transform: transform,
                    tint: element.tint,
                    model: model_of(index),
                    binding: None,
                }
            })
            .collect();
        let members = (0..instances.len()).map(InstanceIx).collect();
        Self {
            instances,
            groups: vec![TechniqueGroup {
                kind: TechniqueKind::Mesh,
                members,
            }],
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Index must come from this store's load-time addressing. Out-of-range
    /// indices are a caller bug, not a recoverable condition.
    pub fn get(&self, ix: InstanceIx) -> &Instance {
        &self.instances[ix.0]
    }

    pub fn get_mut(&mut self, ix: InstanceIx) -> &mut Instance {
        &mut self.instances[ix.0]
    }

    /// In-place transform write. The matrix is taken as-is; nothing checks it
    /// for well-formedness.
    pub fn set_transform(&mut self, ix: InstanceIx, transform: Matrix4<f32>) {
        self.instances[ix.0].transform = transform;
    }

    pub fn reset_transform(&mut self, ix: InstanceIx) {
        let instance = &mut self.instances[ix.0];
        instance.transform = instance.home_transform;
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.instances.iter().map(|instance| instance.id.as_str())
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn instances_mut(&mut self) -> &mut [Instance] {
        &mut self.instances
    }

    pub fn groups(&self) -> &[TechniqueGroup] {
        &self.groups
    }

    /// Create each instance's uniform ring. Called once after the GPU context
    /// is up; every instance owns its slots for the rest of the run.
    pub fn init_gpu(&mut self, device: &wgpu::Device, layout: &wgpu::BindGroupLayout) {
        for instance in &mut self.instances {
            instance.binding = Some(InstanceBinding::new(device, layout, &instance.id));
        }
    }
}
