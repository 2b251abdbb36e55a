//! roomflow
//!
//! An interactive viewer and editor for furnished 3D rooms. A JSON scene
//! description places textured meshes in a room; at runtime the user flies a
//! camera through it, cycles a selection over the furniture, hides pieces and
//! manipulates the selected one with translation, rotation and scale.
//!
//! High-level modules
//! - `app`: window lifecycle and the main event loop
//! - `binding`: per-frame uniform buffer rings and bind groups
//! - `camera`: fly camera, projection and controller
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `editor`: interaction state machine and edit-mode manipulation
//! - `frame`: per-frame update and uniform publishing
//! - `input`: keyboard sampling and edge detection
//! - `overlay`: status text sinks (window title, log)
//! - `pipelines`: render pipeline definitions per technique
//! - `resources`: asset loading, textures, meshes and the model registry
//! - `scene`: scene description, instance store and selection

pub mod app;
pub mod binding;
pub mod camera;
pub mod context;
pub mod editor;
pub mod frame;
pub mod input;
pub mod overlay;
pub mod pipelines;
pub mod resources;
pub mod scene;

pub use editor::{EditorState, Mode};
pub use scene::{
    description::SceneDescription,
    select::{InstanceIx, ListPos, SelectableIndex, SelectionCursor},
    store::InstanceStore,
};
