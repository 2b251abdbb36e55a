//! Scene state: instances, selection and the model registry.

pub mod description;
pub mod select;
pub mod store;

use futures::future::join_all;

use crate::{
    context::Context,
    editor::EditorState,
    resources::{load_model, ModelKey, ModelRegistry},
    scene::{description::SceneDescription, select::SelectableIndex, store::InstanceStore},
};

/// Everything about the room that outlives a frame.
pub struct SceneState {
    pub store: InstanceStore,
    pub selectable: SelectableIndex,
    pub editor: EditorState,
    pub models: ModelRegistry,
}

impl SceneState {
    /// Assemble the scene from a parsed description: load every distinct
    /// mesh/texture pair, build the instance store in file order and derive
    /// the selectable index from it.
    pub async fn assemble(description: &SceneDescription, ctx: &Context) -> Self {
        let mut keys: Vec<ModelKey> = Vec::new();
        for element in &description.elements {
            let key = (element.model.clone(), element.texture.clone());
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        let loaded = join_all(
            keys.iter()
                .map(|key| load_model(key, &ctx.device, &ctx.queue, &ctx.material_layout)),
        )
        .await;

        let mut models = ModelRegistry::new();
        for (key, model) in keys.into_iter().zip(loaded) {
            models.insert(key, model);
        }

        let mut store = InstanceStore::build(description, |index| {
            let element = &description.elements[index];
            let key = (element.model.clone(), element.texture.clone());
            // Every element's key was loaded above.
            models.slot_of(&key).unwrap_or_default()
        });
        store.init_gpu(&ctx.device, &ctx.instance_layout);

        let selectable = SelectableIndex::build(store.ids());
        log::info!(
            "scene assembled: {} instances, {} selectable, {} models",
            store.len(),
            selectable.len(),
            models.len()
        );

        Self {
            store,
            selectable,
            editor: EditorState::new(),
            models,
        }
    }
}
