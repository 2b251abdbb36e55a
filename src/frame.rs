//! Per-frame update: input, state machine, uniform publishing, overlay.
//!
//! One `advance` call prepares exactly one frame slot; `end_frame` moves to
//! the next slot after the frame's draw commands are submitted. The order
//! inside `advance` is fixed: discrete actions first, then continuous input,
//! then uniform publishing, so the uniforms written for a slot always show
//! the state the same frame's draws expect.

use crate::{
    binding::{FrameSlot, GlobalUniform, InstanceUniform},
    context::Context,
    editor::{self, Mode},
    input::KeyboardState,
    overlay::{Overlay, OverlaySlot},
    scene::SceneState,
};

const HELP_LINE: &str = "N/P select  M mode  H hide  X reset  O overlay  Esc quit";

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameOutcome {
    pub quit: bool,
}

pub struct FrameUpdater {
    slot: FrameSlot,
    overlay_dirty: bool,
}

impl Default for FrameUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameUpdater {
    pub fn new() -> Self {
        Self {
            slot: FrameSlot(0),
            overlay_dirty: true,
        }
    }

    pub fn slot(&self) -> FrameSlot {
        self.slot
    }

    /// Prepare the current frame slot from one keyboard sample.
    pub fn advance(
        &mut self,
        ctx: &mut Context,
        scene: &mut SceneState,
        keyboard: &KeyboardState,
        overlay: &mut dyn Overlay,
        dt: f32,
    ) -> FrameOutcome {
        let feedback = scene
            .editor
            .apply_actions(&scene.selectable, &keyboard.actions());

        if let Some(ix) = feedback.reset_requested {
            scene.store.reset_transform(ix);
        }

        let sample = keyboard.sample(dt);
        match scene.editor.mode {
            Mode::Camera => ctx.controller.update(&mut ctx.camera, &sample),
            Mode::Edit => {
                if let Some(ix) = scene.editor.cursor.instance(&scene.selectable) {
                    editor::apply_manipulation(&mut scene.store.get_mut(ix).transform, &sample);
                }
            }
        }

        ctx.global.publish(
            &ctx.queue,
            self.slot,
            &GlobalUniform::new(
                &ctx.camera,
                &ctx.projection,
                ctx.light_position,
                ctx.light_color,
            ),
        );

        let selected = scene.editor.cursor.instance(&scene.selectable);
        for (index, instance) in scene.store.instances().iter().enumerate() {
            let Some(binding) = &instance.binding else {
                continue;
            };
            let highlight = selected.is_some_and(|ix| ix.0 == index);
            let visible = !scene.editor.is_hidden(&instance.id);
            binding.publish(
                &ctx.queue,
                self.slot,
                &InstanceUniform::new(&instance.transform, instance.tint, highlight, visible),
            );
        }

        if feedback.mode_changed
            || feedback.selection_changed
            || feedback.visibility_changed
            || feedback.overlay_toggled
        {
            self.overlay_dirty = true;
        }
        if self.overlay_dirty {
            self.refresh_overlay(scene, overlay);
            self.overlay_dirty = false;
        }

        FrameOutcome {
            quit: feedback.quit,
        }
    }

    fn refresh_overlay(&self, scene: &SceneState, overlay: &mut dyn Overlay) {
        let mode = match scene.editor.mode {
            Mode::Camera => "mode: camera",
            Mode::Edit => "mode: edit",
        };
        overlay.print(OverlaySlot::Mode, mode);
        match scene.editor.cursor.selected_id(&scene.selectable) {
            Some(id) => overlay.print(OverlaySlot::Selection, &format!("selected: {}", id)),
            None => overlay.print(OverlaySlot::Selection, "no selection"),
        }
        overlay.print(OverlaySlot::Help, HELP_LINE);
        overlay.flush(scene.editor.overlay_visible);
    }

    /// Called after the frame's commands are submitted.
    pub fn end_frame(&mut self) {
        self.slot = self.slot.next();
    }
}
