//! Interaction state machine and edit-mode manipulation.
//!
//! Tracks the current mode (camera vs edit), the selection cursor, the
//! hidden-element set and overlay visibility, and consumes one
//! [`ActionsDown`] sample per frame. All edge detection happens here through
//! the owned [`EdgeTracker`]; the input layer only reports current key state.
//! The manipulation math at the bottom is the transform contract for edit
//! mode: translation composes in world space, rotation and scale in the
//! object's local space.

use std::collections::HashSet;

use cgmath::{Matrix4, Rad, Vector3, Zero};

use crate::{
    input::{Action, ActionsDown, EdgeTracker, InputSample},
    scene::select::{InstanceIx, SelectableIndex, SelectionCursor},
};

/// Whether continuous input drives the camera or the selected instance.
/// Independent of selection: edit mode with nothing selected is legal and
/// simply manipulates nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Camera,
    Edit,
}

/// What a frame's discrete actions changed; the frame updater uses this to
/// refresh the overlay and honour quit/reset requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct EditorFeedback {
    pub quit: bool,
    pub mode_changed: bool,
    pub selection_changed: bool,
    pub visibility_changed: bool,
    pub overlay_toggled: bool,
    pub reset_requested: Option<InstanceIx>,
}

pub struct EditorState {
    pub mode: Mode,
    pub cursor: SelectionCursor,
    pub hidden: HashSet<String>,
    pub overlay_visible: bool,
    edges: EdgeTracker,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Camera,
            cursor: SelectionCursor::new(),
            hidden: HashSet::new(),
            overlay_visible: true,
            edges: EdgeTracker::default(),
        }
    }

    /// Advance the state machine by one frame of discrete input. Each action
    /// fires at most once per press; holding a key does nothing after its
    /// first sample.
    pub fn apply_actions(
        &mut self,
        index: &SelectableIndex,
        down: &ActionsDown,
    ) -> EditorFeedback {
        let mut feedback = EditorFeedback::default();

        if self.edges.rising(Action::Quit, down.quit) {
            feedback.quit = true;
        }
        if self.edges.rising(Action::ToggleMode, down.toggle_mode) {
            self.mode = match self.mode {
                Mode::Camera => Mode::Edit,
                Mode::Edit => Mode::Camera,
            };
            feedback.mode_changed = true;
        }
        if self.edges.rising(Action::SelectNext, down.select_next) {
            self.cursor.advance(index, &self.hidden, 1);
            feedback.selection_changed = true;
        }
        if self.edges.rising(Action::SelectPrev, down.select_prev) {
            self.cursor.advance(index, &self.hidden, -1);
            feedback.selection_changed = true;
        }
        if self.edges.rising(Action::ToggleHide, down.toggle_hide) && self.mode == Mode::Edit {
            self.toggle_hidden(index, &mut feedback);
        }
        if self.edges.rising(Action::ToggleOverlay, down.toggle_overlay) {
            self.overlay_visible = !self.overlay_visible;
            feedback.overlay_toggled = true;
        }
        if self.edges.rising(Action::ResetTransform, down.reset) && self.mode == Mode::Edit {
            feedback.reset_requested = self.cursor.instance(index);
        }

        feedback
    }

    /// Hide the selected element, or unhide it when already hidden. Hiding
    /// deselects so an invisible object cannot keep being manipulated, but
    /// the cursor keeps its scan origin: the next advance continues past the
    /// hidden entry rather than restarting at the front. Unhiding leaves the
    /// cursor where it is. Keyed by id, so duplicate ids toggle together.
    fn toggle_hidden(&mut self, index: &SelectableIndex, feedback: &mut EditorFeedback) {
        let Some(id) = self.cursor.selected_id(index) else {
            return;
        };
        if self.hidden.contains(id) {
            self.hidden.remove(id);
        } else {
            self.hidden.insert(id.to_string());
            self.cursor.deselect();
            feedback.selection_changed = true;
        }
        feedback.visibility_changed = true;
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden.contains(id)
    }
}

/// Units per second in edit mode, before the fast boost.
pub const MOVE_RATE: f32 = 2.5;
/// Radians per second in edit mode.
pub const ROTATE_RATE: f32 = 1.2;
/// Base of the exponential scale step: one second of held input doubles.
pub const SCALE_BASE: f32 = 2.0;
/// Multiplier applied to all rates while the fast modifier is held.
pub const FAST_FACTOR: f32 = 3.0;

/// Compose one frame of manipulation input onto a local-to-world transform.
///
/// Translation pre-multiplies, so held movement keys slide the object along
/// the world axes no matter how it is oriented. Rotation and scale
/// post-multiply, so they pivot around the object's own origin in its own
/// current orientation. Swapping either side changes user-visible behaviour:
/// pre-multiplied rotation would orbit the world origin instead of spinning
/// in place. Scale steps as `base^(dt * axis)`, which composes identically
/// across frame-rate splits.
pub fn apply_manipulation(transform: &mut Matrix4<f32>, sample: &InputSample) {
    let boost = if sample.fast { FAST_FACTOR } else { 1.0 };

    if !sample.move_axes.is_zero() {
        let delta = sample.move_axes * MOVE_RATE * boost * sample.dt;
        *transform = Matrix4::from_translation(delta) * *transform;
    }

    let angle = Rad(ROTATE_RATE * boost * sample.dt);
    let rotate: Vector3<f32> = sample.rotate_axes;
    if rotate.x != 0.0 {
        *transform = *transform * Matrix4::from_angle_x(angle * rotate.x);
    }
    if rotate.y != 0.0 {
        *transform = *transform * Matrix4::from_angle_y(angle * rotate.y);
    }
    if rotate.z != 0.0 {
        *transform = *transform * Matrix4::from_angle_z(angle * rotate.z);
    }

    if sample.scale_axis != 0.0 {
        let factor = SCALE_BASE.powf(sample.dt * boost * sample.scale_axis);
        *transform = *transform * Matrix4::from_scale(factor);
    }
}
