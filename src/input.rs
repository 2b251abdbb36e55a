//! Keyboard sampling and edge detection.
//!
//! Input is non-blocking sampling of current key state, not an event queue:
//! the window layer folds winit key events into a [`KeyboardState`], and the
//! frame update samples it once per frame. Edge detection (press transitions)
//! is done by whoever consumes an action, through an [`EdgeTracker`] that
//! persists last-known state per action. There is deliberately no global
//! "previous key" state anywhere; injecting synthetic [`ActionsDown`]
//! sequences drives the whole interaction logic in tests.

use std::collections::{HashMap, HashSet};

use cgmath::Vector3;
use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// Discrete, edge-triggered user actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    SelectNext,
    SelectPrev,
    ToggleMode,
    ToggleHide,
    ToggleOverlay,
    ResetTransform,
    Quit,
}

/// Last-known pressed state per action, for press-transition detection.
#[derive(Debug, Default)]
pub struct EdgeTracker {
    last: HashMap<Action, bool>,
}

impl EdgeTracker {
    /// True exactly once per press: when `down` is true and the previous
    /// sample for this action was false. Holding a key reports no further
    /// edges until it is released and pressed again.
    pub fn rising(&mut self, action: Action, down: bool) -> bool {
        let was = self.last.insert(action, down).unwrap_or(false);
        down && !was
    }
}

/// Current pressed state of every discrete action, sampled once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionsDown {
    pub select_next: bool,
    pub select_prev: bool,
    pub toggle_mode: bool,
    pub toggle_hide: bool,
    pub toggle_overlay: bool,
    pub reset: bool,
    pub quit: bool,
}

/// Continuous input for one frame: time step, movement and rotation axes,
/// a scale axis and the fast modifier.
#[derive(Clone, Copy, Debug)]
pub struct InputSample {
    pub dt: f32,
    /// x = right/left, y = up/down, z = forward/backward.
    pub move_axes: Vector3<f32>,
    /// x = pitch, y = yaw, z = roll.
    pub rotate_axes: Vector3<f32>,
    pub scale_axis: f32,
    pub fast: bool,
}

impl InputSample {
    pub fn still(dt: f32) -> Self {
        Self {
            dt,
            move_axes: Vector3::new(0.0, 0.0, 0.0),
            rotate_axes: Vector3::new(0.0, 0.0, 0.0),
            scale_axis: 0.0,
            fast: false,
        }
    }
}

/// Boolean-per-key view over the winit event stream.
#[derive(Debug, Default)]
pub struct KeyboardState {
    down: HashSet<KeyCode>,
}

fn axis(positive: bool, negative: bool) -> f32 {
    (positive as i32 - negative as i32) as f32
}

impl KeyboardState {
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state,
                    ..
                },
            ..
        } = event
        {
            match state {
                ElementState::Pressed => {
                    self.down.insert(*code);
                }
                ElementState::Released => {
                    self.down.remove(code);
                }
            }
        }
    }

    pub fn is_down(&self, code: KeyCode) -> bool {
        self.down.contains(&code)
    }

    pub fn actions(&self) -> ActionsDown {
        ActionsDown {
            select_next: self.is_down(KeyCode::KeyN),
            select_prev: self.is_down(KeyCode::KeyP),
            toggle_mode: self.is_down(KeyCode::KeyM),
            toggle_hide: self.is_down(KeyCode::KeyH),
            toggle_overlay: self.is_down(KeyCode::KeyO),
            reset: self.is_down(KeyCode::KeyX),
            quit: self.is_down(KeyCode::Escape),
        }
    }

    pub fn sample(&self, dt: f32) -> InputSample {
        InputSample {
            dt,
            move_axes: Vector3::new(
                axis(self.is_down(KeyCode::KeyD), self.is_down(KeyCode::KeyA)),
                axis(self.is_down(KeyCode::KeyR), self.is_down(KeyCode::KeyF)),
                axis(self.is_down(KeyCode::KeyW), self.is_down(KeyCode::KeyS)),
            ),
            rotate_axes: Vector3::new(
                axis(
                    self.is_down(KeyCode::ArrowUp),
                    self.is_down(KeyCode::ArrowDown),
                ),
                axis(
                    self.is_down(KeyCode::ArrowLeft),
                    self.is_down(KeyCode::ArrowRight),
                ),
                axis(self.is_down(KeyCode::KeyQ), self.is_down(KeyCode::KeyE)),
            ),
            scale_axis: axis(
                self.is_down(KeyCode::Equal),
                self.is_down(KeyCode::Minus),
            ),
            fast: self.is_down(KeyCode::ShiftLeft) || self.is_down(KeyCode::ShiftRight),
        }
    }
}
