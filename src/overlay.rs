//! Status overlay abstraction.
//!
//! The viewer reports mode, selection and key help through a small print
//! surface instead of drawing text itself. The default sink composes the
//! slots into the window title; a logging sink exists for headless runs.

use std::{collections::BTreeMap, sync::Arc};

use winit::window::Window;

/// Fixed overlay lines, ordered as displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum OverlaySlot {
    Mode,
    Selection,
    Help,
}

pub trait Overlay {
    /// Replace the text of one slot. An empty string clears it.
    fn print(&mut self, slot: OverlaySlot, text: &str);
    /// Push the current slot contents to wherever they are shown.
    fn flush(&mut self, visible: bool);
}

/// Shows the overlay as ` | `-joined slots in the window title.
pub struct TitleOverlay {
    window: Arc<Window>,
    base_title: String,
    slots: BTreeMap<OverlaySlot, String>,
}

impl TitleOverlay {
    pub fn new(window: Arc<Window>) -> Self {
        let base_title = window.title();
        Self {
            window,
            base_title,
            slots: BTreeMap::new(),
        }
    }
}

impl Overlay for TitleOverlay {
    fn print(&mut self, slot: OverlaySlot, text: &str) {
        if text.is_empty() {
            self.slots.remove(&slot);
        } else {
            self.slots.insert(slot, text.to_string());
        }
    }

    fn flush(&mut self, visible: bool) {
        if !visible || self.slots.is_empty() {
            self.window.set_title(&self.base_title);
            return;
        }
        let status = self
            .slots
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" | ");
        self.window.set_title(&format!("{} | {}", self.base_title, status));
    }
}

/// Logs slot changes instead of displaying them. Used by headless tests and
/// available behind a flag for debugging.
#[derive(Default)]
pub struct LogOverlay {
    slots: BTreeMap<OverlaySlot, String>,
}

impl LogOverlay {
    pub fn text(&self, slot: OverlaySlot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }
}

impl Overlay for LogOverlay {
    fn print(&mut self, slot: OverlaySlot, text: &str) {
        if text.is_empty() {
            self.slots.remove(&slot);
        } else {
            self.slots.insert(slot, text.to_string());
        }
    }

    fn flush(&mut self, visible: bool) {
        if !visible {
            return;
        }
        for (slot, text) in &self.slots {
            log::info!("overlay {:?}: {}", slot, text);
        }
    }
}
