//! Selectable index and selection cursor.
//!
//! The selectable index is a filtered, ordered view over the full element
//! list: architectural categories (floor, wall, door, window, ceiling, sky)
//! are excluded, furniture stays in. It is built once at scene load and the
//! relative order always matches the scene file. Hiding an element never
//! removes it from the index; the cursor simply skips hidden entries while
//! ring-scanning.

use std::collections::HashSet;

/// Index into the selectable list. Distinct from [`InstanceIx`]: the two
/// address spaces are related but must never be mixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListPos(pub usize);

/// Index into the full, unfiltered instance list, fixed at scene load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceIx(pub usize);

/// Categories a user can never select. Exact matches cover the room shell,
/// substring matches catch variants like "ceiling_light_fixture" or "skybox".
const DENY_EXACT: &[&str] = &["floor", "wall", "door", "window"];
const DENY_SUBSTRING: &[&str] = &["ceiling", "sky"];

fn denied(id: &str) -> bool {
    let folded = id.to_lowercase();
    DENY_EXACT.iter().any(|category| folded == *category)
        || DENY_SUBSTRING.iter().any(|category| folded.contains(category))
}

/// Label assigned to elements that ship without an id.
pub fn synthetic_label(index: usize) -> String {
    format!("instance_{}", index)
}

#[derive(Clone, Debug)]
pub struct SelectableEntry {
    pub instance: InstanceIx,
    pub id: String,
}

/// The ordered list of user-selectable entries.
#[derive(Clone, Debug, Default)]
pub struct SelectableIndex {
    entries: Vec<SelectableEntry>,
}

impl SelectableIndex {
    /// Build the index from element ids in scene-file order. Elements with an
    /// empty id are included under a synthetic label; denylisted categories
    /// are excluded. Instance indices always refer to positions in the input
    /// list, so filtering never shifts addressing.
    pub fn build<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = ids
            .into_iter()
            .enumerate()
            .filter_map(|(index, id)| {
                let id = id.as_ref();
                let label = if id.is_empty() {
                    synthetic_label(index)
                } else {
                    id.to_string()
                };
                if denied(&label) {
                    None
                } else {
                    Some(SelectableEntry {
                        instance: InstanceIx(index),
                        id: label,
                    })
                }
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, pos: ListPos) -> Option<&SelectableEntry> {
        self.entries.get(pos.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectableEntry> {
        self.entries.iter()
    }
}

/// Cursor over the selectable index. `None` is the deselected state.
///
/// Invariant: whenever the cursor rests on a position, that entry's id is not
/// in the hidden set. [`advance`](Self::advance) is the only way to move the
/// cursor forward and it re-establishes the invariant on every call.
///
/// Deselection comes in two flavours. A full [`clear`](Self::clear) also
/// forgets where the cursor was, so the next scan starts from the front. A
/// [`deselect`](Self::deselect) after hiding keeps the old position as the
/// scan origin, so the next advance continues past the hidden entry instead
/// of restarting the ring.
#[derive(Clone, Debug)]
pub struct SelectionCursor {
    pos: Option<ListPos>,
    /// Where the next scan starts; -1 is the virtual slot before the first
    /// entry.
    origin: isize,
}

impl Default for SelectionCursor {
    fn default() -> Self {
        Self {
            pos: None,
            origin: -1,
        }
    }
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_pos(&self) -> Option<ListPos> {
        self.pos
    }

    /// The selected entry's index into the full instance list.
    pub fn instance(&self, index: &SelectableIndex) -> Option<InstanceIx> {
        self.pos
            .and_then(|pos| index.get(pos))
            .map(|entry| entry.instance)
    }

    pub fn selected_id<'a>(&self, index: &'a SelectableIndex) -> Option<&'a str> {
        self.pos
            .and_then(|pos| index.get(pos))
            .map(|entry| entry.id.as_str())
    }

    pub fn clear(&mut self) {
        self.pos = None;
        self.origin = -1;
    }

    /// Drop the selection but keep the current position as the scan origin.
    pub fn deselect(&mut self) {
        self.pos = None;
    }

    /// Ring-scan to the next entry whose id is not hidden.
    ///
    /// Scans at most `index.len()` steps of `step` (usually +1 or -1) from the
    /// current position, wrapping around. Returns `true` when the cursor lands
    /// on a visible entry. When the index is empty or every entry is hidden
    /// the cursor is cleared and the call reports failure; an invalid positive
    /// position is never produced.
    pub fn advance(
        &mut self,
        index: &SelectableIndex,
        hidden: &HashSet<String>,
        step: isize,
    ) -> bool {
        let n = index.len() as isize;
        if n == 0 {
            self.clear();
            return false;
        }
        let mut pos = self.pos.map_or(self.origin, |p| p.0 as isize);
        for _ in 0..n {
            pos = (pos + step).rem_euclid(n);
            let entry = self.entry_at(index, pos as usize);
            if !hidden.contains(&entry.id) {
                self.pos = Some(ListPos(pos as usize));
                self.origin = pos;
                return true;
            }
        }
        self.clear();
        false
    }

    fn entry_at<'a>(&self, index: &'a SelectableIndex, pos: usize) -> &'a SelectableEntry {
        // pos is always reduced modulo len before use.
        index.get(ListPos(pos)).unwrap()
    }
}
