use std::collections::HashSet;

use roomflow::scene::select::{InstanceIx, ListPos, SelectableIndex, SelectionCursor};

fn index_of(ids: &[&str]) -> SelectableIndex {
    SelectableIndex::build(ids.iter().copied())
}

#[test]
fn denylist_filters_architecture_and_keeps_file_order() {
    let index = index_of(&["floor", "chair", "wall", "bed"]);
    let entries: Vec<_> = index
        .iter()
        .map(|entry| (entry.id.as_str(), entry.instance))
        .collect();
    assert_eq!(entries, vec![("chair", InstanceIx(1)), ("bed", InstanceIx(3))]);
}

#[test]
fn denylist_is_case_folded_and_substring_variants_are_caught() {
    let index = index_of(&["Floor", "ceiling_light_fixture", "skybox", "WALL", "sofa"]);
    assert_eq!(index.len(), 1);
    assert_eq!(index.get(ListPos(0)).unwrap().id, "sofa");
}

#[test]
fn empty_ids_get_synthetic_labels_at_their_file_position() {
    let index = index_of(&["", "bed", ""]);
    let ids: Vec<_> = index.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, vec!["instance_0", "bed", "instance_2"]);
    assert_eq!(index.get(ListPos(2)).unwrap().instance, InstanceIx(2));
}

#[test]
fn next_from_deselected_starts_at_the_first_entry() {
    let index = index_of(&["a", "b", "c"]);
    let mut cursor = SelectionCursor::new();
    assert!(cursor.advance(&index, &HashSet::new(), 1));
    assert_eq!(cursor.list_pos(), Some(ListPos(0)));
}

#[test]
fn prev_from_deselected_lands_second_from_last() {
    // The deselected state scans from the virtual position before the first
    // entry, so one backward step wraps to len - 2.
    let index = index_of(&["a", "b", "c", "d", "e"]);
    let mut cursor = SelectionCursor::new();
    assert!(cursor.advance(&index, &HashSet::new(), -1));
    assert_eq!(cursor.list_pos(), Some(ListPos(3)));
}

#[test]
fn next_wraps_around_the_ring() {
    let index = index_of(&["a", "b", "c"]);
    let mut cursor = SelectionCursor::new();
    let hidden = HashSet::new();
    for _ in 0..3 {
        cursor.advance(&index, &hidden, 1);
    }
    assert_eq!(cursor.list_pos(), Some(ListPos(2)));
    cursor.advance(&index, &hidden, 1);
    assert_eq!(cursor.list_pos(), Some(ListPos(0)));
}

#[test]
fn next_then_prev_returns_to_the_same_entry() {
    let index = index_of(&["a", "b", "c", "d"]);
    let mut cursor = SelectionCursor::new();
    let hidden = HashSet::new();
    cursor.advance(&index, &hidden, 1);
    cursor.advance(&index, &hidden, 1);
    let pos = cursor.list_pos();
    cursor.advance(&index, &hidden, 1);
    cursor.advance(&index, &hidden, -1);
    assert_eq!(cursor.list_pos(), pos);
}

#[test]
fn hidden_entries_are_skipped_in_both_directions() {
    let index = index_of(&["chair", "bed", "table"]);
    let hidden: HashSet<String> = ["bed".to_string()].into();
    let mut cursor = SelectionCursor::new();
    cursor.advance(&index, &hidden, 1);
    assert_eq!(cursor.selected_id(&index), Some("chair"));
    cursor.advance(&index, &hidden, 1);
    assert_eq!(cursor.selected_id(&index), Some("table"));
    cursor.advance(&index, &hidden, -1);
    assert_eq!(cursor.selected_id(&index), Some("chair"));
}

#[test]
fn all_hidden_clears_the_cursor_and_reports_failure() {
    let index = index_of(&["a", "b"]);
    let hidden: HashSet<String> = ["a".to_string(), "b".to_string()].into();
    let mut cursor = SelectionCursor::new();
    assert!(!cursor.advance(&index, &hidden, 1));
    assert_eq!(cursor.list_pos(), None);
}

#[test]
fn empty_index_never_yields_a_selection() {
    let index = index_of(&[]);
    let mut cursor = SelectionCursor::new();
    assert!(!cursor.advance(&index, &HashSet::new(), 1));
    assert!(!cursor.advance(&index, &HashSet::new(), -1));
    assert_eq!(cursor.list_pos(), None);
    assert_eq!(cursor.instance(&index), None);
}

#[test]
fn hiding_the_current_entry_resumes_the_scan_past_it() {
    let index = index_of(&["chair", "bed", "chair2", "bed2", "cabinet"]);
    let mut hidden = HashSet::new();
    let mut cursor = SelectionCursor::new();
    cursor.advance(&index, &hidden, 1);
    cursor.advance(&index, &hidden, 1);
    assert_eq!(cursor.selected_id(&index), Some("bed"));

    hidden.insert("bed".to_string());
    cursor.deselect();
    assert_eq!(cursor.list_pos(), None);

    cursor.advance(&index, &hidden, 1);
    assert_eq!(cursor.list_pos(), Some(ListPos(2)));
    assert_eq!(cursor.selected_id(&index), Some("chair2"));
}

#[test]
fn clear_forgets_the_scan_origin() {
    let index = index_of(&["a", "b", "c"]);
    let hidden = HashSet::new();
    let mut cursor = SelectionCursor::new();
    cursor.advance(&index, &hidden, 1);
    cursor.advance(&index, &hidden, 1);
    cursor.clear();
    cursor.advance(&index, &hidden, 1);
    assert_eq!(cursor.list_pos(), Some(ListPos(0)));
}

#[test]
fn five_element_walk_visits_every_entry_once_per_lap() {
    let index = index_of(&["a", "b", "c", "d", "e"]);
    let hidden = HashSet::new();
    let mut cursor = SelectionCursor::new();
    let mut visited = Vec::new();
    for _ in 0..5 {
        cursor.advance(&index, &hidden, 1);
        visited.push(cursor.list_pos().unwrap().0);
    }
    assert_eq!(visited, vec![0, 1, 2, 3, 4]);
}
