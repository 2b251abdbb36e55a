use roomflow::{
    input::{Action, ActionsDown, EdgeTracker},
    scene::select::{InstanceIx, SelectableIndex},
    EditorState, Mode,
};

fn furniture() -> SelectableIndex {
    SelectableIndex::build(["chair", "bed", "table", "lamp"])
}

fn released() -> ActionsDown {
    ActionsDown::default()
}

#[test]
fn edge_tracker_fires_once_per_press() {
    let mut edges = EdgeTracker::default();
    assert!(edges.rising(Action::ToggleMode, true));
    assert!(!edges.rising(Action::ToggleMode, true));
    assert!(!edges.rising(Action::ToggleMode, false));
    assert!(edges.rising(Action::ToggleMode, true));
}

#[test]
fn holding_select_does_not_keep_advancing() {
    let index = furniture();
    let mut editor = EditorState::new();
    let held = ActionsDown {
        select_next: true,
        ..released()
    };
    editor.apply_actions(&index, &held);
    editor.apply_actions(&index, &held);
    editor.apply_actions(&index, &held);
    assert_eq!(editor.cursor.selected_id(&index), Some("chair"));
}

#[test]
fn mode_toggles_and_selection_survives_the_switch() {
    let index = furniture();
    let mut editor = EditorState::new();
    assert_eq!(editor.mode, Mode::Camera);

    editor.apply_actions(
        &index,
        &ActionsDown {
            select_next: true,
            ..released()
        },
    );
    editor.apply_actions(&index, &released());

    let feedback = editor.apply_actions(
        &index,
        &ActionsDown {
            toggle_mode: true,
            ..released()
        },
    );
    assert!(feedback.mode_changed);
    assert_eq!(editor.mode, Mode::Edit);
    assert_eq!(editor.cursor.selected_id(&index), Some("chair"));

    editor.apply_actions(&index, &released());
    editor.apply_actions(
        &index,
        &ActionsDown {
            toggle_mode: true,
            ..released()
        },
    );
    assert_eq!(editor.mode, Mode::Camera);
}

#[test]
fn hide_is_ignored_in_camera_mode() {
    let index = furniture();
    let mut editor = EditorState::new();
    editor.apply_actions(
        &index,
        &ActionsDown {
            select_next: true,
            ..released()
        },
    );
    editor.apply_actions(&index, &released());

    let feedback = editor.apply_actions(
        &index,
        &ActionsDown {
            toggle_hide: true,
            ..released()
        },
    );
    assert!(!feedback.visibility_changed);
    assert!(editor.hidden.is_empty());
    assert_eq!(editor.cursor.selected_id(&index), Some("chair"));
}

fn select_and_enter_edit(editor: &mut EditorState, index: &SelectableIndex, presses: usize) {
    for _ in 0..presses {
        editor.apply_actions(
            index,
            &ActionsDown {
                select_next: true,
                ..released()
            },
        );
        editor.apply_actions(index, &released());
    }
    editor.apply_actions(
        index,
        &ActionsDown {
            toggle_mode: true,
            ..released()
        },
    );
    editor.apply_actions(index, &released());
}

#[test]
fn hide_deselects_and_the_scan_resumes_past_the_hidden_piece() {
    let index = furniture();
    let mut editor = EditorState::new();
    select_and_enter_edit(&mut editor, &index, 2);
    assert_eq!(editor.cursor.selected_id(&index), Some("bed"));

    let feedback = editor.apply_actions(
        &index,
        &ActionsDown {
            toggle_hide: true,
            ..released()
        },
    );
    assert!(feedback.visibility_changed);
    assert!(editor.is_hidden("bed"));
    assert_eq!(editor.cursor.list_pos(), None);
    editor.apply_actions(&index, &released());

    // The scan continues from where the hidden bed was, not from the front.
    editor.apply_actions(
        &index,
        &ActionsDown {
            select_next: true,
            ..released()
        },
    );
    assert_eq!(editor.cursor.selected_id(&index), Some("table"));
    editor.apply_actions(&index, &released());
    editor.apply_actions(
        &index,
        &ActionsDown {
            select_next: true,
            ..released()
        },
    );
    assert_eq!(editor.cursor.selected_id(&index), Some("lamp"));
}

#[test]
fn unhide_keeps_the_current_cursor() {
    let index = furniture();
    let mut editor = EditorState::new();
    select_and_enter_edit(&mut editor, &index, 1);
    assert_eq!(editor.cursor.selected_id(&index), Some("chair"));

    // Hide the selected piece from outside the cursor's own toggle, then let
    // the hide action run as an unhide.
    editor.hidden.insert("chair".to_string());
    let feedback = editor.apply_actions(
        &index,
        &ActionsDown {
            toggle_hide: true,
            ..released()
        },
    );
    assert!(feedback.visibility_changed);
    assert!(!editor.is_hidden("chair"));
    assert_eq!(editor.cursor.selected_id(&index), Some("chair"));
}

#[test]
fn duplicate_ids_toggle_visibility_together() {
    let index = SelectableIndex::build(["chair", "chair", "bed"]);
    let mut editor = EditorState::new();
    select_and_enter_edit(&mut editor, &index, 1);
    editor.apply_actions(
        &index,
        &ActionsDown {
            toggle_hide: true,
            ..released()
        },
    );
    editor.apply_actions(&index, &released());
    assert!(editor.is_hidden("chair"));

    // Both chair entries are skipped by the scan.
    editor.apply_actions(
        &index,
        &ActionsDown {
            select_next: true,
            ..released()
        },
    );
    assert_eq!(editor.cursor.selected_id(&index), Some("bed"));
}

#[test]
fn reset_is_requested_only_in_edit_mode_with_a_selection() {
    let index = furniture();
    let mut editor = EditorState::new();

    // Camera mode: nothing happens.
    let feedback = editor.apply_actions(
        &index,
        &ActionsDown {
            reset: true,
            ..released()
        },
    );
    assert_eq!(feedback.reset_requested, None);
    editor.apply_actions(&index, &released());

    // Edit mode without a selection: still nothing.
    editor.apply_actions(
        &index,
        &ActionsDown {
            toggle_mode: true,
            ..released()
        },
    );
    editor.apply_actions(&index, &released());
    let feedback = editor.apply_actions(
        &index,
        &ActionsDown {
            reset: true,
            ..released()
        },
    );
    assert_eq!(feedback.reset_requested, None);
    editor.apply_actions(&index, &released());

    // Edit mode with a selection: the selected instance index comes back.
    editor.apply_actions(
        &index,
        &ActionsDown {
            select_next: true,
            ..released()
        },
    );
    editor.apply_actions(&index, &released());
    let feedback = editor.apply_actions(
        &index,
        &ActionsDown {
            reset: true,
            ..released()
        },
    );
    assert_eq!(feedback.reset_requested, Some(InstanceIx(0)));
}

#[test]
fn quit_and_overlay_toggle_are_edge_triggered() {
    let index = furniture();
    let mut editor = EditorState::new();
    assert!(editor.overlay_visible);

    let held = ActionsDown {
        toggle_overlay: true,
        ..released()
    };
    let feedback = editor.apply_actions(&index, &held);
    assert!(feedback.overlay_toggled);
    assert!(!editor.overlay_visible);
    let feedback = editor.apply_actions(&index, &held);
    assert!(!feedback.overlay_toggled);

    let feedback = editor.apply_actions(
        &index,
        &ActionsDown {
            quit: true,
            ..released()
        },
    );
    assert!(feedback.quit);
}
