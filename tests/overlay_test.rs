use roomflow::overlay::{LogOverlay, Overlay, OverlaySlot};

#[test]
fn slots_hold_the_latest_text_and_clear_on_empty() {
    let mut overlay = LogOverlay::default();
    overlay.print(OverlaySlot::Mode, "mode: camera");
    overlay.print(OverlaySlot::Selection, "selected: bed");
    assert_eq!(overlay.text(OverlaySlot::Mode), Some("mode: camera"));

    overlay.print(OverlaySlot::Mode, "mode: edit");
    assert_eq!(overlay.text(OverlaySlot::Mode), Some("mode: edit"));

    overlay.print(OverlaySlot::Selection, "");
    assert_eq!(overlay.text(OverlaySlot::Selection), None);
    overlay.flush(true);
}
