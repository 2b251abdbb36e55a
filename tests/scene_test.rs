use std::path::Path;

use cgmath::{Matrix4, Vector4};
use roomflow::scene::{
    description::SceneDescription,
    select::{InstanceIx, SelectableIndex},
    store::{InstanceStore, TechniqueKind},
};

const ROOM: &str = r#"{
    "elements": [
        { "id": "floor", "scale": [8.0, 0.2, 8.0] },
        { "id": "bed", "position": [-2.0, 0.3, -2.0], "tint": [0.3, 0.4, 0.7, 1.0] },
        { "id": "" },
        { "id": "chair", "model": "chair.obj", "texture": "wood.png" }
    ]
}"#;

fn room() -> SceneDescription {
    serde_json::from_str(ROOM).unwrap()
}

#[test]
fn description_fills_defaults_for_omitted_fields() {
    let description = room();
    let bed = &description.elements[1];
    assert_eq!(bed.model, None);
    assert_eq!(bed.texture, None);
    assert_eq!(bed.scale, [1.0, 1.0, 1.0]);
    assert_eq!(bed.rotation_deg, [0.0, 0.0, 0.0]);

    let floor = &description.elements[0];
    assert_eq!(floor.tint, [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(floor.position, [0.0, 0.0, 0.0]);
}

#[test]
fn element_transform_places_the_origin_at_position() {
    let description = room();
    let transform = description.elements[1].transform();
    let origin = transform * Vector4::new(0.0, 0.0, 0.0, 1.0);
    assert!((origin.x - -2.0).abs() < 1e-5);
    assert!((origin.y - 0.3).abs() < 1e-5);
    assert!((origin.z - -2.0).abs() < 1e-5);
}

#[test]
fn missing_scene_file_degrades_to_an_empty_room() {
    let description = SceneDescription::load_or_empty(Path::new("/nonexistent/room.json"));
    assert!(description.elements.is_empty());

    let store = InstanceStore::build(&description, |_| 0);
    assert!(store.is_empty());
    let index = SelectableIndex::build(store.ids());
    assert!(index.is_empty());
}

#[test]
fn store_keeps_file_order_and_assigns_synthetic_ids() {
    let description = room();
    let store = InstanceStore::build(&description, |index| index);
    assert_eq!(store.len(), 4);
    let ids: Vec<_> = store.ids().collect();
    assert_eq!(ids, vec!["floor", "bed", "instance_2", "chair"]);
    assert_eq!(store.get(InstanceIx(3)).model, 3);
    assert_eq!(
        store.get(InstanceIx(1)).transform,
        store.get(InstanceIx(1)).home_transform
    );
}

#[test]
fn all_instances_land_in_the_mesh_group_in_order() {
    let description = room();
    let store = InstanceStore::build(&description, |_| 0);
    let groups = store.groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].kind, TechniqueKind::Mesh);
    let members: Vec<_> = groups[0].members.iter().map(|ix| ix.0).collect();
    assert_eq!(members, vec![0, 1, 2, 3]);
}

#[test]
fn selectable_index_over_the_store_excludes_the_shell() {
    let description = room();
    let store = InstanceStore::build(&description, |_| 0);
    let index = SelectableIndex::build(store.ids());
    let entries: Vec<_> = index
        .iter()
        .map(|entry| (entry.id.as_str(), entry.instance.0))
        .collect();
    assert_eq!(
        entries,
        vec![("bed", 1), ("instance_2", 2), ("chair", 3)]
    );
}

#[test]
fn set_transform_overwrites_in_place() {
    let description = room();
    let mut store = InstanceStore::build(&description, |_| 0);
    let scaled = Matrix4::from_scale(3.0);
    store.set_transform(InstanceIx(0), scaled);
    assert_eq!(store.get(InstanceIx(0)).transform, scaled);
}
