use approx::assert_relative_eq;
use glam::{Vec2, Vec3};
use patch_cables::{
    compute_cable_curve, ActionDispatcher, ActionQueue, CableOptions, Connection, DragState,
    PatchStore, SceneController, StoreAction, StoreState, Theme, ThemeColors,
};

fn demo_state() -> StoreState {
    StoreState::from_json(include_str!("fixtures/demo_patch.json"))
        .expect("Demo-Patch sollte gültiges JSON sein")
}

fn pump(store: &mut PatchStore, controller: &mut SceneController) {
    for action in store.take_notifications() {
        controller.handle_action(&action, store.state());
    }
}

fn loaded() -> (PatchStore, SceneController) {
    let mut store = PatchStore::new(StoreState::new());
    let mut controller = SceneController::new(CableOptions::default(), store.state());
    store.dispatch(StoreAction::CreateProject(Box::new(demo_state())));
    pump(&mut store, &mut controller);
    (store, controller)
}

#[test]
fn test_fixture_parses_store_shape() {
    let state = demo_state();

    assert_eq!(state.processors.len(), 3);
    assert_eq!(state.connections.len(), 1);
    assert_eq!(state.theme, Theme::Dark);
    assert!(state.selected_id.is_none());

    let (source, destination) = state
        .connection_anchors("conn-1")
        .expect("Anker sollten auflösbar sein");
    assert_eq!(source, Vec2::new(-30.0, 11.0));
    assert_eq!(destination, Vec2::new(0.0, -21.0));
}

#[test]
fn test_loaded_cable_matches_geometry_function() {
    let (_store, controller) = loaded();

    let cable = controller
        .cables()
        .cable("conn-1")
        .expect("Kabel sollte existieren");
    let expected = compute_cable_curve(Vec2::new(-30.0, 11.0), Vec2::new(0.0, -21.0));

    assert_eq!(cable.geometry.count(), 51);
    for (actual, expected) in cable.geometry.positions().iter().zip(&expected) {
        assert_relative_eq!(actual.x, expected.x);
        assert_relative_eq!(actual.y, expected.y);
        assert_relative_eq!(actual.z, 0.0);
    }
    assert!(!cable.delete_button.visible);
}

#[test]
fn test_connect_mode_places_delete_button_on_sample_25() {
    let (mut store, mut controller) = loaded();

    store.dispatch(StoreAction::ToggleConnectMode);
    pump(&mut store, &mut controller);

    let cable = controller.cables().cable("conn-1").unwrap();
    assert!(cable.delete_button.visible);
    assert_eq!(cable.delete_button.position, cable.geometry.positions()[25]);

    let hit = controller
        .cables()
        .hit_delete_button(cable.delete_button.position.truncate());
    assert_eq!(hit, Some("conn-1"));
}

#[test]
fn test_full_connect_gesture_adds_second_cable() {
    let (mut store, mut controller) = loaded();
    store.dispatch(StoreAction::ToggleConnectMode);
    pump(&mut store, &mut controller);

    controller
        .start_drag("arp1", "arp1-out", Vec3::new(30.0, 11.0, 0.0))
        .expect("Drag sollte starten");
    assert_eq!(controller.cables().group().preview_object_count(), 2);

    controller
        .move_drag(Vec3::new(5.0, -15.0, 0.0))
        .expect("Drag sollte sich bewegen");
    let preview = controller.cables().group().preview().unwrap();
    assert_eq!(preview.geometry.count(), 51);
    assert_eq!(
        preview.geometry.positions()[50],
        Vec3::new(5.0, -15.0, 0.0)
    );

    controller.end_drag().expect("Drag sollte enden");
    assert_eq!(controller.cables().group().preview_object_count(), 0);
    assert_eq!(*controller.drag().state(), DragState::Idle);

    assert!(controller.commit_connection("out1", "out1-in", &mut store));
    pump(&mut store, &mut controller);

    assert_eq!(store.state().connections.len(), 2);
    assert_eq!(controller.cables().group().len(), 2);
    assert!(controller
        .cables()
        .group()
        .cables()
        .all(|cable| cable.delete_button.visible));
}

#[test]
fn test_commit_into_action_queue_records_single_action() {
    let (_store, mut controller) = loaded();
    let mut queue = ActionQueue::new();

    assert!(!controller.commit_connection("out1", "out1-in", &mut queue));
    assert!(queue.is_empty());

    controller
        .start_drag("epg1", "epg1-out", Vec3::new(-30.0, 11.0, 0.0))
        .unwrap();
    controller.end_drag().unwrap();
    assert!(controller.commit_connection("out1", "out1-in", &mut queue));

    let actions = queue.drain();
    assert_eq!(actions.len(), 1);
    assert_eq!(
        actions[0],
        StoreAction::ConnectProcessors(Connection::new("epg1", "epg1-out", "out1", "out1-in"))
    );
}

#[test]
fn test_invalid_drag_transitions_are_rejected() {
    let (_store, mut controller) = loaded();

    assert!(controller.move_drag(Vec3::ZERO).is_err());
    assert!(controller.end_drag().is_err());

    controller
        .start_drag("epg1", "epg1-out", Vec3::new(-30.0, 11.0, 0.0))
        .unwrap();
    assert!(controller
        .start_drag("arp1", "arp1-out", Vec3::new(30.0, 11.0, 0.0))
        .is_err());
    assert_eq!(controller.cables().group().preview_object_count(), 2);
}

#[test]
fn test_move_all_processors_redraws_every_cable() {
    let (mut store, mut controller) = loaded();

    store.dispatch(StoreAction::DragAllProcessors { dx: 10.0, dy: 5.0 });
    pump(&mut store, &mut controller);

    let cable = controller.cables().cable("conn-1").unwrap();
    assert_eq!(cable.geometry.positions()[0], Vec3::new(-20.0, 16.0, 0.0));
    assert_eq!(cable.geometry.positions()[50], Vec3::new(10.0, -16.0, 0.0));
}

#[test]
fn test_theme_switch_recolors_scene() {
    let (mut store, mut controller) = loaded();

    let theme = store.state().theme.toggled();
    store.dispatch(StoreAction::SetTheme { theme });
    pump(&mut store, &mut controller);

    let light = ThemeColors::for_theme(Theme::Light);
    assert_eq!(
        controller.cables().group().line_material().color,
        light.color_high
    );
    assert_eq!(
        controller.processors().view("out1").unwrap().label_color,
        light.color_high
    );
}

#[test]
fn test_replacing_project_reconciles_to_new_connections() {
    let (mut store, mut controller) = loaded();

    let mut next = demo_state();
    next.connections.remove("conn-1");
    next.connections.insert(
        "conn-7",
        Connection::new("arp1", "arp1-out", "out1", "out1-in"),
    );
    store.dispatch(StoreAction::CreateProject(Box::new(next)));
    pump(&mut store, &mut controller);

    assert_eq!(controller.cables().cable_ids(), vec!["conn-7".to_string()]);
    assert_eq!(controller.cables().cable("conn-7").unwrap().geometry.count(), 51);
}

#[test]
fn test_shutdown_tears_down_scene() {
    let (_store, mut controller) = loaded();
    controller
        .start_drag("epg1", "epg1-out", Vec3::new(-30.0, 11.0, 0.0))
        .unwrap();

    controller.shutdown();

    assert!(controller.cables().group().is_empty());
    assert_eq!(controller.cables().group().preview_object_count(), 0);
    assert!(controller.processors().is_empty());
    assert!(!controller.drag().is_dragging());
}
