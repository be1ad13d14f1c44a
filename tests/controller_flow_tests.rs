use house_map_viewer::{
    AppCommand, AppController, AppIntent, AppState, Dataset, FilterSelection, PointRecord,
    ViewerOptions,
};

fn main_oak_state() -> AppState {
    let dataset = Dataset::from_records(vec![
        PointRecord::new(1, 52.3580, 6.6390)
            .with_street("Main")
            .with_name("Huis Een"),
        PointRecord::new(2, 52.3601, 6.6410).with_street("Oak"),
        PointRecord::new(3, 52.3622, 6.6355).with_street("Main"),
    ])
    .expect("Testdatensatz sollte gültig sein");

    AppState::with_dataset(dataset, ViewerOptions::default())
}

fn toggle(controller: &mut AppController, state: &mut AppState, value: &str) {
    controller
        .handle_intent(
            state,
            AppIntent::FilterOptionToggled {
                value: value.to_string(),
            },
        )
        .expect("Filter-Toggle sollte ohne Fehler durchlaufen");
}

#[test]
fn test_initial_state_shows_all_records_with_derived_options() {
    let state = main_oak_state();

    assert_eq!(state.filter.selection, FilterSelection::ShowAll);
    assert_eq!(state.visible_ids(), vec![1, 2, 3]);

    let values: Vec<&str> = state
        .filter
        .options
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(values, vec!["Main", "Oak"]);
    assert!(state.selection.selected_record_id.is_none());
}

#[test]
fn test_toggle_sequence_main_oak_oak() {
    let mut controller = AppController::new();
    let mut state = main_oak_state();

    toggle(&mut controller, &mut state, "Main");
    assert_eq!(state.visible_ids(), vec![1, 3]);

    toggle(&mut controller, &mut state, "Oak");
    assert_eq!(state.visible_ids(), vec![2]);
    assert!(state.filter.selection.is_selected("Oak"));
    assert!(!state.filter.selection.is_selected("Main"));

    toggle(&mut controller, &mut state, "Oak");
    assert_eq!(state.filter.selection, FilterSelection::ShowAll);
    assert_eq!(state.visible_ids(), vec![1, 2, 3]);
}

#[test]
fn test_toggle_same_street_twice_restores_all_markers() {
    let mut controller = AppController::new();
    let dataset = Dataset::from_records(vec![
        PointRecord::new(1, 52.3580, 6.6390).with_street("Main"),
        PointRecord::new(2, 52.3601, 6.6410).with_street("Oak"),
    ])
    .expect("Testdatensatz sollte gültig sein");
    let mut state = AppState::with_dataset(dataset, ViewerOptions::default());

    toggle(&mut controller, &mut state, "Main");
    assert_eq!(state.visible_ids(), vec![1]);

    toggle(&mut controller, &mut state, "Main");
    assert_eq!(state.visible_ids(), vec![1, 2]);
}

#[test]
fn test_unknown_filter_value_hides_every_marker() {
    let mut controller = AppController::new();
    let mut state = main_oak_state();

    toggle(&mut controller, &mut state, "Nergensstraat");

    assert_eq!(state.visible_count(), 0);
    assert_eq!(state.filter.active_label(), Some("Nergensstraat"));
}

#[test]
fn test_marker_activation_overwrites_previous_selection() {
    let mut controller = AppController::new();
    let mut state = main_oak_state();

    controller
        .handle_intent(&mut state, AppIntent::MarkerActivated { id: 1 })
        .expect("Marker-Aktivierung sollte durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::MarkerActivated { id: 2 })
        .expect("Marker-Aktivierung sollte durchlaufen");

    let selected = state.selected_record().expect("Eintrag 2 sollte aktiv sein");
    assert_eq!(selected.id, 2);
    assert_eq!(selected.title(), "Oak");
}

#[test]
fn test_selection_survives_filter_that_hides_record() {
    let mut controller = AppController::new();
    let mut state = main_oak_state();

    controller
        .handle_intent(&mut state, AppIntent::MarkerActivated { id: 2 })
        .expect("Marker-Aktivierung sollte durchlaufen");
    toggle(&mut controller, &mut state, "Main");

    assert_eq!(state.selection.selected_record_id, Some(2));
    let scene = controller.build_marker_scene(&state);
    assert!(!scene.contains(2));
    assert_eq!(scene.total_count(), 2);
}

#[test]
fn test_unknown_marker_id_keeps_previous_selection() {
    let mut controller = AppController::new();
    let mut state = main_oak_state();

    controller
        .handle_intent(&mut state, AppIntent::MarkerActivated { id: 1 })
        .expect("Marker-Aktivierung sollte durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::MarkerActivated { id: 999 })
        .expect("Unbekannte ID sollte ignoriert werden");

    assert_eq!(state.selection.selected_record_id, Some(1));
}

#[test]
fn test_marker_scene_flags_selected_marker() {
    let mut controller = AppController::new();
    let mut state = main_oak_state();

    controller
        .handle_intent(&mut state, AppIntent::MarkerActivated { id: 3 })
        .expect("Marker-Aktivierung sollte durchlaufen");

    let scene = controller.build_marker_scene(&state);
    let selected: Vec<u64> = scene
        .markers
        .iter()
        .filter(|m| m.selected)
        .map(|m| m.id)
        .collect();
    assert_eq!(selected, vec![3]);
    assert_eq!(scene.options, state.options);
}

#[test]
fn test_center_on_selected_without_selection_is_noop() {
    let mut controller = AppController::new();
    let mut state = main_oak_state();

    controller
        .handle_intent(&mut state, AppIntent::CenterOnSelectedRequested)
        .expect("Zentrieren ohne Auswahl sollte durchlaufen");

    assert!(state.view.pending_center.is_none());
    assert!(state.command_log.is_empty());
}

#[test]
fn test_center_on_selected_requests_record_position() {
    let mut controller = AppController::new();
    let mut state = main_oak_state();

    controller
        .handle_intent(&mut state, AppIntent::MarkerActivated { id: 2 })
        .expect("Marker-Aktivierung sollte durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::CenterOnSelectedRequested)
        .expect("Zentrieren sollte durchlaufen");

    assert_eq!(state.view.pending_center, Some([52.3601, 6.6410]));
    assert!(state.view.pending_zoom.is_none());
}

#[test]
fn test_reset_view_requests_home_center_and_zoom() {
    let mut controller = AppController::new();
    let mut state = main_oak_state();

    controller
        .handle_intent(&mut state, AppIntent::ResetViewRequested)
        .expect("Reset sollte durchlaufen");

    assert_eq!(state.view.pending_center, Some(state.options.map_center));
    assert_eq!(state.view.pending_zoom, Some(state.options.initial_zoom));
}

#[test]
fn test_zoom_changes_are_clamped_to_max_zoom() {
    let mut controller = AppController::new();
    let mut state = main_oak_state();

    controller
        .handle_intent(&mut state, AppIntent::MapZoomChanged { zoom: 25.0 })
        .expect("Zoom-Meldung sollte durchlaufen");

    assert_eq!(state.view.current_zoom, 20.0);
}

#[test]
fn test_filter_toggle_logs_toggle_and_refresh() {
    let mut controller = AppController::new();
    let mut state = main_oak_state();

    toggle(&mut controller, &mut state, "Oak");

    let entries = state.command_log.entries();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].starts_with("ToggleFilter"));
    assert!(entries[0].contains("Oak"));
    assert_eq!(entries[1], "RefreshVisibleRecords");
}

#[test]
fn test_options_dialog_open_and_close() {
    let mut controller = AppController::new();
    let mut state = main_oak_state();

    controller
        .handle_intent(&mut state, AppIntent::OpenOptionsDialogRequested)
        .expect("Dialog sollte sich öffnen lassen");
    assert!(state.ui.show_options_dialog);

    controller
        .handle_intent(&mut state, AppIntent::CloseOptionsDialogRequested)
        .expect("Dialog sollte sich schließen lassen");
    assert!(!state.ui.show_options_dialog);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_command(&mut state, AppCommand::RequestExit)
        .expect("RequestExit sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert_eq!(
        state.command_log.entries().last().map(String::as_str),
        Some("RequestExit")
    );
}

#[test]
fn test_tile_rebuild_is_deferred_until_options_dialog_closes() {
    let mut controller = AppController::new();
    let mut state = main_oak_state();

    controller
        .handle_intent(&mut state, AppIntent::OpenOptionsDialogRequested)
        .expect("Dialog sollte sich öffnen lassen");
    state.view.tiles_dirty = true;

    assert!(!controller.take_tile_rebuild(&mut state));
    assert!(state.view.tiles_dirty);

    controller
        .handle_intent(&mut state, AppIntent::CloseOptionsDialogRequested)
        .expect("Dialog sollte sich schließen lassen");

    assert!(controller.take_tile_rebuild(&mut state));
    assert!(!controller.take_tile_rebuild(&mut state));
}

#[test]
fn test_cluster_click_zooms_until_markers_separate() {
    let mut controller = AppController::new();
    let mut state = main_oak_state();
    controller
        .handle_intent(&mut state, AppIntent::MapZoomChanged { zoom: 12.0 })
        .expect("Zoom-Meldung sollte durchlaufen");

    let scene = controller.build_marker_scene(&state);
    assert_eq!(scene.clusters.len(), 1);
    let cluster = scene.clusters[0].clone();
    assert_eq!(cluster.count, 3);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ClusterActivated {
                lat: cluster.lat,
                lon: cluster.lon,
                zoom: cluster.expansion_zoom,
            },
        )
        .expect("Cluster-Klick sollte durchlaufen");
    assert_eq!(state.view.pending_center, Some([cluster.lat, cluster.lon]));
    assert_eq!(state.view.pending_zoom, Some(cluster.expansion_zoom));

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapZoomChanged {
                zoom: cluster.expansion_zoom,
            },
        )
        .expect("Zoom-Meldung sollte durchlaufen");
    let scene = controller.build_marker_scene(&state);
    assert!(scene.marker_count() > 0);
    assert_eq!(scene.total_count(), 3);
}
