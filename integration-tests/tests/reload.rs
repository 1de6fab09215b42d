use integration_tests::harness::{
    CapturedEvent, fixture_path, init_test_tracing, load_fixture, stage_fixture,
};
use portico_core::conf::BootstrapStore;
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

#[test]
fn reload_swaps_in_new_fixture_and_logs_epoch() {
    // Arrange
    let events = Arc::new(Mutex::new(Vec::<CapturedEvent>::new()));
    init_test_tracing(events.clone());

    let dir = tempdir().unwrap();
    let path = stage_fixture("minimal.yaml", dir.path(), "portico.yaml");
    let store = BootstrapStore::new(load_fixture("minimal.yaml").unwrap());
    let before = store.load();

    fs::copy(fixture_path("gateway.yaml"), &path).unwrap();

    // Act
    let epoch = store.reload_from(&path).unwrap();

    // Assert
    assert_eq!(epoch, 1);
    assert!(store.load().bootstrap.exist_cluster("user-service"));
    assert!(!before.bootstrap.exist_cluster("user-service"));

    let staged = path.display().to_string();
    let events = events.lock().unwrap();
    assert!(
        events
            .iter()
            .any(|e| e.message() == Some("bootstrap published") && e.field("epoch") == Some("1"))
    );
    // The initial load reads the fixture directory, so only the reload logs
    // the staged path.
    let reload_event = events
        .iter()
        .find(|e| {
            e.message() == Some("bootstrap loaded") && e.field("path") == Some(staged.as_str())
        })
        .expect("reload should log the staged path");
    assert_eq!(reload_event.field("clusters"), Some("2"));
    assert_eq!(reload_event.field("listeners"), Some("2"));
}

#[test]
fn rejected_reload_keeps_serving_previous_bootstrap() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = stage_fixture("gateway.yaml", dir.path(), "portico.yaml");
    let store = BootstrapStore::new(load_fixture("gateway.yaml").unwrap());

    fs::copy(fixture_path("invalid.yaml"), &path).unwrap();

    // Act
    let result = store.reload_from(&path);

    // Assert
    assert!(result.is_err());
    assert_eq!(store.epoch(), 0);
    assert_eq!(store.load().bootstrap.listeners().len(), 2);
}
