use crate::conf::{BootstrapStore, DocumentFormat, load_bootstrap, load_bootstrap_str};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

fn validated(doc: &str) -> crate::conf::ValidatedBootstrap {
    load_bootstrap_str(Path::new("portico.yaml"), doc, DocumentFormat::Yaml).unwrap()
}

#[test]
fn store_publishes_initial_value() {
    // Arrange
    let store = BootstrapStore::new(validated("static_resources:\n  clusters:\n    - name: a\n"));

    // Act
    let snapshot = store.load();

    // Assert
    assert_eq!(store.epoch(), 0);
    assert!(snapshot.bootstrap.exist_cluster("a"));
}

#[test]
fn replace_swaps_value_and_bumps_epoch() {
    // Arrange
    let store = BootstrapStore::new(validated("static_resources:\n  clusters:\n    - name: a\n"));
    let before = store.load();

    // Act
    let epoch = store.replace(validated("static_resources:\n  clusters:\n    - name: b\n"));

    // Assert
    assert_eq!(epoch, 1);
    assert_eq!(store.epoch(), 1);
    assert!(store.load().bootstrap.exist_cluster("b"));
    // Snapshots taken earlier are unaffected.
    assert!(before.bootstrap.exist_cluster("a"));
    assert!(!before.bootstrap.exist_cluster("b"));
}

#[test]
fn snapshot_pairs_epoch_with_its_bootstrap() {
    // Arrange
    let store = BootstrapStore::new(validated("static_resources:\n  clusters:\n    - name: a\n"));
    let (initial_epoch, initial) = store.snapshot();

    // Act
    store.replace(validated("static_resources:\n  clusters:\n    - name: b\n"));
    let (epoch, current) = store.snapshot();

    // Assert
    assert_eq!(initial_epoch, 0);
    assert!(initial.bootstrap.exist_cluster("a"));
    assert_eq!(epoch, 1);
    assert!(current.bootstrap.exist_cluster("b"));
    assert!(!current.bootstrap.exist_cluster("a"));
}

#[test]
fn failed_reload_keeps_current_value() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("portico.yaml");
    fs::write(&path, "static_resources:\n  clusters:\n    - name: a\n").unwrap();
    let store = BootstrapStore::new(load_bootstrap(&path).unwrap());

    fs::write(&path, "static_resources:\n  clusters:\n    - name: a\n    - name: a\n").unwrap();

    // Act
    let result = store.reload_from(&path);

    // Assert
    assert!(result.is_err());
    assert_eq!(store.epoch(), 0);
    assert_eq!(store.load().bootstrap.clusters().len(), 1);
}

#[test]
fn successful_reload_publishes_new_value() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("portico.yaml");
    fs::write(&path, "static_resources:\n  clusters:\n    - name: a\n").unwrap();
    let store = BootstrapStore::new(load_bootstrap(&path).unwrap());

    fs::write(&path, "static_resources:\n  clusters:\n    - name: a\n    - name: b\n").unwrap();

    // Act
    let epoch = store.reload_from(&path).unwrap();

    // Assert
    assert_eq!(epoch, 1);
    assert!(store.load().bootstrap.exist_cluster("b"));
}

#[test]
fn concurrent_readers_see_whole_snapshots() {
    // Arrange
    let store = Arc::new(BootstrapStore::new(validated(
        "static_resources:\n  clusters:\n    - name: a\n    - name: b\n",
    )));

    // Act
    std::thread::scope(|s| {
        for _ in 0..4 {
            let store = Arc::clone(&store);
            s.spawn(move || {
                for _ in 0..200 {
                    let (epoch, snapshot) = store.snapshot();
                    let clusters = snapshot.bootstrap.clusters();
                    // Every published tree has exactly two clusters.
                    assert_eq!(clusters.len(), 2);
                    assert_eq!(snapshot.cluster_timeouts.len(), 2);
                    // The epoch belongs to the tree it came with.
                    let expected = match epoch {
                        0 => "a".to_string(),
                        n => format!("c{}", n - 1),
                    };
                    assert!(snapshot.bootstrap.exist_cluster(&expected));
                }
            });
        }

        for round in 0..50 {
            let doc = format!(
                "static_resources:\n  clusters:\n    - name: c{round}\n    - name: d{round}\n"
            );
            store.replace(validated(&doc));
        }
    });

    // Assert
    assert_eq!(store.epoch(), 50);
    assert!(store.load().bootstrap.exist_cluster("c49"));
}
