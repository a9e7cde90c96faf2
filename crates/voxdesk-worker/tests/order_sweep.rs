use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use voxdesk_grocery::{Order, OrderItem};
use voxdesk_progress::{FixedClock, Progressor, StatusFlow, SweepReport};
use voxdesk_worker::{run_sweep_once, OrderStore, StoreError};

fn placed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 20, 12, 0, 0).unwrap()
}

fn order(id: &str, status: &str) -> Order {
    let mut order = Order::new(
        vec![OrderItem {
            id: "milk-01".to_string(),
            qty: 2,
            price: 30.0,
        }],
        placed_at(),
    );
    order.order_id = id.to_string();
    order.status = status.to_string();
    order
}

fn progressor_at(secs: i64) -> Progressor<FixedClock> {
    Progressor::new(
        StatusFlow::order_delivery(),
        FixedClock::new(placed_at() + TimeDelta::seconds(secs)),
    )
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let store = OrderStore::new(dir.path().join("orders"));
    let original = order("order_aaaaaa", "received");

    let path = store.save(&original).expect("save should succeed");

    assert!(path.ends_with("order_order_aaaaaa.json"));
    let loaded = store
        .load("order_aaaaaa")
        .expect("load should succeed")
        .expect("order should exist");
    assert_eq!(loaded, original);
    assert!(store.load("order_missing").expect("load should succeed").is_none());
}

#[test]
fn rejects_ids_that_escape_the_directory() {
    let store = OrderStore::new("orders");
    for bad in ["", "../etc/passwd", "a/b", "a\\b"] {
        assert!(matches!(
            store.path_for(bad),
            Err(StoreError::InvalidOrderId(_))
        ));
    }
}

#[test]
fn missing_directory_has_no_orders() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let store = OrderStore::new(dir.path().join("never-created"));
    assert!(store.load_all().expect("load_all should succeed").is_empty());
}

#[test]
fn sweep_advances_and_persists_due_orders() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let store = OrderStore::new(dir.path());
    store.save(&order("order_000001", "received")).expect("save");
    store.save(&order("order_000002", "preparing")).expect("save");
    store.save(&order("order_000003", "cancelled")).expect("save");

    let report = run_sweep_once(&store, &progressor_at(65)).expect("sweep should succeed");

    assert_eq!(
        report,
        SweepReport {
            advanced: 1,
            unchanged: 1,
            unknown_status: 1,
            malformed: 0,
            failed: 0,
        }
    );
    let reload = |id: &str| store.load(id).expect("load").expect("exists").status;
    assert_eq!(reload("order_000001"), "preparing");
    assert_eq!(reload("order_000002"), "preparing");
    assert_eq!(reload("order_000003"), "cancelled");
}

#[test]
fn repeated_sweeps_reach_delivered_and_stop() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let store = OrderStore::new(dir.path());
    store.save(&order("order_000001", "received")).expect("save");

    let progressor = progressor_at(0);
    let mut seen = Vec::new();
    for _ in 0..6 {
        run_sweep_once(&store, &progressor).expect("sweep should succeed");
        seen.push(store.load("order_000001").expect("load").expect("exists").status);
        progressor.clock().tick(TimeDelta::seconds(30));
    }

    assert_eq!(
        seen,
        [
            "received",
            "confirmed",
            "preparing",
            "out_for_delivery",
            "delivered",
            "delivered"
        ]
    );
}

#[test]
fn corrupt_and_foreign_files_do_not_stop_the_sweep() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let store = OrderStore::new(dir.path());
    store.save(&order("order_000001", "received")).expect("save");
    std::fs::write(dir.path().join("order_broken.json"), "{not json").expect("write");
    std::fs::write(dir.path().join("catalog.json"), "[]").expect("write");
    std::fs::write(
        dir.path().join("order_no_time.json"),
        r#"{"orderId": "no_time", "status": "received"}"#,
    )
    .expect("write");

    let report = run_sweep_once(&store, &progressor_at(200)).expect("sweep should succeed");

    assert_eq!(report.total(), 2);
    assert_eq!(report.advanced, 1);
    assert_eq!(report.malformed, 1);
    let delivered = store.load("order_000001").expect("load").expect("exists");
    assert_eq!(delivered.status, "delivered");
    let untouched = store.load("no_time").expect("load").expect("exists");
    assert_eq!(untouched.status, "received");
}

#[test]
fn unsaved_orders_are_not_reported_as_advanced() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let store = OrderStore::new(dir.path());
    store.save(&order("order_000001", "received")).expect("save");
    store.save(&order("order_000002", "received")).expect("save");
    // A directory where the temp file should go makes the save fail.
    std::fs::create_dir(dir.path().join("order_order_000002.json.tmp")).expect("mkdir");

    let report = run_sweep_once(&store, &progressor_at(40)).expect("sweep should succeed");

    assert_eq!(report.advanced, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.total(), 2);
    let reload = |id: &str| store.load(id).expect("load").expect("exists").status;
    assert_eq!(reload("order_000001"), "confirmed");
    assert_eq!(reload("order_000002"), "received");
}
