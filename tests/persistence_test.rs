#![cfg(feature = "storage-rocksdb")]

use assert_cmd::cargo_bin;
use std::process::Command;
use tempfile::tempdir;

mod common;

#[test]
fn test_rocksdb_catalog_survives_across_runs() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("booking_db");

    // 1. First run: seed the catalog and book a stay.
    let properties = dir.path().join("properties.csv");
    let reservations = dir.path().join("reservations.csv");
    let requests1 = dir.path().join("requests1.csv");
    common::write_properties_csv(&properties, &[("p1", "10000", "150", "300", "eur")]).unwrap();
    common::write_reservations_csv(
        &reservations,
        &[("p1", "2024-07-10", "2024-07-15", "confirmed")],
    )
    .unwrap();
    common::write_requests_csv(&requests1, &[("p1", "2024-07-01", "2024-07-04", "")]).unwrap();

    let mut cmd1 = Command::new(cargo_bin!("lodgebook"));
    cmd1.arg(&requests1)
        .arg("--properties")
        .arg(&properties)
        .arg("--reservations")
        .arg(&reservations)
        .arg("--db-path")
        .arg(&db_path)
        .arg("--user")
        .arg("user-42");

    let output1 = cmd1.output().expect("Failed to execute command");
    assert!(output1.status.success());
    let stdout1 = String::from_utf8_lossy(&output1.stdout);
    assert!(stdout1.contains(",eur,10000,150,300,3,30450,auth_"));

    // 2. Second run: same DB path, no seed files. The catalog and the
    // seeded reservation must both still be there.
    let requests2 = dir.path().join("requests2.csv");
    common::write_requests_csv(
        &requests2,
        &[
            ("p1", "2024-08-01", "2024-08-03", ""),
            ("p1", "2024-07-11", "2024-07-13", ""),
        ],
    )
    .unwrap();

    let mut cmd2 = Command::new(cargo_bin!("lodgebook"));
    cmd2.arg(&requests2)
        .arg("--db-path")
        .arg(&db_path)
        .arg("--user")
        .arg("user-42");

    let output2 = cmd2.output().expect("Failed to execute command");
    assert!(output2.status.success());
    let stdout2 = String::from_utf8_lossy(&output2.stdout);
    assert!(stdout2.contains(",eur,10000,150,300,2,20450,auth_"));
    let stderr2 = String::from_utf8_lossy(&output2.stderr);
    assert!(stderr2.contains("already exists"));
}
