use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

mod common;

#[test]
fn test_cli_end_to_end() {
    let dir = tempdir().unwrap();
    let properties = dir.path().join("properties.csv");
    let requests = dir.path().join("requests.csv");
    common::write_properties_csv(&properties, &[("p1", "10000", "150", "300", "eur")]).unwrap();
    common::write_requests_csv(&requests, &[("p1", "2024-07-01", "2024-07-04", "2")]).unwrap();

    let mut cmd = Command::new(cargo_bin!("lodgebook"));
    cmd.arg(&requests)
        .arg("--properties")
        .arg(&properties)
        .arg("--user")
        .arg("user-42");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "reservationId,currency,nightlyPrice,cleaningFee,serviceFee,nights,totalAmount,paymentAuthorizationId,paymentClientSecret",
        ))
        // 3 nights at 10000 plus 150 + 300 in fees.
        .stdout(predicate::str::contains(",eur,10000,150,300,3,30450,auth_"));
}

#[test]
fn test_cli_conflicting_request_is_reported_and_skipped() {
    let dir = tempdir().unwrap();
    let properties = dir.path().join("properties.csv");
    let reservations = dir.path().join("reservations.csv");
    let requests = dir.path().join("requests.csv");
    common::write_properties_csv(&properties, &[("p1", "10000", "150", "300", "eur")]).unwrap();
    common::write_reservations_csv(
        &reservations,
        &[("p1", "2024-07-02", "2024-07-03", "confirmed")],
    )
    .unwrap();
    common::write_requests_csv(
        &requests,
        &[
            ("p1", "2024-07-01", "2024-07-04", ""),
            // Disjoint dates still go through after the failure above.
            ("p1", "2024-08-01", "2024-08-03", ""),
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("lodgebook"));
    cmd.arg(&requests)
        .arg("--properties")
        .arg(&properties)
        .arg("--reservations")
        .arg(&reservations)
        .arg("--user")
        .arg("user-42");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "already exists: selected dates are no longer available",
        ))
        .stdout(predicate::str::contains(",eur,10000,150,300,2,20450,auth_"));
}

#[test]
fn test_cli_without_user_fails_unauthenticated() {
    let dir = tempdir().unwrap();
    let properties = dir.path().join("properties.csv");
    let requests = dir.path().join("requests.csv");
    common::write_properties_csv(&properties, &[("p1", "10000", "150", "300", "eur")]).unwrap();
    common::write_requests_csv(&requests, &[("p1", "2024-07-01", "2024-07-04", "")]).unwrap();

    let mut cmd = Command::new(cargo_bin!("lodgebook"));
    cmd.arg(&requests).arg("--properties").arg(&properties);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("unauthenticated"))
        .stdout(predicate::str::contains("auth_").not());
}

#[test]
fn test_cli_unknown_property_fails_not_found() {
    let dir = tempdir().unwrap();
    let requests = dir.path().join("requests.csv");
    common::write_requests_csv(&requests, &[("ghost", "2024-07-01", "2024-07-04", "")]).unwrap();

    let mut cmd = Command::new(cargo_bin!("lodgebook"));
    cmd.arg(&requests).arg("--user").arg("user-42");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("not found: property was not found"));
}

#[test]
fn test_cli_reservation_missing_boundary_does_not_block() {
    let dir = tempdir().unwrap();
    let properties = dir.path().join("properties.csv");
    let reservations = dir.path().join("reservations.csv");
    let requests = dir.path().join("requests.csv");
    common::write_properties_csv(&properties, &[("p1", "10000", "", "", "")]).unwrap();
    common::write_reservations_csv(&reservations, &[("p1", "", "2024-07-03", "confirmed")])
        .unwrap();
    common::write_requests_csv(&requests, &[("p1", "2024-07-01", "2024-07-04", "")]).unwrap();

    let mut cmd = Command::new(cargo_bin!("lodgebook"));
    cmd.arg(&requests)
        .arg("--properties")
        .arg(&properties)
        .arg("--reservations")
        .arg(&reservations)
        .arg("--user")
        .arg("user-42");

    // Default fees apply: 3 * 10000 + 150 + 300.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(",eur,10000,150,300,3,30450,auth_"));
}

#[test]
fn test_cli_malformed_pricing_data_is_a_precondition_failure() {
    let dir = tempdir().unwrap();
    let properties = dir.path().join("properties.csv");
    let requests = dir.path().join("requests.csv");
    common::write_properties_csv(&properties, &[("p1", "-5", "150", "300", "eur")]).unwrap();
    common::write_requests_csv(&requests, &[("p1", "2024-07-01", "2024-07-04", "")]).unwrap();

    let mut cmd = Command::new(cargo_bin!("lodgebook"));
    cmd.arg(&requests)
        .arg("--properties")
        .arg(&properties)
        .arg("--user")
        .arg("user-42");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("failed precondition"))
        .stderr(predicate::str::contains("nightly_price"));
}
