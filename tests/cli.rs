//! End-to-end tests driving the `mx_numplan` binary.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str = " CLAVE_CENSAL, POBLACION, MUNICIPIO, ESTADO, PRESUSCRIPCION, REGION, ASL, \
                      NIR, SERIE, NUMERACION_INICIAL, NUMERACION_FINAL, OCUPACION, TIPO_RED, \
                      MODALIDAD, RAZON_SOCIAL, FECHA_ASIGNACION";

fn row(nir: &str, serie: &str, first: u32, last: u32, network: &str) -> String {
    format!(
        "09001001, CIUDAD, MUNICIPIO, CDMX, 1, 1, 1, {nir}, {serie}, {first}, {last}, 10000, \
         {network}, CPP, OPERADOR, 01/01/2020"
    )
}

fn write_dataset(dir: &Path, name: &str, rows: &[String]) {
    let mut text = String::from(HEADER);
    for r in rows {
        text.push('\n');
        text.push_str(r);
    }
    text.push('\n');
    fs::write(dir.join(name), text).unwrap();
}

/// Two mobile blocks that merge into one interval, plus a fixed-line block.
fn january(dir: &Path) {
    write_dataset(
        dir,
        "pnn_Publico_01_01_2024.csv",
        &[
            row("55", "1234", 0, 9999, "MOVIL"),
            row("55", "1235", 0, 4999, "MOVIL"),
            row("33", "1000", 0, 9999, "FIJO"),
        ],
    );
}

/// January minus half a block, plus a new block.
fn february(dir: &Path) {
    write_dataset(
        dir,
        "pnn_Publico_01_02_2024.csv",
        &[
            row("55", "1234", 0, 9999, "MOVIL"),
            row("81", "2000", 0, 9999, "MOVIL"),
            row("33", "1000", 0, 9999, "FIJO"),
        ],
    );
}

fn read_sink(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn bin() -> Command {
    Command::cargo_bin("mx_numplan").unwrap()
}

#[test]
fn shows_help() {
    bin().arg("--help").assert().success().stdout(predicate::str::contains("mx_numplan"));
}

#[test]
fn summarizes_an_explicit_dataset() {
    let dir = TempDir::new().unwrap();
    january(dir.path());
    bin()
        .args(["--patterns", "--from-file"])
        .arg(dir.path().join("pnn_Publico_01_01_2024.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\\+52551234XXXX\n\\+52551235[0-4]XXX\n"))
        .stdout(predicate::str::contains("summarized 2 mobile ranges to 2 patterns"));
}

#[test]
fn generic_syntax_without_prefix() {
    let dir = TempDir::new().unwrap();
    january(dir.path());
    bin()
        .args(["--patterns", "--syntax", "generic", "--category", "other", "--format", "csv"])
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("category,pattern\nother,331000****\n");
}

#[test]
fn picks_the_latest_dataset_by_date() {
    let dir = TempDir::new().unwrap();
    january(dir.path());
    february(dir.path());
    let output = bin().args(["--format", "json", "--data-dir"]).arg(dir.path()).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["dataset"].as_str().unwrap().ends_with("pnn_Publico_01_02_2024.csv"));
    assert_eq!(value["categories"][0]["covered_numbers"], 20_000);
}

#[test]
fn analysis_reports_range_changes() {
    let dir = TempDir::new().unwrap();
    january(dir.path());
    february(dir.path());
    bin()
        .args(["--analysis", "--format", "csv", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "pnn_Publico_01_01_2024.csv,pnn_Publico_01_02_2024.csv,\
             removed,mobile,5512350000,5512354999",
        ))
        .stdout(predicate::str::contains("added,mobile,8120000000,8120009999"));
}

#[test]
fn sync_provisions_and_then_has_nothing_to_do() {
    let dir = TempDir::new().unwrap();
    january(dir.path());
    let sink = dir.path().join("sink.json");

    bin()
        .args(["--sink"])
        .arg(&sink)
        .args(["--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 new patterns need to be provisioned"));

    let stored = read_sink(&sink);
    let mobile = stored["partitions"]["mobile"].as_object().unwrap();
    assert_eq!(mobile.len(), 2);
    assert!(mobile.values().all(|target| target == "blocking"));

    bin()
        .args(["--read-only", "--sink"])
        .arg(&sink)
        .args(["--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 new patterns need to be provisioned"))
        .stdout(predicate::str::contains("0 patterns need to be removed"));
}

#[test]
fn read_only_sync_leaves_the_sink_untouched() {
    let dir = TempDir::new().unwrap();
    january(dir.path());
    let sink = dir.path().join("sink.json");
    bin()
        .args(["--read-only", "--sink"])
        .arg(&sink)
        .args(["--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("read-only: sink left unchanged"));
    assert!(!sink.exists());
}

#[test]
fn route_patterns_go_to_an_existing_route_list() {
    let dir = TempDir::new().unwrap();
    january(dir.path());
    let sink = dir.path().join("sink.json");
    fs::write(&sink, r#"{"route_lists": ["MX-Mobile"]}"#).unwrap();

    bin()
        .args(["--route-list", "MX-Mobile", "--sink"])
        .arg(&sink)
        .args(["--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("provisioning route patterns to route list 'MX-Mobile'"))
        .stdout(predicate::str::contains("2 new patterns need to be provisioned"));

    let stored = read_sink(&sink);
    let mobile = stored["partitions"]["mobile"].as_object().unwrap();
    assert_eq!(mobile.len(), 2);
    assert!(mobile.values().all(|target| target["route_list"] == "MX-Mobile"));
}

#[test]
fn missing_route_list_exits_with_two() {
    let dir = TempDir::new().unwrap();
    january(dir.path());
    let sink = dir.path().join("sink.json");

    bin()
        .args(["--route-list", "MX-Mobile", "--sink"])
        .arg(&sink)
        .args(["--data-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Route list 'MX-Mobile' needs to be created"));
    assert!(!sink.exists());

    bin()
        .args(["--read-only", "--route-list", "MX-Mobile", "--sink"])
        .arg(&sink)
        .args(["--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 new patterns need to be provisioned"));
}

#[test]
fn empty_data_dir_fails() {
    let dir = TempDir::new().unwrap();
    bin()
        .args(["--data-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn wrong_digit_length_fails() {
    let dir = TempDir::new().unwrap();
    january(dir.path());
    bin()
        .args(["--digits", "8", "--data-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 8"));
}
