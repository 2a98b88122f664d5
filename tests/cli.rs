//! Command-line tests for the `web-particles` binary.

#![allow(deprecated)] // cargo_bin deprecation

use std::path::Path;

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;
use predicates::prelude::*;

fn write_single_speck(path: &Path) {
    let mut image = RgbImage::from_pixel(120, 90, Rgb([225, 225, 225]));
    draw_filled_circle_mut(&mut image, (60, 45), 14, Rgb([20, 20, 20]));
    image.save(path).unwrap();
}

#[test]
fn missing_input_argument_fails() {
    Command::cargo_bin("web-particles")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("INPUT"));
}

#[test]
fn nonexistent_file_reports_error() {
    Command::cargo_bin("web-particles")
        .unwrap()
        .arg("/nonexistent/web.png")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: cannot analyze /nonexistent/web.png"));
}

#[test]
fn unsupported_format_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("web.gif");
    std::fs::write(&path, b"GIF89a").unwrap();

    Command::cargo_bin("web-particles")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported image format"));
}

#[test]
fn text_report_and_annotated_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("web.png");
    let output = dir.path().join("annotated.png");
    write_single_speck(&input);

    Command::cargo_bin("web-particles")
        .unwrap()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total     1")
                .and(predicate::str::contains("Medium    1"))
                .and(predicate::str::contains("Coarse  >50px")),
        );

    let annotated = image::open(&output).unwrap().to_rgb8();
    assert_eq!(annotated.dimensions(), (120, 90));
    assert!(annotated.pixels().any(|p| *p == Rgb([255, 220, 50])));
}

#[test]
fn json_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("web.png");
    write_single_speck(&input);

    let assert = Command::cargo_bin("web-particles")
        .unwrap()
        .arg(&input)
        .arg("--json")
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["summary"]["total"], 1);
    assert_eq!(report["summary"]["medium"], 1);
    assert_eq!(report["particles"][0]["type"], "MEDIUM");
    assert!(report["particles"][0]["size"].as_f64().unwrap() > 20.0);
}
