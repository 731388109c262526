// File: crates/scatter-cli/tests/cli.rs
// Purpose: Run the binary end to end against temp files.

use std::process::Command;

fn povscatter() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_povscatter"));
    cmd.env("RUST_LOG", "info");
    cmd
}

#[test]
fn writes_svg_and_html() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("states.csv");
    std::fs::write(&input, "state,abbr,poverty,healthcare\nOhio,OH,14.2,22.5\nUtah,UT,11.7,13.6\n").unwrap();
    let svg = dir.path().join("out/chart.svg");
    let html = dir.path().join("out/chart.html");

    let status = povscatter()
        .arg(&input)
        .arg("-o")
        .arg(&svg)
        .arg("--html")
        .arg(&html)
        .status()
        .expect("run povscatter");
    assert!(status.success());

    let svg_text = std::fs::read_to_string(&svg).expect("svg written");
    assert_eq!(svg_text.matches("<circle ").count(), 2);
    let html_text = std::fs::read_to_string(&html).expect("html written");
    assert!(html_text.contains("<div id=\"scatter\"><svg "));
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let svg = dir.path().join("chart.svg");

    let output = povscatter()
        .arg(dir.path().join("absent.csv"))
        .arg("-o")
        .arg(&svg)
        .output()
        .expect("run povscatter");
    assert!(!output.status.success());
    assert!(!svg.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("failed to load chart data").count(), 1, "{stderr}");
}

#[test]
fn config_file_is_applied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("states.csv");
    std::fs::write(&input, "state,abbr,poverty,healthcare\nOhio,OH,14.2,22.5\n").unwrap();
    let cfg = dir.path().join("chart.toml");
    std::fs::write(&cfg, format!("input = {:?}\ntheme = \"dark\"\n\n[layout]\nwidth = 900\n", input)).unwrap();
    let svg = dir.path().join("chart.svg");

    let status = povscatter().arg("--config").arg(&cfg).arg("-o").arg(&svg).status().expect("run povscatter");
    assert!(status.success());
    let text = std::fs::read_to_string(&svg).unwrap();
    assert!(text.contains("height=\"660\" width=\"900\""));
    assert!(text.contains("fill: #40a0ff;"));
}
