//! End-to-end tests of the `folio` binary against `fixtures/content/`.

use folio::content::Catalog;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn folio(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run folio")
}

fn build(source: &Path, output: &Path) -> Output {
    let out = folio(&[
        "build",
        "--source",
        source.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);
    assert!(
        out.status.success(),
        "build failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn written_file(dir: &Path, prefix: &str, ext: &str) -> String {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .find(|name| name.starts_with(prefix) && name.ends_with(ext))
        .unwrap_or_else(|| panic!("no {prefix}*{ext} in {}", dir.display()))
}

/// The embedded `motion-timeline` document.
fn timeline(html: &str) -> serde_json::Value {
    let open = r#"<script type="application/json" id="motion-timeline">"#;
    let start = html.find(open).expect("timeline script missing") + open.len();
    let end = start + html[start..].find("</script>").unwrap();
    serde_json::from_str(&html[start..end]).unwrap()
}

// ===========================================================================
// build
// ===========================================================================

#[test]
fn build_writes_site() {
    let out = TempDir::new().unwrap();
    let run = build(&fixtures(), out.path());

    let css = written_file(out.path(), "style.", ".css");
    let js = written_file(out.path(), "motion.", ".js");
    assert_eq!(css.len(), "style.12345678.css".len());
    assert_eq!(js.len(), "motion.12345678.js".len());
    assert!(out.path().join("images/placeholder.svg").is_file());

    let html = std::fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains(&format!(r#"href="{css}""#)));
    assert!(html.contains(&format!(r#"src="{js}""#)));

    let stdout = String::from_utf8_lossy(&run.stdout);
    assert!(stdout.contains("Page \u{2192} index.html"));
    assert!(stdout.contains("1 asset"));
}

#[test]
fn build_resolves_showcase_from_catalog() {
    let out = TempDir::new().unwrap();
    build(&fixtures(), out.path());
    let html = std::fs::read_to_string(out.path().join("index.html")).unwrap();

    // "main" is second in the fixture catalog but still featured
    let featured = html.find(r#"id="showcase-featured""#).unwrap();
    let slot0 = html.find(r#"id="showcase-slot-0""#).unwrap();
    let slot1 = html.find(r#"id="showcase-slot-1""#).unwrap();
    assert!(html[featured..slot0].contains("Harbor Ledger"));
    assert!(html[featured..slot0].contains(r#"alt="Harbor Ledger dashboard""#));
    assert!(html[slot0..slot1].contains("Lighthouse Tracker"));
    assert!(html[slot0..slot1].contains("background-color: #EFFFEF"));
    assert!(html[slot0..slot1].contains(r#"alt="Project Image""#));
    assert!(html[slot1..].contains("background-color: #FFE7EB"));
}

#[test]
fn build_applies_config() {
    let out = TempDir::new().unwrap();
    build(&fixtures(), out.path());

    let html = std::fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains("<title>Fixture Portfolio</title>"));
    assert!(html.contains("2024 Ada"));

    let css = std::fs::read_to_string(out.path().join(written_file(out.path(), "style.", ".css")))
        .unwrap();
    assert!(css.contains("--color-accent: #3366ff"));
    // unset palette entries keep their defaults
    assert!(css.contains("--color-bg: #000000"));
}

#[test]
fn build_embeds_showcase_timeline() {
    let out = TempDir::new().unwrap();
    build(&fixtures(), out.path());
    let html = std::fs::read_to_string(out.path().join("index.html")).unwrap();
    let regs = timeline(&html)["registrations"].as_array().unwrap().clone();

    let find = |id: &str| {
        regs.iter()
            .find(|r| r["element"] == id)
            .unwrap_or_else(|| panic!("no registration for {id}"))
            .clone()
    };

    let fade = find("work");
    assert_eq!(fade["duration"], 1.5);
    assert!(fade.get("trigger").is_none());

    // stagger = 0.25 from the fixture config
    let slot1 = find("showcase-slot-1");
    assert_eq!(slot1["delay"], 0.75);
    assert_eq!(slot1["from"]["y"], 50.0);
    assert_eq!(slot1["trigger"]["trigger"], "showcase-slot-1");
    assert_eq!(slot1["trigger"]["start"]["offset"], -100.0);
}

#[test]
fn build_without_content_renders_fallbacks() {
    let source = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    build(source.path(), out.path());

    let html = std::fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains(r#"id="work""#));
    assert_eq!(html.matches(r#"alt="Project Image""#).count(), 3);
    assert!(html.contains("background-color: #FFEFDB"));
    assert!(html.contains("background-color: #FFE7EB"));
}

#[test]
fn build_rejects_unknown_config_key() {
    let source = TempDir::new().unwrap();
    std::fs::write(source.path().join("config.toml"), "[site]\ntitel = \"typo\"\n").unwrap();
    let out = TempDir::new().unwrap();

    let run = folio(&[
        "build",
        "--source",
        source.path().to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
    ]);
    assert!(!run.status.success());
    assert!(!out.path().join("index.html").exists());
}

#[test]
fn build_rejects_invalid_timing() {
    let source = TempDir::new().unwrap();
    std::fs::write(
        source.path().join("config.toml"),
        "[animation]\ncard_duration = -1.0\n",
    )
    .unwrap();
    let out = TempDir::new().unwrap();

    let run = folio(&[
        "build",
        "--source",
        source.path().to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
    ]);
    assert!(!run.status.success());
}

// ===========================================================================
// check / gen-*
// ===========================================================================

#[test]
fn check_reports_showcase_and_gaps() {
    let run = folio(&["check", "--source", fixtures().to_str().unwrap()]);
    assert!(run.status.success());
    let stdout = String::from_utf8_lossy(&run.stdout);
    assert!(stdout.contains("Featured: Harbor Ledger"));
    assert!(stdout.contains("Slot 1: Lighthouse Tracker"));
    assert!(stdout.contains("Slot 2: (empty)"));
    assert!(stdout.contains("1 secondary project(s)"));
    assert!(stdout.contains("    assets/"));
}

#[test]
fn gen_config_is_valid_config() {
    let run = folio(&["gen-config"]);
    assert!(run.status.success());
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), &run.stdout).unwrap();
    let config = folio::config::load_config(dir.path()).unwrap();
    assert_eq!(config.animation.stagger, 0.3);
}

#[test]
fn gen_content_round_trips_stock_catalog() {
    let run = folio(&["gen-content"]);
    assert!(run.status.success());
    let catalog = Catalog::from_toml_str(&String::from_utf8_lossy(&run.stdout)).unwrap();
    assert_eq!(catalog, Catalog::stock());
}

#[test]
fn json_log_format_is_accepted() {
    let run = folio(&["--log-format", "json", "gen-config"]);
    assert!(run.status.success());
}
