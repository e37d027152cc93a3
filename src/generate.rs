//! HTML site generation.
//!
//! Takes the content catalog and the resolved site config and writes the
//! finished one-page site.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html             # The whole portfolio
//! ├── style.3f2a91c0.css     # Palette variables + base styles
//! ├── motion.8be10d44.js     # Animation runtime
//! └── images/ ...            # Copied verbatim from content/assets/
//! ```
//!
//! ## Animations
//!
//! Sections register their entrances on a [`Timeline`] while rendering. The
//! finished timeline is embedded in the page as
//! `<script type="application/json" id="motion-timeline">`, which the runtime
//! reads on load. Without JavaScript every element simply shows in its
//! resting state.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (palette injected from config)
//! - `static/motion.js`: Timeline player and counter roll-up

use crate::animation::{AnimationPort, Timeline};
use crate::config::{self, SiteConfig};
use crate::content::Catalog;
use crate::fingerprint::{fingerprinted_name, is_fingerprinted};
use crate::sections;
use crate::showcase::ShowcaseView;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/motion.js");

const PAGE_NAME: &str = "index.html";
const CSS_STEM: &str = "style";
const JS_STEM: &str = "motion";

/// Id of the embedded timeline document.
pub const TIMELINE_SCRIPT_ID: &str = "motion-timeline";

/// What [`generate`] wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    /// Output files relative to the output directory, in write order.
    pub files: Vec<String>,
    /// Number of animation registrations embedded in the page.
    pub animations: usize,
    /// Number of files copied from the assets directory.
    pub assets_copied: usize,
}

pub fn generate(
    catalog: &Catalog,
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;
    remove_stale_assets(output_dir)?;

    // Assets go first so nothing copied can land on a generated file.
    let assets_copied = copy_assets(&source_dir.join(&config.site.assets_dir), output_dir)?;

    let mut files = Vec::new();

    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );
    let css_name = fingerprinted_name(CSS_STEM, "css", css.as_bytes());
    fs::write(output_dir.join(&css_name), &css)?;
    files.push(css_name.clone());

    let js_name = fingerprinted_name(JS_STEM, "js", JS.as_bytes());
    fs::write(output_dir.join(&js_name), JS)?;
    files.push(js_name.clone());

    let mut timeline = Timeline::new();
    let body = render_body(catalog, config, &mut timeline);
    let page = base_document(
        &config.site.title,
        &css_name,
        &js_name,
        &timeline_json(&timeline)?,
        body,
    );
    fs::write(output_dir.join(PAGE_NAME), page.into_string())?;
    files.push(PAGE_NAME.to_string());
    info!(
        animations = timeline.len(),
        output = %output_dir.display(),
        "page written"
    );

    Ok(GenerateReport {
        files,
        animations: timeline.len(),
        assets_copied,
    })
}

/// Delete `style.<hash>.css` and `motion.<hash>.js` files from earlier builds.
fn remove_stale_assets(output_dir: &Path) -> Result<usize, GenerateError> {
    let mut removed = 0;
    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let stale =
            is_fingerprinted(&name, CSS_STEM, "css") || is_fingerprinted(&name, JS_STEM, "js");
        if stale && entry.file_type()?.is_file() {
            fs::remove_file(entry.path())?;
            removed += 1;
        }
    }
    if removed > 0 {
        debug!(count = removed, "stale assets removed");
    }
    Ok(removed)
}

/// Copy the assets directory into the output root, preserving structure.
///
/// A missing assets directory copies nothing. A top-level `index.html` is
/// skipped: the generated page owns that name.
fn copy_assets(assets_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    if !assets_dir.is_dir() {
        debug!(path = %assets_dir.display(), "no assets directory");
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(assets_dir).min_depth(1) {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(assets_dir)
            .unwrap_or(entry.path());
        if rel == Path::new(PAGE_NAME) {
            warn!(path = %entry.path().display(), "asset would replace the generated page, skipped");
            continue;
        }
        let dst = output_dir.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst)?;
        } else {
            if let Some(parent) = dst.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dst)?;
            copied += 1;
        }
    }
    info!(count = copied, "assets copied");
    Ok(copied)
}

/// Timeline JSON safe to embed inside a `<script>` element.
fn timeline_json(timeline: &Timeline) -> Result<String, serde_json::Error> {
    Ok(timeline.to_json()?.replace('<', "\\u003c"))
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css_href: &str, js_href: &str, timeline: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(css_href);
            }
            body {
                (content)
                script type="application/json" id=(TIMELINE_SCRIPT_ID) { (PreEscaped(timeline)) }
                script src=(js_href) defer {}
            }
        }
    }
}

/// Renders every section in page order, registering entrances on `port`.
pub fn render_body(catalog: &Catalog, config: &SiteConfig, port: &mut dyn AnimationPort) -> Markup {
    let motion = &config.animation;
    let site = &config.site;
    let showcase = ShowcaseView::new(catalog.projects(), motion);
    showcase.mount(port);

    html! {
        (sections::navbar(catalog.nav_links(), site))
        main {
            (sections::hero(catalog.words(), site, port, motion))
            (sections::counters(catalog.counters(), port, motion))
            (showcase.render())
            (sections::logo_strip(catalog.logos()))
            (sections::feature_cards(catalog.abilities()))
            (sections::experience(catalog.experience(), catalog.experience_logos(), port, motion))
            (sections::tech_stack(catalog.tech_stack_icons(), catalog.tech_stack_images()))
            (sections::testimonials(catalog.testimonials(), port, motion))
        }
        (sections::footer(catalog.socials(), site))
    }
}

// ============================================================================
// Tests
// ============================================================================
