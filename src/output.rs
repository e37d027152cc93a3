//! CLI output formatting for `check` and `build`.
//!
//! # Information-First Display
//!
//! Output leads with what the visitor will see (titles, slot contents,
//! record counts); file names appear as secondary context on indented
//! lines. Fallback values are marked so a gap in the catalog is visible
//! before the page ships.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Showcase
//!     Featured: Harbor Ledger
//!     Slot 1: Lighthouse Tracker
//!         Tint: #EFFFEF
//!     Slot 2: (empty)
//!         Tint: #FFE7EB (default)
//!
//! Catalog
//!     001 Projects (2)
//!     002 Nav links (1)
//!     ...
//!
//! Notes
//!     1 secondary project(s); empty slots render fallback values
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Build
//!
//! ```text
//! Page → index.html
//!     Stylesheet → style.3f2a91c0.css
//!     Runtime → motion.8be10d44.js
//!
//! Generated 1 page, 5 animations, 1 asset
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure; the caller supplies anything read from disk.

use crate::content::{Catalog, CatalogNote};
use crate::generate::GenerateReport;
use crate::showcase::{Slot, select};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    }
}

/// A card title, or `(empty)` when the card has nothing to show.
fn title_or_empty(title: &str) -> String {
    if title.is_empty() {
        "(empty)".to_string()
    } else {
        truncate_desc(title, 60)
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

// ============================================================================
// Check output
// ============================================================================

/// What `check` found on disk next to the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceFiles {
    pub has_config: bool,
    pub has_catalog: bool,
    /// Assets directory name, when it exists.
    pub assets_dir: Option<String>,
}

/// Format `check` output: showcase resolution, record counts, notes, files.
pub fn format_check_output(
    catalog: &Catalog,
    notes: &[CatalogNote],
    files: &SourceFiles,
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Showcase".to_string());
    let selection = select(catalog.projects());
    let featured = selection.featured_card();
    lines.push(format!(
        "{}Featured: {}",
        indent(1),
        title_or_empty(featured.title)
    ));
    if !featured.description.is_empty() {
        lines.push(format!(
            "{}{}",
            indent(2),
            truncate_desc(featured.description, 60)
        ));
    }
    for slot in Slot::ALL {
        let card = selection.secondary_card(slot);
        lines.push(format!(
            "{}Slot {}: {}",
            indent(1),
            slot.index() + 1,
            title_or_empty(card.title)
        ));
        let is_default = selection
            .slot(slot)
            .and_then(|p| p.bg_color.as_deref())
            .is_none_or(str::is_empty);
        let marker = if is_default { " (default)" } else { "" };
        lines.push(format!("{}Tint: {}{}", indent(2), card.tint, marker));
    }

    lines.push(String::new());
    lines.push("Catalog".to_string());
    let counts = [
        ("Projects", catalog.projects().len()),
        ("Nav links", catalog.nav_links().len()),
        ("Words", catalog.words().len()),
        ("Counters", catalog.counters().len()),
        ("Logos", catalog.logos().len()),
        ("Abilities", catalog.abilities().len()),
        ("Experience", catalog.experience().len()),
        ("Experience logos", catalog.experience_logos().len()),
        ("Tech stack icons", catalog.tech_stack_icons().len()),
        ("Tech stack images", catalog.tech_stack_images().len()),
        ("Testimonials", catalog.testimonials().len()),
        ("Socials", catalog.socials().len()),
    ];
    for (i, (label, n)) in counts.iter().enumerate() {
        lines.push(format!("{}{} {} ({})", indent(1), format_index(i + 1), label, n));
    }

    if !notes.is_empty() {
        lines.push(String::new());
        lines.push("Notes".to_string());
        for note in notes {
            lines.push(format!("{}{}", indent(1), note));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if files.has_config {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if files.has_catalog {
        lines.push(format!("{}content.toml", indent(1)));
    }
    if let Some(dir) = &files.assets_dir {
        lines.push(format!("{}{}/", indent(1), dir));
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(catalog: &Catalog, notes: &[CatalogNote], files: &SourceFiles) {
    for line in format_check_output(catalog, notes, files) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format `build` output from the generation report.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    let page = report
        .files
        .iter()
        .find(|f| f.ends_with(".html"))
        .map(String::as_str)
        .unwrap_or("index.html");
    lines.push(format!("Page \u{2192} {}", page));

    for file in &report.files {
        let label = if file.ends_with(".css") {
            "Stylesheet"
        } else if file.ends_with(".js") {
            "Runtime"
        } else {
            continue;
        };
        lines.push(format!("{}{} \u{2192} {}", indent(1), label, file));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated 1 page, {}, {}",
        plural(report.animations, "animation"),
        plural(report.assets_copied, "asset")
    ));
    lines
}

/// Print build output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
