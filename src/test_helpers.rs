//! Shared test utilities for the folio test suite.
//!
//! Record builders keep catalog-shaped tests short, and the fixture helper
//! gives each filesystem test an isolated copy of `fixtures/content/`.
//!
//! ```rust
//! let catalog = Catalog::with_projects(vec![
//!     project("main", "X"),
//!     tinted("s1", "Y", "#111"),
//!     secondary("s2", "Z"),
//! ]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::Project;

// =========================================================================
// Record builders
// =========================================================================

/// A project with only id and title set.
pub fn project(id: &str, title: &str) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        ..Project::default()
    }
}

/// A non-featured project without a tint. Panics on `"main"`.
pub fn secondary(id: &str, title: &str) -> Project {
    assert_ne!(id, "main", "secondary() builds non-featured projects only");
    project(id, title)
}

/// A non-featured project with a `bg_color`.
pub fn tinted(id: &str, title: &str, color: &str) -> Project {
    Project {
        bg_color: Some(color.to_string()),
        ..secondary(id, title)
    }
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    for entry in walkdir::WalkDir::new(&fixtures) {
        let entry = entry.unwrap();
        let rel = entry.path().strip_prefix(&fixtures).unwrap();
        let dst = tmp.path().join(rel);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dst).unwrap();
        } else {
            std::fs::copy(entry.path(), &dst).unwrap();
        }
    }
    tmp
}

// =========================================================================
// Markup helpers
// =========================================================================

/// Number of non-overlapping occurrences of `needle` in `html`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}
