//! Content catalog.
//!
//! The catalog is the single source of data for the site: typed lists of
//! display records read from `content.toml` in the content directory. Records
//! are flat, carry no behavior, and are never mutated after loading. Views
//! receive the catalog (or one of its slices) at construction.
//!
//! ## File Format
//!
//! ```toml
//! [[nav_links]]
//! name = "Work"
//! link = "#work"
//!
//! [[projects]]
//! id = "main"
//! title = "MetaVerse Builder"
//! description = "A Web3 platform for building 3D worlds."
//! img_path = "/images/project1.png"
//! alt = "MetaVerse Builder"
//!
//! [[projects]]
//! id = "secondary1"
//! title = "CyberShield"
//! img_path = "/images/project2.png"
//! bg_color = "#FFEFDB"
//! ```
//!
//! Every list and every field is optional. Field names also accept the
//! camelCase spelling (`imgPath`, `bgColor`, `navLinks`, ...) so catalogs
//! exported from JavaScript constants load unchanged. Unknown keys are
//! rejected to catch typos early.
//!
//! ## No Content Validation
//!
//! The catalog does not check its records. A catalog without a `main`
//! project, or with a single secondary project, is valid; the views resolve
//! whatever is missing through their fallback rules. [`Catalog::diagnostics`]
//! reports such gaps for the `check` command without failing anything.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Catalog file name inside the content directory.
pub const CATALOG_FILENAME: &str = "content.toml";

/// Id of the featured project.
pub const FEATURED_ID: &str = "main";

const STOCK_CATALOG: &str = include_str!("../static/catalog.toml");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A portfolio project shown in the work showcase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Project {
    /// Unique id. `"main"` marks the featured project.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Image URI, passed through to the page untouched.
    #[serde(alias = "imgPath")]
    pub img_path: String,
    pub alt: String,
    /// Tint behind the image in a secondary slot.
    #[serde(alias = "bgColor", skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
}

impl Project {
    pub fn is_featured(&self) -> bool {
        self.id == FEATURED_ID
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavLink {
    pub name: String,
    pub link: String,
}

/// One entry of the hero word carousel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Word {
    pub text: String,
    #[serde(alias = "imgPath")]
    pub img_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterItem {
    pub value: u32,
    pub suffix: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogoIcon {
    #[serde(alias = "imgPath")]
    pub img_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Ability {
    #[serde(alias = "imgPath")]
    pub img_path: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TechStackImage {
    pub name: String,
    #[serde(alias = "imgPath")]
    pub img_path: String,
}

/// A 3D model slot in the skills section.
///
/// The model itself is rendered by the page's 3D viewer; the catalog only
/// carries where to find it and how to place it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TechStackIcon {
    pub name: String,
    #[serde(alias = "modelPath")]
    pub model_path: String,
    pub scale: f32,
    /// Euler angles in radians.
    pub rotation: [f32; 3],
}

impl Default for TechStackIcon {
    fn default() -> Self {
        Self {
            name: String::new(),
            model_path: String::new(),
            scale: 1.0,
            rotation: [0.0; 3],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperienceCard {
    pub review: String,
    #[serde(alias = "imgPath")]
    pub img_path: String,
    #[serde(alias = "logoPath")]
    pub logo_path: String,
    pub title: String,
    pub date: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperienceLogo {
    pub name: String,
    #[serde(alias = "imgPath")]
    pub img_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Testimonial {
    pub name: String,
    pub mentions: String,
    pub review: String,
    #[serde(alias = "imgPath")]
    pub img_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialImage {
    pub name: String,
    #[serde(alias = "imgPath")]
    pub img_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Immutable set of display records.
///
/// Construct with [`Catalog::from_toml_str`], [`load_catalog`],
/// [`Catalog::stock`] or [`Catalog::with_projects`]; read through the slice
/// accessors. There is no way to mutate a catalog once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Catalog {
    projects: Vec<Project>,
    #[serde(alias = "navLinks")]
    nav_links: Vec<NavLink>,
    words: Vec<Word>,
    #[serde(alias = "counterItems")]
    counters: Vec<CounterItem>,
    #[serde(alias = "logoIconsList")]
    logos: Vec<LogoIcon>,
    abilities: Vec<Ability>,
    #[serde(alias = "techStackImgs")]
    tech_stack_images: Vec<TechStackImage>,
    #[serde(alias = "techStackIcons")]
    tech_stack_icons: Vec<TechStackIcon>,
    #[serde(alias = "expCards")]
    experience: Vec<ExperienceCard>,
    #[serde(alias = "expLogos")]
    experience_logos: Vec<ExperienceLogo>,
    testimonials: Vec<Testimonial>,
    #[serde(alias = "socialImgs")]
    socials: Vec<SocialImage>,
}

impl Catalog {
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    /// The sample catalog shipped with the binary.
    pub fn stock() -> Self {
        toml::from_str(STOCK_CATALOG).expect("stock catalog must parse")
    }

    /// A catalog holding only projects; every other list is empty.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Self::default()
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav_links
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn counters(&self) -> &[CounterItem] {
        &self.counters
    }

    pub fn logos(&self) -> &[LogoIcon] {
        &self.logos
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn tech_stack_images(&self) -> &[TechStackImage] {
        &self.tech_stack_images
    }

    pub fn tech_stack_icons(&self) -> &[TechStackIcon] {
        &self.tech_stack_icons
    }

    pub fn experience(&self) -> &[ExperienceCard] {
        &self.experience
    }

    pub fn experience_logos(&self) -> &[ExperienceLogo] {
        &self.experience_logos
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn socials(&self) -> &[SocialImage] {
        &self.socials
    }

    /// Non-fatal observations about the project list.
    ///
    /// Nothing here stops a build: the showcase renders fallbacks for every
    /// gap reported.
    pub fn diagnostics(&self) -> Vec<CatalogNote> {
        let mut notes = Vec::new();

        let featured = self.projects.iter().filter(|p| p.is_featured()).count();
        match featured {
            0 => notes.push(CatalogNote::MissingFeatured),
            1 => {}
            n => notes.push(CatalogNote::DuplicateFeatured(n)),
        }

        let secondary = self.projects.len() - featured;
        if secondary < 2 {
            notes.push(CatalogNote::FewSecondary(secondary));
        }

        let mut seen = std::collections::HashSet::new();
        for project in self.projects.iter().filter(|p| !p.is_featured()) {
            if !seen.insert(project.id.as_str()) {
                notes.push(CatalogNote::DuplicateId(project.id.clone()));
            }
        }

        notes
    }
}

/// A gap in the project list that the showcase covers with fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogNote {
    MissingFeatured,
    DuplicateFeatured(usize),
    FewSecondary(usize),
    DuplicateId(String),
}

impl fmt::Display for CatalogNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogNote::MissingFeatured => write!(
                f,
                "no project with id \"{FEATURED_ID}\"; the featured card renders empty"
            ),
            CatalogNote::DuplicateFeatured(n) => write!(
                f,
                "{n} projects with id \"{FEATURED_ID}\"; only the first is featured"
            ),
            CatalogNote::FewSecondary(n) => write!(
                f,
                "{n} secondary project(s); empty slots render fallback values"
            ),
            CatalogNote::DuplicateId(id) => write!(f, "project id \"{id}\" is used more than once"),
        }
    }
}

/// Load `content.toml` from the content directory.
///
/// A missing file yields an empty catalog: the page still renders, with
/// every section empty and the showcase on fallbacks.
pub fn load_catalog(root: &Path) -> Result<Catalog, CatalogError> {
    let path = root.join(CATALOG_FILENAME);
    if !path.exists() {
        warn!(path = %path.display(), "no catalog found, rendering an empty site");
        return Ok(Catalog::default());
    }
    let content = fs::read_to_string(&path)?;
    let catalog = Catalog::from_toml_str(&content)?;
    debug!(
        projects = catalog.projects.len(),
        testimonials = catalog.testimonials.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Source text of the stock catalog.
///
/// Used by the `gen-content` CLI command.
pub fn stock_content_toml() -> &'static str {
    STOCK_CATALOG
}
